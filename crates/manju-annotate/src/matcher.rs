//! Exact and prefix-shortening lookups against a loaded dictionary.
//!
//! All comparisons fold both sides to uppercase; stored entries are never
//! mutated (the fold is precomputed by `manju-dict` at load time). Lookups
//! are linear scans in stored order, which is what makes the documented
//! first-match tie-breaks hold. Dictionary sizes are hundreds to low
//! thousands of entries, so a scan per candidate length is fine.

use manju_dict::Dictionary;
use manju_types::{Annotation, DictionaryEntry, Match, MatchKind};

/// Find the first entry whose surface form equals `phrase`, ignoring case.
///
/// Works for single words and for space-joined multi-word phrases alike.
/// Duplicate surface forms resolve to the earliest entry in stored order.
pub fn exact_phrase<'a>(phrase: &str, dict: &'a Dictionary) -> Option<&'a DictionaryEntry> {
    let want = phrase.to_uppercase();
    dict.surfaces()
        .find(|surface| surface.upper == want)
        .map(|surface| surface.entry)
}

/// Progressive-shortening single-word search.
///
/// Starting from the whole word, filter to single-word entries whose surface
/// form starts with the candidate; at the first candidate length with any
/// hits, return the hit with the longest surface form (earliest entry wins
/// ties). Shorten by one character and retry otherwise. The longest-surface
/// rule favors the most specific known word sharing the prefix; it applies
/// only within the first successful candidate length, never globally.
pub fn best_prefix_match<'a>(word: &str, dict: &'a Dictionary) -> Option<&'a DictionaryEntry> {
    let mut candidate = word.to_uppercase();
    while !candidate.is_empty() {
        let mut best: Option<&'a DictionaryEntry> = None;
        for surface in dict.surfaces() {
            if surface.is_phrase || !surface.upper.starts_with(&candidate) {
                continue;
            }
            let longer = best.is_none_or(|current| {
                surface.entry.words.chars().count() > current.words.chars().count()
            });
            if longer {
                best = Some(surface.entry);
            }
        }
        if best.is_some() {
            return best;
        }
        candidate.pop();
    }
    None
}

/// Annotate the token at `index` of a line of cleaned tokens.
///
/// `cleaned[index]` must be non-empty. The primary lookup prefers an exact
/// hit and records prefix provenance otherwise; the 2/3/4-word windows are
/// exact-only and each is attempted independently of the primary outcome. A
/// window is skipped when any member cleans to the empty string — an
/// unmatchable neighbor means "no candidate", not an empty phrase segment.
pub fn match_token<'a>(
    index: usize,
    original: &str,
    cleaned: &[String],
    dict: &'a Dictionary,
) -> Annotation<'a> {
    let word = cleaned[index].as_str();
    debug_assert!(!word.is_empty());

    let primary = exact_phrase(word, dict)
        .map(|entry| Match {
            kind: MatchKind::Exact,
            entry,
        })
        .or_else(|| {
            best_prefix_match(word, dict).map(|entry| Match {
                kind: MatchKind::Prefix,
                entry,
            })
        });

    Annotation {
        original: original.to_string(),
        primary,
        paired: window_phrase(cleaned, index, 2).and_then(|phrase| exact_phrase(&phrase, dict)),
        three_word: window_phrase(cleaned, index, 3).and_then(|phrase| exact_phrase(&phrase, dict)),
        four_word: window_phrase(cleaned, index, 4).and_then(|phrase| exact_phrase(&phrase, dict)),
    }
}

/// Space-join `width` cleaned tokens starting at `index`, or `None` if the
/// window runs past the line or contains an empty-cleaned token.
fn window_phrase(cleaned: &[String], index: usize, width: usize) -> Option<String> {
    let window = cleaned.get(index..index + width)?;
    if window.iter().any(|token| token.is_empty()) {
        return None;
    }
    Some(window.join(" "))
}
