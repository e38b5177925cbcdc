//! Drive the normalizer and matcher over lines of text.

use manju_dict::Dictionary;
use manju_types::{LineItem, Match, MatchKind};
use serde::Serialize;

use crate::matcher::match_token;
use crate::normalize::{clean_token, normalize_input};

/// Everything found for one input against one dictionary: per-line
/// positional items plus the flat match log.
///
/// The log repeats content that also appears inline on the annotations; it
/// is ordered by discovery (left to right across each line, primary then
/// paired then three- then four-word per token) and never deduplicated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnnotatedText<'a> {
    pub lines: Vec<Vec<LineItem<'a>>>,
    pub matches: Vec<Match<'a>>,
}

/// Annotate one line of whitespace-split tokens against one dictionary.
///
/// Tokens are expected to already be normalized (the caller applies
/// [`normalize_input`] to the whole text up front). Returns the positional
/// items and the match records contributed by this line.
pub fn annotate_line<'a>(
    original_tokens: &[&str],
    dict: &'a Dictionary,
) -> (Vec<LineItem<'a>>, Vec<Match<'a>>) {
    let cleaned: Vec<String> = original_tokens
        .iter()
        .map(|token| clean_token(token))
        .collect();

    let mut items = Vec::with_capacity(original_tokens.len());
    let mut log = Vec::new();

    for (index, original) in original_tokens.iter().enumerate() {
        if cleaned[index].is_empty() {
            items.push(LineItem::Literal {
                text: (*original).to_string(),
            });
            continue;
        }

        let annotation = match_token(index, original, &cleaned, dict);
        if let Some(primary) = annotation.primary {
            log.push(primary);
        }
        if let Some(entry) = annotation.paired {
            log.push(Match {
                kind: MatchKind::Paired,
                entry,
            });
        }
        if let Some(entry) = annotation.three_word {
            log.push(Match {
                kind: MatchKind::ThreeWord,
                entry,
            });
        }
        if let Some(entry) = annotation.four_word {
            log.push(Match {
                kind: MatchKind::FourWord,
                entry,
            });
        }
        items.push(LineItem::Word(annotation));
    }

    (items, log)
}

/// Normalize, split, and annotate a whole submission against one dictionary.
///
/// Lines are preserved positionally: a blank input line yields an empty item
/// list so consumers keep their line numbering. The match log aggregates
/// across all lines in order.
pub fn annotate_text<'a>(raw: &str, dict: &'a Dictionary) -> AnnotatedText<'a> {
    let normalized = normalize_input(raw);
    let mut lines = Vec::new();
    let mut matches = Vec::new();

    for line in normalized.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (items, log) = annotate_line(&tokens, dict);
        lines.push(items);
        matches.extend(log);
    }

    AnnotatedText { lines, matches }
}
