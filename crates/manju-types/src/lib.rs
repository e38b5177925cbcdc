//! Shared types for the Manchu gloss annotator.
//!
//! A dictionary is an ordered list of [`DictionaryEntry`] records whose
//! surface form may contain internal spaces (multi-word phrases). Matching
//! produces one [`Annotation`] per input token, each carrying an optional
//! primary (single-word) [`Match`] plus any exact 2/3/4-word phrase hits
//! anchored at that token. Entries are matched by reference; nothing here is
//! mutated after load.
//!
//! All wire-facing types derive `Serialize` so the HTTP layer can emit them
//! directly.
//!
//! ```rust
//! use manju_types::{DictionaryEntry, Match, MatchKind};
//!
//! let entry = DictionaryEntry::new("morin", "horse");
//! let hit = Match { kind: MatchKind::Exact, entry: &entry };
//! assert!(hit.kind.is_single_word());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// One dictionary record: a surface form and its definition.
///
/// The JSON field names (`Words`, `Definition`) are the contract with the
/// dictionary data producer. Surface forms with internal single spaces are
/// phrase entries; everything else is a single word.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    #[serde(rename = "Words")]
    pub words: String,
    #[serde(rename = "Definition")]
    pub definition: String,
}

impl DictionaryEntry {
    pub fn new(words: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            words: words.into(),
            definition: definition.into(),
        }
    }

    /// Phrase entries contain at least one internal space and only ever
    /// match exactly; single-word entries also participate in prefix search.
    pub fn is_phrase(&self) -> bool {
        self.words.contains(' ')
    }
}

/// How a match was found. Doubles as the styling contract for consumers
/// (exact and prefix hits render differently, as do the phrase widths).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Single word, surface form equal to the cleaned token.
    Exact,
    /// Single word, found by progressive prefix shortening.
    Prefix,
    /// Exact two-word phrase anchored at the token.
    Paired,
    /// Exact three-word phrase anchored at the token.
    ThreeWord,
    /// Exact four-word phrase anchored at the token.
    FourWord,
}

impl MatchKind {
    /// Whether this kind can appear as a token's primary match.
    pub fn is_single_word(self) -> bool {
        matches!(self, MatchKind::Exact | MatchKind::Prefix)
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchKind::Exact => "exact",
            MatchKind::Prefix => "prefix",
            MatchKind::Paired => "paired",
            MatchKind::ThreeWord => "three_word",
            MatchKind::FourWord => "four_word",
        })
    }
}

/// A dictionary hit together with its provenance.
///
/// Also the element type of the aggregate match log: the log is flat,
/// order-preserving, and deliberately not deduplicated (the same entry may
/// appear inline on a token and again in the log).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Match<'a> {
    pub kind: MatchKind,
    pub entry: &'a DictionaryEntry,
}

/// Per-token annotation, in token order.
///
/// `primary` carries only [`MatchKind::Exact`] or [`MatchKind::Prefix`]; the
/// phrase slots are exact-only by design. All four lookups are independent:
/// a token can have a prefix primary and a paired phrase hit at once.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Annotation<'a> {
    /// The token as it appeared in the (normalized) input, before cleaning.
    pub original: String,
    pub primary: Option<Match<'a>>,
    pub paired: Option<&'a DictionaryEntry>,
    pub three_word: Option<&'a DictionaryEntry>,
    pub four_word: Option<&'a DictionaryEntry>,
}

impl<'a> Annotation<'a> {
    /// An annotation with no hits at all (still rendered, just unstyled).
    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
            && self.paired.is_none()
            && self.three_word.is_none()
            && self.four_word.is_none()
    }
}

/// One positional item of an annotated line.
///
/// Tokens that clean to the empty string (pure punctuation, digits) pass
/// through as literals: they are not matchable but still occupy their
/// position so neighbor windows stay aligned.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "item", rename_all = "snake_case")]
pub enum LineItem<'a> {
    Word(Annotation<'a>),
    Literal { text: String },
}
