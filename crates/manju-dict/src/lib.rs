//! Load gloss dictionaries and expose them as immutable query targets.
//!
//! A dictionary source is an ordered JSON list of `{"Words": ..,
//! "Definition": ..}` records. Loading is async (the only suspension point
//! in the whole pipeline); the constructed [`Dictionary`] is a synchronous,
//! side-effect-free lookup structure that preserves source order and
//! precomputes an uppercase fold of every surface form so matching never
//! re-folds stored entries.
//!
//! Failure is confined to the load boundary. [`LoadError`] distinguishes an
//! unreachable source, a source that answered with a non-success status, and
//! a payload that is not a list of entries. Individual malformed elements
//! inside an otherwise valid list are skipped with a warning rather than
//! failing the load. A failed load is represented downstream as an absent
//! [`DictionarySlot`], never as an empty dictionary.
//!
//! # Example
//! ```no_run
//! use manju_dict::{DictionarySlot, FileSource, load};
//!
//! # async fn demo() {
//! let source = FileSource::new("words_28April2025.json");
//! let slot = match load(&source).await {
//!     Ok(dict) => DictionarySlot::ready("english", dict),
//!     Err(err) => DictionarySlot::absent("english", err),
//! };
//! # let _ = slot;
//! # }
//! ```

use std::path::{Path, PathBuf};

use manju_types::DictionaryEntry;
use thiserror::Error;
use tracing::{info, warn};

/// Why a dictionary could not be loaded.
///
/// All variants are recoverable: the caller records the error in an absent
/// [`DictionarySlot`] and carries on with the remaining dictionaries.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dictionary source unreachable: {0}")]
    Unreachable(String),
    #[error("dictionary source returned status {0}")]
    Status(u16),
    #[error("dictionary payload is not a list of entries: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An asynchronously fetchable dictionary source.
///
/// The loader stays ignorant of transport: a source reports its raw bytes or
/// an [`LoadError::Unreachable`] / [`LoadError::Status`] failure. The bundled
/// [`FileSource`] reads from disk; an HTTP-backed implementation would map
/// non-2xx responses to `Status`.
pub trait DictSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, LoadError>> + Send;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}

/// Dictionary source backed by a local JSON file.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DictSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|err| LoadError::Unreachable(format!("{}: {}", self.path.display(), err)))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Debug)]
struct Surface {
    upper: String,
    is_phrase: bool,
}

/// An immutable, ordered collection of dictionary entries.
///
/// Order is the source order; duplicate surface forms are kept as-is, and
/// every lookup that can tie resolves to the first entry encountered.
#[derive(Debug)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
    surfaces: Vec<Surface>,
}

/// Borrowed view of one entry with its precomputed fold, yielded in stored
/// order by [`Dictionary::surfaces`].
#[derive(Clone, Copy)]
pub struct SurfaceView<'a> {
    pub entry: &'a DictionaryEntry,
    /// Uppercase fold of the surface form, for case-insensitive comparison.
    pub upper: &'a str,
    /// Whether the surface form contains an internal space.
    pub is_phrase: bool,
}

impl Dictionary {
    pub fn from_entries(entries: Vec<DictionaryEntry>) -> Self {
        let surfaces = entries
            .iter()
            .map(|entry| Surface {
                upper: entry.words.to_uppercase(),
                is_phrase: entry.is_phrase(),
            })
            .collect();
        Self { entries, surfaces }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Iterate entries in stored order alongside their folded surface forms.
    pub fn surfaces(&self) -> impl Iterator<Item = SurfaceView<'_>> {
        self.entries
            .iter()
            .zip(&self.surfaces)
            .map(|(entry, surface)| SurfaceView {
                entry,
                upper: &surface.upper,
                is_phrase: surface.is_phrase,
            })
    }
}

/// Fetch a source and parse it into a [`Dictionary`].
pub async fn load<S: DictSource>(source: &S) -> Result<Dictionary, LoadError> {
    let bytes = source.fetch().await?;
    let dict = parse_payload(&bytes)?;
    info!(
        "loaded {} entries from {}",
        dict.len(),
        source.describe()
    );
    Ok(dict)
}

/// Parse a raw payload into a [`Dictionary`].
///
/// The payload must be a JSON list; elements that are not usable entry
/// objects are skipped individually.
pub fn parse_payload(bytes: &[u8]) -> Result<Dictionary, LoadError> {
    let raw: Vec<serde_json::Value> = serde_json::from_slice(bytes)?;
    let mut entries = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<DictionaryEntry>(value) {
            Ok(entry) => entries.push(entry),
            Err(err) => warn!("skipping malformed entry at index {index}: {err}"),
        }
    }
    Ok(Dictionary::from_entries(entries))
}

/// A labelled dictionary that either loaded or is explicitly absent.
///
/// Absent is not empty: an absent slot is skipped by annotation and reported
/// as unavailable, while an empty dictionary would silently match nothing.
pub struct DictionarySlot {
    label: String,
    state: SlotState,
}

enum SlotState {
    Ready(Dictionary),
    Absent(LoadError),
}

impl DictionarySlot {
    pub fn ready(label: impl Into<String>, dictionary: Dictionary) -> Self {
        Self {
            label: label.into(),
            state: SlotState::Ready(dictionary),
        }
    }

    pub fn absent(label: impl Into<String>, error: LoadError) -> Self {
        Self {
            label: label.into(),
            state: SlotState::Absent(error),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn dictionary(&self) -> Option<&Dictionary> {
        match &self.state {
            SlotState::Ready(dict) => Some(dict),
            SlotState::Absent(_) => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match &self.state {
            SlotState::Ready(_) => None,
            SlotState::Absent(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entry_list_in_order() {
        let payload = br#"[
            {"Words": "morin", "Definition": "horse"},
            {"Words": "morin be", "Definition": "the horse (acc.)"}
        ]"#;
        let dict = parse_payload(payload).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.entries()[0].words, "morin");
        let views: Vec<_> = dict.surfaces().collect();
        assert_eq!(views[0].upper, "MORIN");
        assert!(!views[0].is_phrase);
        assert!(views[1].is_phrase);
    }

    #[test]
    fn skips_malformed_elements_but_keeps_the_rest() {
        let payload = br#"[
            {"Words": "morin", "Definition": "horse"},
            {"Words": "broken"},
            42,
            {"Words": "muke", "Definition": "water"}
        ]"#;
        let dict = parse_payload(payload).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.entries()[1].words, "muke");
    }

    #[test]
    fn non_list_payload_is_a_parse_error() {
        let err = parse_payload(br#"{"Words": "morin"}"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn duplicate_surface_forms_are_preserved() {
        let payload = br#"[
            {"Words": "morin", "Definition": "first"},
            {"Words": "morin", "Definition": "second"}
        ]"#;
        let dict = parse_payload(payload).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.entries()[0].definition, "first");
    }

    #[test]
    fn absent_slot_exposes_its_error() {
        let slot = DictionarySlot::absent("english", LoadError::Status(404));
        assert_eq!(slot.label(), "english");
        assert!(slot.dictionary().is_none());
        assert!(matches!(slot.error(), Some(LoadError::Status(404))));
    }
}
