//! The matching core of the Manchu gloss annotator.
//!
//! Input text flows through three stages, all pure and synchronous:
//!
//! 1. [`normalize_input`] rewrites transliteration shorthand over the whole
//!    input (`v`/`x`/`q` to `ū`/`š`/`c` and their capitals), then the text
//!    is split into lines and whitespace tokens.
//! 2. [`clean_token`] strips each token down to the gloss alphabet; a token
//!    that cleans to nothing is carried through as a literal.
//! 3. [`match_token`] looks up the cleaned token — exact first, then
//!    progressive prefix shortening — and independently tries exact 2/3/4
//!    word phrases anchored at it.
//!
//! [`annotate_line`] and [`annotate_text`] drive the stages and accumulate
//! the flat, order-preserving match log consumers display alongside the
//! per-token annotations. None of this suspends or touches shared state;
//! callers may run lines and dictionaries in parallel freely.

pub mod annotate;
pub mod matcher;
pub mod normalize;

pub use annotate::{AnnotatedText, annotate_line, annotate_text};
pub use matcher::{best_prefix_match, exact_phrase, match_token};
pub use normalize::{clean_token, normalize_input};
