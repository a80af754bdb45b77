//! Suffix tables and the abbreviated-number parser.
//!
//! A [`SuffixTable`] lists magnitude tags in tier order. [`SuffixCodec`]
//! turns abbreviated text back into numbers, memoizing one compiled grammar
//! per table in its [`PatternCache`].

mod codec;
mod pattern;
mod table;

pub use codec::{SuffixCodec, parse_abbreviated};
pub use pattern::{PatternCache, case_insensitive_alternation};
pub use table::{DEFAULT_SUFFIXES, SuffixTable};
