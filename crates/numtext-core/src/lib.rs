//! Human-readable number and duration text.
//!
//! Converts between machine numbers and the short text people read and type.
//!
//! # Overview
//!
//! This crate provides:
//! - **Digit grouping**: `1000000` -> `1,000,000`, fraction kept verbatim
//! - **Abbreviation**: `1500000` -> `1.5M`, with a 33-tier suffix table up to `10^99`
//! - **Abbreviation parsing**: `1.5m` -> `1500000`, tags matched in any case
//! - **Duration codec**: `"1d 2h 3m 2s"` <-> `93782`, plus `HH:MM:SS` clock text
//!
//! # Example
//!
//! ```
//! use numtext_core::{
//!     AbbreviateOptions, RemainingTimeFormat, SuffixTable, abbreviate, parse_abbreviated,
//!     to_remaining_time, to_seconds,
//! };
//!
//! let suffixes = SuffixTable::default_table();
//! let text = abbreviate(2_500_000.0, &AbbreviateOptions::default(), suffixes);
//! assert_eq!(text, "2.5M");
//! assert_eq!(parse_abbreviated(&text, suffixes)?, 2_500_000.0);
//!
//! let remaining = to_remaining_time(3910, &RemainingTimeFormat::default());
//! assert_eq!(remaining, "1h 5m 10s");
//! assert_eq!(to_seconds(&remaining)?, 3910.0);
//! # Ok::<(), numtext_core::NumTextError>(())
//! ```
//!
//! # Design Principles
//!
//! - **Formatting never fails**: every number has a textual form
//! - **Parsing is explicit**: malformed input maps to a specific [`NumTextError`]
//! - **Stateless functions**: the only shared state is the suffix pattern cache

mod error;
mod options;

pub mod duration;
pub mod number;
pub mod suffix;

// Error type
pub use error::{NumTextError, Result};

// Options
pub use options::{
    AbbreviateConfig, AbbreviateOptions, DEFAULT_DECIMAL, DEFAULT_SEPARATOR, DEFAULT_THRESHOLD, FormatConfig,
    GroupingOptions, RemainingTimeFormat,
};

// Number formatting
pub use number::{
    abbreviate, comma_format, comma_format_number, normalize_grouping, strip_grouping,
};

// Suffix parsing
pub use suffix::{PatternCache, SuffixCodec, SuffixTable, parse_abbreviated};

// Durations
pub use duration::{to_long_remaining_time, to_remaining_time, to_seconds};
