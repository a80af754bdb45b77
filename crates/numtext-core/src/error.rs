//! Error types for numeral and duration parsing.

use thiserror::Error;

/// Errors raised while parsing abbreviated numbers or duration text.
///
/// Formatting never fails; only the parsers and the suffix table
/// constructor produce these.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NumTextError {
    /// The text is not a numeral followed by an optional suffix tag.
    #[error("invalid suffixed number format: {input:?}")]
    InvalidFormat {
        /// Text as passed by the caller.
        input: String,
    },

    /// The numeral parsed but its trailing tag is not in the suffix table.
    #[error("invalid suffix {suffix:?} in suffixed number {input:?}")]
    InvalidSuffix {
        /// The unrecognized tag.
        suffix: String,
        /// Text as passed by the caller.
        input: String,
    },

    /// A duration token names a unit missing from the time-unit table.
    #[error("unknown time unit {unit:?} in duration {input:?}")]
    InvalidUnit {
        /// The unrecognized unit literal.
        unit: String,
        /// Text as passed by the caller.
        input: String,
    },

    /// The duration text is empty or not made of `<integer><unit>` tokens.
    #[error("invalid duration format: {input:?}")]
    InvalidDuration {
        /// Text as passed by the caller.
        input: String,
    },

    /// A suffix table violates its construction invariants.
    #[error("invalid suffix table: {0}")]
    InvalidSuffixTable(String),

    /// The generated suffix pattern was rejected by the regex engine.
    #[error("suffix pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl NumTextError {
    /// Stable snake_case name of the error kind, for logs and CLI output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "invalid_format",
            Self::InvalidSuffix { .. } => "invalid_suffix",
            Self::InvalidUnit { .. } => "invalid_unit",
            Self::InvalidDuration { .. } => "invalid_duration",
            Self::InvalidSuffixTable(_) => "invalid_suffix_table",
            Self::Pattern(_) => "pattern",
        }
    }
}

/// Result type alias for numtext operations.
pub type Result<T> = std::result::Result<T, NumTextError>;
