//! Formatting options with documented defaults.

use serde::{Deserialize, Serialize};

/// Default digit-group separator.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Default decimal separator.
pub const DEFAULT_DECIMAL: char = '.';

/// Default value at and above which numbers are abbreviated.
pub const DEFAULT_THRESHOLD: f64 = 1000.0;

/// Options for digit grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingOptions {
    /// Values below this are returned as plain, ungrouped text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    /// Inserted between every three integer digits.
    pub separator: String,

    /// Splits the integer part from the fractional part.
    pub decimal: char,
}

impl Default for GroupingOptions {
    fn default() -> Self {
        Self {
            minimum: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            decimal: DEFAULT_DECIMAL,
        }
    }
}

impl GroupingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_decimal(mut self, decimal: char) -> Self {
        self.decimal = decimal;
        self
    }
}

/// Options for magnitude abbreviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbbreviateOptions {
    /// Values below this are grouped instead of abbreviated.
    pub threshold: f64,

    /// Grouping used for values below the threshold.
    pub grouping: GroupingOptions,
}

impl Default for AbbreviateOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            grouping: GroupingOptions::default(),
        }
    }
}

impl AbbreviateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_grouping(mut self, grouping: GroupingOptions) -> Self {
        self.grouping = grouping;
        self
    }
}

/// Per-unit templates for short remaining-time text.
///
/// Each template holds a single `%d` placeholder that receives the unit's
/// integer value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemainingTimeFormat {
    pub seconds: String,
    pub minutes: String,
    pub hours: String,
    pub days: String,
}

impl Default for RemainingTimeFormat {
    fn default() -> Self {
        Self {
            seconds: "%ds".to_string(),
            minutes: "%dm".to_string(),
            hours: "%dh".to_string(),
            days: "%dd".to_string(),
        }
    }
}

/// The `abbreviate` section of a [`FormatConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbbreviateConfig {
    pub threshold: f64,

    /// Grouping below the threshold; the top-level grouping when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<GroupingOptions>,
}

impl Default for AbbreviateConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            grouping: None,
        }
    }
}

/// Complete formatter configuration, as loaded from a config file.
///
/// Every field is optional in the serialized form; missing fields take
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub grouping: GroupingOptions,
    pub abbreviate: AbbreviateConfig,
    pub remaining: RemainingTimeFormat,

    /// Custom suffix tags in tier order; the built-in table when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffixes: Option<Vec<String>>,
}

impl FormatConfig {
    /// Abbreviation options, inheriting `grouping` unless the section overrides it.
    pub fn abbreviate_options(&self) -> AbbreviateOptions {
        AbbreviateOptions {
            threshold: self.abbreviate.threshold,
            grouping: self
                .abbreviate
                .grouping
                .clone()
                .unwrap_or_else(|| self.grouping.clone()),
        }
    }
}
