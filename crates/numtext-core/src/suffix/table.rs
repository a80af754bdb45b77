//! Ordered magnitude suffix tables.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{NumTextError, Result};
use crate::number::power_of_ten;

/// Built-in suffix tags in tier order, `K` (10^3) through `G` (10^99).
pub const DEFAULT_SUFFIXES: [&str; 33] = [
    "K", "M", "B", "T", "Qd", "Qt", "Sx", "Sp", "Oc", "No", "Dc", "Udc", "Ddc", "Tdc", "Qdc",
    "Qnd", "Sxd", "Spd", "Ocd", "Nvd", "Vg", "Uvg", "Dvg", "Tvg", "Qvg", "Qnv", "Sxv", "Spv",
    "Ocv", "Nvv", "Tg", "Utg", "G",
];

static DEFAULT_TABLE: LazyLock<SuffixTable> = LazyLock::new(|| SuffixTable {
    tags: DEFAULT_SUFFIXES.iter().map(ToString::to_string).collect(),
});

/// An immutable, ordered list of suffix tags.
///
/// The tag at index `i` stands for the multiplier `10^(3*(i+1))`. Tags are
/// non-empty, ASCII-alphabetic and unique ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SuffixTable {
    tags: Vec<String>,
}

impl SuffixTable {
    /// Build a table from tags in tier order.
    ///
    /// # Errors
    ///
    /// Returns [`NumTextError::InvalidSuffixTable`] if the table is empty, a
    /// tag is empty or contains anything but ASCII letters, or two tags
    /// differ only in case.
    pub fn new<I, S>(tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        if tags.is_empty() {
            return Err(NumTextError::InvalidSuffixTable(
                "table has no tags".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(tags.len());
        for tag in &tags {
            if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(NumTextError::InvalidSuffixTable(format!(
                    "tag {tag:?} must be one or more ASCII letters"
                )));
            }
            if !seen.insert(tag.to_ascii_lowercase()) {
                return Err(NumTextError::InvalidSuffixTable(format!(
                    "tag {tag:?} is listed more than once"
                )));
            }
        }

        Ok(Self { tags })
    }

    /// The built-in 33-tier table.
    #[must_use]
    pub fn default_table() -> &'static SuffixTable {
        &DEFAULT_TABLE
    }

    /// Tag of tier `index`, if the table has one.
    #[must_use]
    pub fn tag(&self, index: usize) -> Option<&str> {
        self.tags.get(index).map(String::as_str)
    }

    /// Tier index of `tag`, compared ignoring ASCII case.
    #[must_use]
    pub fn position(&self, tag: &str) -> Option<usize> {
        self.tags.iter().position(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Multiplier of tier `index`: `10^(3*(index+1))`.
    #[must_use]
    pub fn multiplier(index: usize) -> f64 {
        let exponent = i32::try_from(3 * (index + 1)).unwrap_or(i32::MAX);
        power_of_ten(exponent)
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Default for SuffixTable {
    fn default() -> Self {
        Self::default_table().clone()
    }
}

impl fmt::Display for SuffixTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tags.join(","))
    }
}
