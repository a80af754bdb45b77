//! Parsing abbreviated numbers back into values.

use std::sync::LazyLock;

use tracing::warn;

use super::pattern::PatternCache;
use super::table::SuffixTable;
use crate::error::{NumTextError, Result};
use crate::number::strip_grouping;
use crate::options::DEFAULT_SEPARATOR;

static GLOBAL_CODEC: LazyLock<SuffixCodec> = LazyLock::new(|| {
    let codec = SuffixCodec::new();
    // Prime the default table so the first parse does not pay for it.
    if let Err(error) = codec.cache.get_or_compile(SuffixTable::default_table()) {
        warn!(%error, "failed to precompile default suffix pattern");
    }
    codec
});

/// Parser for abbreviated numbers, owning its pattern cache.
#[derive(Debug, Default)]
pub struct SuffixCodec {
    cache: PatternCache,
}

impl SuffixCodec {
    /// A codec with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide codec, primed with the default suffix table.
    pub fn global() -> &'static SuffixCodec {
        &GLOBAL_CODEC
    }

    pub fn cache(&self) -> &PatternCache {
        &self.cache
    }

    /// Parse `text` such as `"1.5M"` or `"100k"` into a number.
    ///
    /// Grouping commas and surrounding whitespace are ignored. Tags match
    /// `suffixes` in any letter case.
    ///
    /// # Errors
    ///
    /// - [`NumTextError::InvalidSuffix`] when a numeral is followed by
    ///   letters that are not a tag of `suffixes`.
    /// - [`NumTextError::InvalidFormat`] for anything else that is not a
    ///   numeral with an optional tag.
    pub fn parse(&self, text: &str, suffixes: &SuffixTable) -> Result<f64> {
        let cleaned = strip_grouping(text, DEFAULT_SEPARATOR);
        let cleaned = cleaned.trim();
        let regex = self.cache.get_or_compile(suffixes)?;

        let Some(caps) = regex.captures(cleaned) else {
            return Err(classify_mismatch(text, cleaned));
        };

        let number: f64 = caps[1].parse().map_err(|_| NumTextError::InvalidFormat {
            input: text.to_string(),
        })?;

        match caps.get(2).map(|m| m.as_str()).filter(|tag| !tag.is_empty()) {
            None => Ok(number),
            Some(tag) => {
                let index = suffixes
                    .position(tag)
                    .ok_or_else(|| NumTextError::InvalidSuffix {
                        suffix: tag.to_string(),
                        input: text.to_string(),
                    })?;
                Ok(number * SuffixTable::multiplier(index))
            }
        }
    }
}

/// Parse `text` with the process-wide [`SuffixCodec`].
///
/// # Examples
///
/// ```
/// use numtext_core::{SuffixTable, parse_abbreviated};
///
/// let suffixes = SuffixTable::default_table();
/// assert_eq!(parse_abbreviated("1.5M", suffixes).unwrap(), 1_500_000.0);
/// assert_eq!(parse_abbreviated("1b", suffixes).unwrap(), 1_000_000_000.0);
/// assert!(parse_abbreviated("1l", suffixes).is_err());
/// ```
///
/// # Errors
///
/// See [`SuffixCodec::parse`].
pub fn parse_abbreviated(text: &str, suffixes: &SuffixTable) -> Result<f64> {
    SuffixCodec::global().parse(text, suffixes)
}

/// A numeral followed by letters is a bad suffix; anything else is a bad format.
fn classify_mismatch(input: &str, cleaned: &str) -> NumTextError {
    let tag_start = cleaned
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(cleaned.len());
    let (numeral, tag) = cleaned.split_at(tag_start);

    let numeral_ok = !numeral.is_empty()
        && numeral
            .chars()
            .all(|c| c.is_ascii_digit() || c == ',' || c == '.');
    let tag_ok = !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphabetic());

    if numeral_ok && tag_ok {
        NumTextError::InvalidSuffix {
            suffix: tag.to_string(),
            input: input.to_string(),
        }
    } else {
        NumTextError::InvalidFormat {
            input: input.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(text: &str) -> Result<f64> {
        parse_abbreviated(text, SuffixTable::default_table())
    }

    #[test]
    fn test_parses_tagged_numerals() {
        assert_eq!(parse_default("1K").unwrap(), 1_000.0);
        assert_eq!(parse_default("100k").unwrap(), 100_000.0);
        assert_eq!(parse_default("1M").unwrap(), 1_000_000.0);
        assert_eq!(parse_default("1.5M").unwrap(), 1_500_000.0);
        assert_eq!(parse_default("1.56M").unwrap(), 1_560_000.0);
        assert_eq!(parse_default("1.567M").unwrap(), 1_567_000.0);
        assert_eq!(parse_default("1.568M").unwrap(), 1_568_000.0);
        assert_eq!(parse_default("1b").unwrap(), 1_000_000_000.0);
        assert_eq!(parse_default("1B").unwrap(), 1_000_000_000.0);
        assert_eq!(parse_default("2qT").unwrap(), 2e18);
        assert_eq!(parse_default("1Qdc").unwrap(), 1e45);
    }

    #[test]
    fn test_untagged_and_grouped() {
        assert_eq!(parse_default("999").unwrap(), 999.0);
        assert_eq!(parse_default("1,000,000").unwrap(), 1_000_000.0);
        assert_eq!(parse_default("  12.5K  ").unwrap(), 12_500.0);
        assert_eq!(parse_default("1,500K").unwrap(), 1_500_000.0);
    }

    #[test]
    fn test_unknown_tag_is_invalid_suffix() {
        let err = parse_default("1l").unwrap_err();
        assert!(matches!(
            err,
            NumTextError::InvalidSuffix { ref suffix, .. } if suffix == "l"
        ));
        assert!(matches!(
            parse_default("3.2Kb"),
            Err(NumTextError::InvalidSuffix { .. })
        ));
    }

    #[test]
    fn test_malformed_is_invalid_format() {
        for text in ["", "K", "abc", "-5K", "1 K", "1.2.3M", "1e5", "5K!"] {
            assert!(
                matches!(parse_default(text), Err(NumTextError::InvalidFormat { .. })),
                "{text:?} should be an invalid format"
            );
        }
    }

    #[test]
    fn test_global_codec_is_primed() {
        let codec = SuffixCodec::global();
        assert!(codec.cache().contains(SuffixTable::default_table()));
        assert!(SuffixCodec::new().cache().is_empty());
    }

    #[test]
    fn test_shared_across_threads() {
        let suffixes = &SuffixTable::new(["k", "lakh", "crore"]).unwrap();
        let codec = &SuffixCodec::new();
        let values: Vec<f64> = std::thread::scope(|scope| {
            let handles: Vec<_> = ["1k", "2LAKH", "3crore", "4.5k"]
                .into_iter()
                .map(|text| scope.spawn(move || codec.parse(text, suffixes).unwrap()))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });
        assert_eq!(values, [1e3, 2e6, 3e9, 4.5e3]);
        assert_eq!(codec.cache().len(), 1);
    }

    #[test]
    fn test_custom_table() {
        let suffixes = SuffixTable::new(["k", "mn", "bn"]).unwrap();
        let codec = SuffixCodec::new();
        assert_eq!(codec.parse("2MN", &suffixes).unwrap(), 2e6);
        assert_eq!(codec.parse("7bn", &suffixes).unwrap(), 7e9);
        assert!(matches!(
            codec.parse("1M", &suffixes),
            Err(NumTextError::InvalidSuffix { .. })
        ));
        assert_eq!(codec.cache().len(), 1);
    }
}
