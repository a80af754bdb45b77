//! Magnitude abbreviation (`1500000` -> `1.5M`).

use tracing::warn;

use super::grouping::comma_format_number;
use super::power_of_ten;
use crate::options::AbbreviateOptions;
use crate::suffix::SuffixTable;

/// Abbreviate `value` with the tier suffix of its magnitude.
///
/// Values below `options.threshold` are digit-grouped instead. At or above
/// it, the value is divided by `10^(3*(tier+1))`, printed with at most three
/// decimals (trailing zeros dropped) and followed by the tier's tag. A value
/// past the last configured tier gets no tag.
///
/// # Examples
///
/// ```
/// use numtext_core::{AbbreviateOptions, SuffixTable, abbreviate};
///
/// let options = AbbreviateOptions::default();
/// let suffixes = SuffixTable::default_table();
/// assert_eq!(abbreviate(999.0, &options, suffixes), "999");
/// assert_eq!(abbreviate(1_500_000.0, &options, suffixes), "1.5M");
/// ```
pub fn abbreviate(value: f64, options: &AbbreviateOptions, suffixes: &SuffixTable) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value < options.threshold {
        return comma_format_number(value, &options.grouping);
    }

    let mut tier = tier_index(value);
    let mut numeral = scaled_numeral(value, tier);

    // Rounding to three decimals can carry into the next tier (999999.9 -> "1000").
    if numeral == "1000" && usize::try_from(tier + 1).is_ok_and(|next| next < suffixes.len()) {
        tier += 1;
        numeral = scaled_numeral(value, tier);
    }

    let Ok(index) = usize::try_from(tier) else {
        return numeral;
    };
    match suffixes.tag(index) {
        Some(tag) => numeral + tag,
        None => {
            warn!(
                value,
                tier = index,
                tiers = suffixes.len(),
                "value exceeds largest suffix tier"
            );
            numeral
        }
    }
}

/// Tier of `value`: `-1` below 1000, `0` for thousands, `1` for millions, ...
///
/// The logarithm only gives an estimate; the result is corrected so that
/// `value / divisor` always lands in `[1, 1000)`.
fn tier_index(value: f64) -> i32 {
    if value < 1000.0 {
        return -1;
    }

    let mut tier = ((value.log10() / 3.0).floor() as i32 - 1).max(-1);
    while value / divisor(tier + 1) >= 1.0 {
        tier += 1;
    }
    while tier >= 0 && value / divisor(tier) < 1.0 {
        tier -= 1;
    }
    tier
}

fn divisor(tier: i32) -> f64 {
    power_of_ten(3 * (tier + 1))
}

fn scaled_numeral(value: f64, tier: i32) -> String {
    let fixed = format!("{:.3}", value / divisor(tier));
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
