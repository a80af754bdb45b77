//! Duration text to seconds.

use tracing::trace;

use super::units::unit_seconds;
use crate::error::{NumTextError, Result};

/// Convert duration text such as `"10m 20s"` into seconds.
///
/// A bare numeral (`"30"`, `"1.5"`) is taken as seconds as-is. Otherwise all
/// whitespace is removed and the rest must be a sequence of
/// `<integer><unit>` tokens; their values are summed, so order does not
/// matter and repeated units add up.
///
/// # Examples
///
/// ```
/// use numtext_core::to_seconds;
///
/// assert_eq!(to_seconds("10m 20s").unwrap(), 620.0);
/// assert_eq!(to_seconds("1d 2h 3m 2s").unwrap(), 93_782.0);
/// ```
///
/// # Errors
///
/// - [`NumTextError::InvalidUnit`] when a token's unit is not a known literal.
/// - [`NumTextError::InvalidDuration`] when the text is empty, has
///   characters outside tokens, or overflows.
pub fn to_seconds(text: &str) -> Result<f64> {
    if let Ok(seconds) = text.trim().parse::<f64>()
        && seconds.is_finite()
    {
        return Ok(seconds);
    }

    let invalid = || NumTextError::InvalidDuration {
        input: text.to_string(),
    };

    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    let mut rest = compact.as_str();
    while !rest.is_empty() {
        let (digits, tail) = split_leading(rest, |c| c.is_ascii_digit());
        let (unit, next) = split_leading(tail, |c| c.is_ascii_alphabetic());
        if digits.is_empty() || unit.is_empty() {
            return Err(invalid());
        }

        let multiplier = unit_seconds(unit).ok_or_else(|| NumTextError::InvalidUnit {
            unit: unit.to_string(),
            input: text.to_string(),
        })?;
        let value: u64 = digits.parse().map_err(|_| invalid())?;
        trace!(value, unit, "duration token");

        total = value
            .checked_mul(multiplier)
            .and_then(|seconds| total.checked_add(seconds))
            .ok_or_else(invalid)?;
        rest = next;
    }

    Ok(total as f64)
}

fn split_leading(text: &str, matches: impl Fn(char) -> bool) -> (&str, &str) {
    let end = text.find(|c: char| !matches(c)).unwrap_or(text.len());
    text.split_at(end)
}
