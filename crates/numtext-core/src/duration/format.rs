//! Seconds to remaining-time text.

use super::units::{DAY, HOUR, MINUTE};
use crate::options::RemainingTimeFormat;

/// Placeholder replaced by a unit's value in [`RemainingTimeFormat`] templates.
pub const VALUE_PLACEHOLDER: &str = "%d";

/// Greedy days/hours/minutes/seconds split of a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    #[must_use]
    pub const fn from_seconds(total: u64) -> Self {
        let days = total / DAY;
        let rest = total % DAY;
        let hours = rest / HOUR;
        let rest = rest % HOUR;
        Self {
            days,
            hours,
            minutes: rest / MINUTE,
            seconds: rest % MINUTE,
        }
    }

    /// Seconds the parts add up to, or `None` on overflow.
    #[must_use]
    pub fn total_seconds(&self) -> Option<u64> {
        self.days
            .checked_mul(DAY)?
            .checked_add(self.hours.checked_mul(HOUR)?)?
            .checked_add(self.minutes.checked_mul(MINUTE)?)?
            .checked_add(self.seconds)
    }
}

/// Format `seconds` as short remaining-time text, e.g. `"1h 5m 10s"`.
///
/// Units are emitted largest first, each rendered with its template from
/// `format`, and only when non-zero. Zero seconds yields an empty string.
///
/// # Examples
///
/// ```
/// use numtext_core::{RemainingTimeFormat, to_remaining_time};
///
/// let format = RemainingTimeFormat::default();
/// assert_eq!(to_remaining_time(310, &format), "5m 10s");
/// assert_eq!(to_remaining_time(3910, &format), "1h 5m 10s");
/// ```
pub fn to_remaining_time(seconds: u64, format: &RemainingTimeFormat) -> String {
    let parts = DurationParts::from_seconds(seconds);
    let segments = [
        (parts.days, &format.days),
        (parts.hours, &format.hours),
        (parts.minutes, &format.minutes),
        (parts.seconds, &format.seconds),
    ];

    let mut text = String::new();
    for (value, template) in segments {
        if value > 0 {
            text.push_str(&render(template, value));
            text.push(' ');
        }
    }
    text.trim().to_string()
}

/// Format `seconds` as `HH:MM:SS`.
///
/// Hours are not wrapped at 24; they are zero-padded to two digits and the
/// field grows past two digits from 100 hours on.
///
/// # Examples
///
/// ```
/// use numtext_core::to_long_remaining_time;
///
/// assert_eq!(to_long_remaining_time(3690), "01:01:30");
/// assert_eq!(to_long_remaining_time(360_000), "100:00:00");
/// ```
pub fn to_long_remaining_time(seconds: u64) -> String {
    let hours = seconds / HOUR;
    let minutes = (seconds % HOUR) / MINUTE;
    let secs = seconds % MINUTE;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

fn render(template: &str, value: u64) -> String {
    template.replacen(VALUE_PLACEHOLDER, &value.to_string(), 1)
}
