//! Duration text codec.
//!
//! Parses short duration text (`"1d 2h 3m"`) into seconds and formats
//! seconds as short (`"1h 5m 10s"`) or clock (`"01:05:10"`) text.

mod format;
mod parse;
mod units;

pub use format::{
    DurationParts, VALUE_PLACEHOLDER, to_long_remaining_time, to_remaining_time,
};
pub use parse::to_seconds;
pub use units::{DAY, HOUR, MINUTE, SECOND, TIME_UNITS, WEEK, unit_seconds};
