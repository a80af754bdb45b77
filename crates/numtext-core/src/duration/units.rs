//! Time-unit literals and their length in seconds.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const SECOND: u64 = 1;
pub const MINUTE: u64 = 60;
pub const HOUR: u64 = 3_600;
pub const DAY: u64 = 86_400;
pub const WEEK: u64 = 604_800;

/// Every accepted unit literal, smallest unit first.
///
/// Literals are matched exactly and case-sensitively.
pub const TIME_UNITS: &[(&str, u64)] = &[
    ("s", SECOND),
    ("sec", SECOND),
    ("secs", SECOND),
    ("second", SECOND),
    ("seconds", SECOND),
    ("m", MINUTE),
    ("min", MINUTE),
    ("mins", MINUTE),
    ("minute", MINUTE),
    ("minutes", MINUTE),
    ("h", HOUR),
    ("hr", HOUR),
    ("hrs", HOUR),
    ("hour", HOUR),
    ("hours", HOUR),
    ("d", DAY),
    ("day", DAY),
    ("days", DAY),
    ("w", WEEK),
    ("week", WEEK),
    ("weeks", WEEK),
];

static UNIT_LOOKUP: LazyLock<HashMap<&'static str, u64>> =
    LazyLock::new(|| TIME_UNITS.iter().copied().collect());

/// Seconds per `literal`, if it is a known unit.
pub fn unit_seconds(literal: &str) -> Option<u64> {
    UNIT_LOOKUP.get(literal).copied()
}
