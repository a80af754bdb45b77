//! Digit grouping and magnitude abbreviation.

mod abbreviate;
mod grouping;

pub use abbreviate::abbreviate;
pub use grouping::{comma_format, comma_format_number, normalize_grouping, strip_grouping};

/// Exact `10^exponent` as the nearest `f64`.
///
/// Goes through the decimal parser so the result matches the literal
/// (`1e21`, `1e99`, ...) bit for bit, which repeated multiplication does not
/// guarantee past `1e22`.
pub(crate) fn power_of_ten(exponent: i32) -> f64 {
    format!("1e{exponent}").parse().unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_of_ten_matches_literals() {
        assert_eq!(power_of_ten(0), 1.0);
        assert_eq!(power_of_ten(3), 1e3);
        assert_eq!(power_of_ten(21), 1e21);
        assert_eq!(power_of_ten(45), 1e45);
        assert_eq!(power_of_ten(99), 1e99);
        assert_eq!(power_of_ten(-3), 1e-3);
        assert_eq!(power_of_ten(400), f64::INFINITY);
    }
}
