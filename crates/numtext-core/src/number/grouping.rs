//! Digit grouping ("comma formatting").
//!
//! Grouping is purely lexical: the integer digits of the textual form are
//! split into runs of three from the right and the fractional part is
//! re-appended untouched. Nothing is rounded.

use crate::options::GroupingOptions;

/// Group the integer digits of `value` with `options.separator`.
///
/// When `options.minimum` is set and `value` parses as a number below it,
/// `value` is returned unchanged. Any leading non-digit characters (a sign,
/// for instance) stay in front of the grouped digits.
///
/// # Examples
///
/// ```
/// use numtext_core::{GroupingOptions, comma_format};
///
/// let options = GroupingOptions::default();
/// assert_eq!(comma_format("1000000", &options), "1,000,000");
/// assert_eq!(comma_format("1234.5678", &options), "1,234.5678");
/// ```
pub fn comma_format(value: &str, options: &GroupingOptions) -> String {
    if let Some(minimum) = options.minimum
        && let Ok(number) = value.trim().parse::<f64>()
        && number < minimum
    {
        return value.to_string();
    }

    let (integer_part, fraction) = match value.split_once(options.decimal) {
        Some((integer_part, fraction)) => (integer_part, Some(fraction)),
        None => (value, None),
    };

    let digits_start = integer_part
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(integer_part.len());
    let (prefix, digits) = integer_part.split_at(digits_start);

    let mut formatted =
        String::with_capacity(value.len() + digits.len() / 3 * options.separator.len());
    formatted.push_str(prefix);
    group_digits(digits, &options.separator, &mut formatted);

    if let Some(fraction) = fraction
        && !fraction.is_empty()
    {
        formatted.push(options.decimal);
        formatted.push_str(fraction);
    }

    formatted
}

/// Group a number's shortest round-tripping decimal form.
///
/// Uses `.` as the source decimal point and substitutes `options.decimal`
/// when they differ.
pub fn comma_format_number(value: f64, options: &GroupingOptions) -> String {
    let text = value.to_string();
    if options.minimum.is_some_and(|minimum| value < minimum) {
        return text;
    }

    let text = if options.decimal == '.' {
        text
    } else {
        text.replace('.', &options.decimal.to_string())
    };
    comma_format(
        &text,
        &GroupingOptions {
            minimum: None,
            ..options.clone()
        },
    )
}

/// Remove every occurrence of `separator` from `value`.
pub fn strip_grouping(value: &str, separator: &str) -> String {
    if separator.is_empty() {
        return value.to_string();
    }
    value.replace(separator, "")
}

/// Undo `options` grouping: drop separators and map the decimal mark to `.`.
///
/// ```
/// use numtext_core::{GroupingOptions, normalize_grouping};
///
/// let options = GroupingOptions::new().with_separator(".").with_decimal(',');
/// assert_eq!(normalize_grouping("1.234.567,5", &options), "1234567.5");
/// ```
pub fn normalize_grouping(value: &str, options: &GroupingOptions) -> String {
    let stripped = strip_grouping(value, &options.separator);
    if options.decimal == '.' {
        stripped
    } else {
        stripped.replace(options.decimal, ".")
    }
}

fn group_digits(digits: &str, separator: &str, out: &mut String) {
    let count = digits.chars().count();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (count - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
}
