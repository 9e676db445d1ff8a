//! Numeric checks over decimal strings
//!
//! Values and thresholds are text; both are parsed as `f64` on every check.
//! Anything `f64::from_str` rejects (empty string, words, surrounding
//! whitespace) is not a number.

/// Outcome of comparing a value against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Both sides parsed and the relation holds.
    Holds,
    /// Both sides parsed and the relation does not hold.
    Violated,
    /// The value or the threshold is not a number.
    NotNumeric,
}

/// Parses a decimal string.
#[inline]
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}

/// `true` if `value` parses as a number.
pub fn is_numeric(value: &str) -> bool {
    parse_number(value).is_some()
}

/// Strict `value > threshold`.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::validators::numeric::{Comparison, greater_than};
///
/// assert_eq!(greater_than("5499.99", "5499.98"), Comparison::Holds);
/// assert_eq!(greater_than("5499.98", "5499.98"), Comparison::Violated);
/// assert_eq!(greater_than("two hundred", "5499.98"), Comparison::NotNumeric);
/// ```
pub fn greater_than(value: &str, threshold: &str) -> Comparison {
    compare(value, threshold, |value, threshold| value > threshold)
}

/// Strict `value < threshold`.
pub fn lower_than(value: &str, threshold: &str) -> Comparison {
    compare(value, threshold, |value, threshold| value < threshold)
}

fn compare(value: &str, threshold: &str, holds: impl Fn(f64, f64) -> bool) -> Comparison {
    match (parse_number(value), parse_number(threshold)) {
        (Some(value), Some(threshold)) if holds(value, threshold) => Comparison::Holds,
        (Some(_), Some(_)) => Comparison::Violated,
        _ => Comparison::NotNumeric,
    }
}
