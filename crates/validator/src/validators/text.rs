//! Text checks

/// `true` if the value has at least one character.
#[inline]
pub fn is_non_empty(value: &str) -> bool {
    !value.is_empty()
}

/// Case-insensitive substring search.
///
/// An empty needle never matches, so `Contains("")` always fails.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::validators::text::contains_ignore_case;
///
/// assert!(contains_ignore_case("Well, Hey There!", "hey there!"));
/// assert!(!contains_ignore_case("hey!", "hey there!"));
/// assert!(!contains_ignore_case("anything", ""));
/// ```
pub fn contains_ignore_case(value: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    if value.is_ascii() && needle.is_ascii() {
        return value
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()));
    }
    value.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_non_empty() {
        assert!(!is_non_empty(""));
        assert!(is_non_empty("x"));
        assert!(is_non_empty(" "));
    }

    #[test]
    fn test_contains_ascii() {
        assert!(contains_ignore_case("HEY THERE!", "hey there!"));
        assert!(contains_ignore_case("oh, hey there! bye", "Hey There!"));
        assert!(!contains_ignore_case("hey", "hey there!"));
    }

    #[test]
    fn test_contains_unicode() {
        assert!(contains_ignore_case("ПРИВЕТ мир", "привет"));
        assert!(contains_ignore_case("Ünïcode", "ÜNÏ"));
        assert!(!contains_ignore_case("Ünïcode", "ascii"));
    }

    #[test]
    fn test_empty_needle_never_matches() {
        assert!(!contains_ignore_case("", ""));
        assert!(!contains_ignore_case("abc", ""));
    }
}
