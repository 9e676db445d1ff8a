//! Rendering failures as display strings
//!
//! [`format_messages`] covers the common case: resolve each failure with
//! its default (or custom) message and join them. [`MessageFormatter`] adds
//! the message-template hook, replacing the predicate of a rule kind
//! (`"be a number"` → `"be a positive number"`) without touching the rules.

use std::borrow::Cow;

use crate::foundation::Rule;

/// Separator used when none is given.
pub const DEFAULT_SEPARATOR: &str = "\n";

/// Resolves the message of every failure and joins them with `separator`.
///
/// Order follows `failures`. An empty slice yields an empty string.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// let failures = validate_all("Greeting", "", &[non_empty(), contains("hey")]);
/// assert_eq!(
///     format_messages("Greeting", &failures, " | "),
///     "Greeting should not be empty | Greeting should contain `hey`"
/// );
/// assert_eq!(format_messages("Greeting", &[], "\n"), "");
/// ```
pub fn format_messages(field: &str, failures: &[Rule], separator: &str) -> String {
    failures
        .iter()
        .map(|rule| rule.error_message_for(field, None))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Configurable failure renderer.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// let formatter = MessageFormatter::new()
///     .with_separator("; ")
///     .with_predicate("is_numeric", "be a positive number");
///
/// let failures = validate_all("Gear Number", "", &[is_numeric(), non_empty()]);
/// assert_eq!(
///     formatter.format("Gear Number", &failures),
///     "Gear Number should be a positive number; Gear Number should not be empty"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MessageFormatter {
    separator: Cow<'static, str>,
    /// Predicate overrides keyed by `RuleKind::code()`.
    predicates: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl Default for MessageFormatter {
    fn default() -> Self {
        Self {
            separator: Cow::Borrowed(DEFAULT_SEPARATOR),
            predicates: Vec::new(),
        }
    }
}

impl MessageFormatter {
    /// Newline separator, default predicates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the string placed between messages.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Replaces the default predicate for every rule of kind `code`.
    ///
    /// Rules with a custom message are unaffected. A later override for the
    /// same code wins.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_predicate(
        mut self,
        code: impl Into<Cow<'static, str>>,
        predicate: impl Into<Cow<'static, str>>,
    ) -> Self {
        let code = code.into();
        self.predicates.retain(|(existing, _)| *existing != code);
        self.predicates.push((code, predicate.into()));
        self
    }

    /// Returns the separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Looks up the predicate override for `code`.
    pub fn predicate(&self, code: &str) -> Option<&str> {
        self.predicates
            .iter()
            .find(|(k, _)| k.as_ref() == code)
            .map(|(_, v)| v.as_ref())
    }

    /// Message for a single failure.
    pub fn message(&self, field: &str, failure: &Rule) -> String {
        failure.error_message_for(field, self.predicate(failure.code()))
    }

    /// Messages for all failures, joined by the separator.
    pub fn format(&self, field: &str, failures: &[Rule]) -> String {
        failures
            .iter()
            .map(|rule| self.message(field, rule))
            .collect::<Vec<_>>()
            .join(&self.separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{greater, is_true, non_empty};

    #[test]
    fn test_empty_failures() {
        assert_eq!(format_messages("Field", &[], DEFAULT_SEPARATOR), "");
        assert_eq!(MessageFormatter::new().format("Field", &[]), "");
    }

    #[test]
    fn test_single_failure_has_no_separator() {
        assert_eq!(
            format_messages("Activate", &[is_true()], "\n"),
            "Activate should be true"
        );
    }

    #[test]
    fn test_override_skips_custom_message() {
        let formatter = MessageFormatter::new().with_predicate("non_empty", "have some words");
        let failures = [non_empty(), non_empty().with_message("Say hi")];
        assert_eq!(
            formatter.format("Greeting", &failures),
            "Greeting should have some words\nSay hi"
        );
    }

    #[test]
    fn test_later_override_wins() {
        let formatter = MessageFormatter::new()
            .with_predicate("greater", "be bigger")
            .with_predicate("greater", "exceed the minimum");
        assert_eq!(formatter.predicate("greater"), Some("exceed the minimum"));
        assert_eq!(
            formatter.message("Min. Price", &greater("1")),
            "Min. Price should exceed the minimum"
        );
    }

    #[test]
    fn test_default_separator() {
        assert_eq!(MessageFormatter::default().separator(), "\n");
    }
}
