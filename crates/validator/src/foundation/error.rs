//! Error type for callers that want `Result` instead of failure lists
//!
//! Validation itself never errors: failures are plain [`Rule`] values.
//! [`FieldError`] is a convenience for code that already speaks `?`, such as
//! request handlers that reject a payload on the first invalid field.

use crate::foundation::Rule;

/// Every rule a field failed, with the messages already rendered.
///
/// `Display` prints the messages joined by newlines.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// let err = Validator::new()
///     .ensure("Greeting", "", &[non_empty(), contains("hey")])
///     .unwrap_err();
///
/// assert_eq!(err.codes, ["non_empty", "contains"]);
/// assert_eq!(err.to_string(), "Greeting should not be empty\nGreeting should contain `hey`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{}", .messages.join("\n"))]
pub struct FieldError {
    /// Name of the field that failed.
    pub field: String,
    /// `RuleKind::code()` of each failure, in rule order.
    pub codes: Vec<&'static str>,
    /// Rendered message of each failure, in rule order.
    pub messages: Vec<String>,
}

impl FieldError {
    /// Builds the error from the failures of one field.
    pub fn new(field: impl Into<String>, failures: &[Rule]) -> Self {
        let field = field.into();
        let codes = failures.iter().map(Rule::code).collect();
        let messages = failures
            .iter()
            .map(|rule| rule.error_message_for(&field, None))
            .collect();
        Self {
            field,
            codes,
            messages,
        }
    }

    /// Number of failed rules.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns `true` if no rule failed.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
