//! Single-rule and batch validation
//!
//! [`Validator`] is the entry point callers hold on to. It is a zero-sized
//! handle: all state lives in the rules and values passed to each call.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let validator = Validator::new();
//! let failures = validator.validate_all(
//!     "Greeting",
//!     "",
//!     &[
//!         non_empty().with_message("Couple greeting words here?"),
//!         contains("hey there!"),
//!     ],
//! );
//!
//! assert_eq!(
//!     validator.format_messages_for("Greeting", &failures),
//!     "Couple greeting words here?\nGreeting should contain `hey there!`"
//! );
//! ```

use crate::foundation::{FieldError, FieldValue, Rule};
use crate::formatter;

/// Evaluates rules against field values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Validator;

impl Validator {
    /// Creates a validator.
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates one rule. Returns the failed rule, or `None`.
    pub fn validate<V>(&self, field: &str, value: &V, rule: &Rule) -> Option<Rule>
    where
        V: FieldValue + ?Sized,
    {
        value.evaluate(field, rule)
    }

    /// Evaluates one rule and hands the outcome to `on_complete`.
    ///
    /// The hook runs exactly once, whether the rule failed, passed or was
    /// skipped by its gate.
    pub fn validate_with<V, F>(
        &self,
        field: &str,
        value: &V,
        rule: &Rule,
        on_complete: F,
    ) -> Option<Rule>
    where
        V: FieldValue + ?Sized,
        F: FnOnce(Option<&Rule>, &str),
    {
        let failure = self.validate(field, value, rule);
        on_complete(failure.as_ref(), field);
        failure
    }

    /// Evaluates every rule and returns the failures in rule order.
    ///
    /// There is no short-circuiting: a failure never skips later rules.
    pub fn validate_all<V>(&self, field: &str, value: &V, rules: &[Rule]) -> Vec<Rule>
    where
        V: FieldValue + ?Sized,
    {
        let failures: Vec<Rule> = rules
            .iter()
            .filter_map(|rule| self.validate(field, value, rule))
            .collect();

        tracing::debug!(
            field,
            rules = rules.len(),
            failures = failures.len(),
            "field validated"
        );
        failures
    }

    /// Like [`validate_all`](Self::validate_all), then passes the failures
    /// and the field name to `on_complete`.
    pub fn validate_all_with<V, F>(
        &self,
        field: &str,
        value: &V,
        rules: &[Rule],
        on_complete: F,
    ) -> Vec<Rule>
    where
        V: FieldValue + ?Sized,
        F: FnOnce(&[Rule], &str),
    {
        let failures = self.validate_all(field, value, rules);
        on_complete(&failures, field);
        failures
    }

    /// Runs [`validate_all`](Self::validate_all) and turns any failure into
    /// a [`FieldError`].
    pub fn ensure<V>(&self, field: &str, value: &V, rules: &[Rule]) -> Result<(), FieldError>
    where
        V: FieldValue + ?Sized,
    {
        let failures = self.validate_all(field, value, rules);
        if failures.is_empty() {
            Ok(())
        } else {
            Err(FieldError::new(field, &failures))
        }
    }

    /// Renders the failures of `field`, one message per line.
    pub fn format_messages_for(&self, field: &str, failures: &[Rule]) -> String {
        formatter::format_messages(field, failures, formatter::DEFAULT_SEPARATOR)
    }

    /// Renders the failures of `field` joined by `separator`.
    pub fn format_messages_with(&self, field: &str, failures: &[Rule], separator: &str) -> String {
        formatter::format_messages(field, failures, separator)
    }
}

/// Evaluates one rule with a default [`Validator`].
pub fn validate<V>(field: &str, value: &V, rule: &Rule) -> Option<Rule>
where
    V: FieldValue + ?Sized,
{
    Validator::new().validate(field, value, rule)
}

/// Evaluates a batch of rules with a default [`Validator`].
pub fn validate_all<V>(field: &str, value: &V, rules: &[Rule]) -> Vec<Rule>
where
    V: FieldValue + ?Sized,
{
    Validator::new().validate_all(field, value, rules)
}
