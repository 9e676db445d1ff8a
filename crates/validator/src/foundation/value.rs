//! Values that can be checked against a rule
//!
//! Text and boolean fields go through different evaluators. [`FieldValue`]
//! picks the right one from the value's type, so callers use a single
//! `validate` for both.

use crate::foundation::Rule;
use crate::validators;

/// A field value the evaluator understands.
///
/// Implemented for `str`, `String` and `bool`.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// assert!(validate("Greeting", "", &non_empty()).is_some());
/// assert!(validate("Activate", &false, &is_true()).is_some());
/// assert!(validate("Activate", &true, &is_true()).is_none());
/// ```
pub trait FieldValue {
    /// Evaluates `rule` against this value.
    ///
    /// Returns the failed rule, or `None` when the value passes or the
    /// rule's gate is closed.
    fn evaluate(&self, field: &str, rule: &Rule) -> Option<Rule>;
}

impl FieldValue for str {
    fn evaluate(&self, field: &str, rule: &Rule) -> Option<Rule> {
        validators::evaluate_text(field, self, rule)
    }
}

impl FieldValue for String {
    fn evaluate(&self, field: &str, rule: &Rule) -> Option<Rule> {
        validators::evaluate_text(field, self, rule)
    }
}

impl FieldValue for bool {
    fn evaluate(&self, field: &str, rule: &Rule) -> Option<Rule> {
        validators::evaluate_flag(field, *self, rule)
    }
}
