//! Built-in checks and the per-rule evaluator
//!
//! The evaluator asks the rule's gate first, then dispatches on
//! [`RuleKind`]. Each kind's logic lives in its own module:
//!
//! - **Text**: [`text`] (`NonEmpty`, `Contains`)
//! - **Numeric**: [`numeric`] (`IsNumeric`, `Greater`, `Lower`)
//! - **Boolean**: [`boolean`] (`IsTrue`)
//! - **Composite**: `combinators::between` (`Between`)

pub mod boolean;
pub mod numeric;
pub mod text;

use crate::combinators::between;
use crate::foundation::{Rule, RuleKind};
use numeric::Comparison;

/// Evaluates `rule` against a text value.
///
/// `IsTrue` has no meaning for text and always passes here.
pub(crate) fn evaluate_text(field: &str, value: &str, rule: &Rule) -> Option<Rule> {
    if !rule.is_enabled() {
        tracing::trace!(field, code = rule.code(), "rule skipped by gate");
        return None;
    }

    let failure = check_text(field, value, rule);
    tracing::trace!(
        field,
        code = rule.code(),
        passed = failure.is_none(),
        "rule evaluated"
    );
    failure
}

/// Kind-specific part of [`evaluate_text`], without the gate.
pub(crate) fn check_text(field: &str, value: &str, rule: &Rule) -> Option<Rule> {
    match rule.kind() {
        RuleKind::NonEmpty => fail_unless(text::is_non_empty(value), rule),
        RuleKind::Contains { needle } => {
            fail_unless(text::contains_ignore_case(value, needle), rule)
        }
        RuleKind::IsNumeric => fail_unless(numeric::is_numeric(value), rule),
        RuleKind::Greater { threshold } => {
            from_comparison(numeric::greater_than(value, threshold), rule)
        }
        RuleKind::Lower { threshold } => {
            from_comparison(numeric::lower_than(value, threshold), rule)
        }
        RuleKind::Between { lower, upper } => between::evaluate(field, value, rule, lower, upper),
        RuleKind::IsTrue => None,
    }
}

/// Evaluates `rule` against a boolean value.
///
/// The kind is not consulted: any enabled rule fails on `false`.
pub(crate) fn evaluate_flag(field: &str, value: bool, rule: &Rule) -> Option<Rule> {
    if !rule.is_enabled() {
        tracing::trace!(field, code = rule.code(), "rule skipped by gate");
        return None;
    }

    let failure = fail_unless(boolean::is_true(value), rule);
    tracing::trace!(
        field,
        code = rule.code(),
        passed = failure.is_none(),
        "rule evaluated"
    );
    failure
}

fn fail_unless(passed: bool, rule: &Rule) -> Option<Rule> {
    (!passed).then(|| rule.clone())
}

// A threshold check that could not parse reports a bare `IsNumeric` rule,
// dropping the original rule's message and parameters.
fn from_comparison(comparison: Comparison, rule: &Rule) -> Option<Rule> {
    match comparison {
        Comparison::Holds => None,
        Comparison::Violated => Some(rule.clone()),
        Comparison::NotNumeric => Some(Rule::new(RuleKind::IsNumeric)),
    }
}
