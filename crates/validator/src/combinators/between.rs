//! BETWEEN combinator - exclusive numeric range
//!
//! `Between(lower, upper)` has no check of its own. It runs two synthetic
//! rules, `Greater(lower)` and `Lower(upper)`, against the same value and
//! reports the outer rule if either fails. The synthetic rules are never
//! returned to the caller, so the failure message is always the range one
//! (or the `Between` rule's custom message).

use crate::foundation::{Rule, RuleKind};
use crate::validators;

/// Evaluates the bounds of `rule` and translates any failure into `rule`.
///
/// The outer rule's gate has already been checked by the caller; the
/// synthetic bound rules carry no gate.
pub(crate) fn evaluate(
    field: &str,
    value: &str,
    rule: &Rule,
    lower: &str,
    upper: &str,
) -> Option<Rule> {
    let bounds = [
        Rule::new(RuleKind::Greater {
            threshold: lower.to_owned(),
        }),
        Rule::new(RuleKind::Lower {
            threshold: upper.to_owned(),
        }),
    ];

    let failed: Vec<&'static str> = bounds
        .iter()
        .filter_map(|bound| validators::check_text(field, value, bound))
        .map(|failure| failure.code())
        .collect();

    if failed.is_empty() {
        None
    } else {
        tracing::trace!(field, ?failed, "between bound failed");
        Some(rule.clone())
    }
}
