//! The rule value
//!
//! A [`Rule`] bundles a [`RuleKind`] with an optional custom message and an
//! optional [`Gate`]. It is also the failure type: when a value fails a rule,
//! the evaluator hands the rule back, and the rule alone is enough to render
//! the message.

use crate::combinators::gate::{self, Gate};
use crate::foundation::RuleKind;

/// One validation check.
///
/// Rules are immutable. `with_message` and `on` consume the rule and return
/// a new one, so a rule list can be built once and reused for every call.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// let rule = Rule::new(RuleKind::NonEmpty).with_message("Couple greeting words here?");
/// let failure = validate("Greeting", "", &rule).unwrap();
/// assert_eq!(failure.error_message_for("Greeting", None), "Couple greeting words here?");
/// ```
#[derive(Debug, Clone)]
pub struct Rule {
    kind: RuleKind,
    message: Option<String>,
    gate: Option<Gate>,
}

impl Rule {
    /// Creates a rule with the kind's default message and no gate.
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            message: None,
            gate: None,
        }
    }

    /// Replaces the default message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Only evaluates the rule while `gate` returns `true`.
    #[must_use = "builder methods must be chained or built"]
    pub fn on(mut self, gate: impl Into<Gate>) -> Self {
        self.gate = Some(gate.into());
        self
    }

    /// Returns the kind of check.
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Returns the custom message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the gate, if any.
    pub fn gate(&self) -> Option<&Gate> {
        self.gate.as_ref()
    }

    /// Shorthand for `self.kind().code()`.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Asks the gate whether the rule should run now.
    pub(crate) fn is_enabled(&self) -> bool {
        gate::is_open(self.gate.as_ref())
    }

    /// Human-readable message for a failure of this rule on `field`.
    ///
    /// The custom message wins if set. Otherwise `should` replaces the
    /// kind's default predicate.
    pub fn error_message_for(&self, field: &str, should: Option<&str>) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => self.kind.error_message_for(field, should),
        }
    }
}

impl From<RuleKind> for Rule {
    fn from(kind: RuleKind) -> Self {
        Self::new(kind)
    }
}

// ============================================================================
// SHORTHAND CONSTRUCTORS
// ============================================================================

/// Boolean value must be `true`.
pub fn is_true() -> Rule {
    Rule::new(RuleKind::IsTrue)
}

/// Text value must not be empty.
pub fn non_empty() -> Rule {
    Rule::new(RuleKind::NonEmpty)
}

/// Text value must parse as a number.
pub fn is_numeric() -> Rule {
    Rule::new(RuleKind::IsNumeric)
}

/// Text value must contain `needle`, ignoring case.
pub fn contains(needle: impl Into<String>) -> Rule {
    Rule::new(RuleKind::Contains {
        needle: needle.into(),
    })
}

/// Numeric value must be strictly greater than `threshold`.
pub fn greater(threshold: impl Into<String>) -> Rule {
    Rule::new(RuleKind::Greater {
        threshold: threshold.into(),
    })
}

/// Numeric value must be strictly lower than `threshold`.
pub fn lower(threshold: impl Into<String>) -> Rule {
    Rule::new(RuleKind::Lower {
        threshold: threshold.into(),
    })
}

/// Numeric value must lie strictly between `lower` and `upper`.
pub fn between(lower: impl Into<String>, upper: impl Into<String>) -> Rule {
    Rule::new(RuleKind::Between {
        lower: lower.into(),
        upper: upper.into(),
    })
}
