//! Rule kinds and their default message templates
//!
//! Each [`RuleKind`] knows how to describe itself in a failure message:
//! `"{field} should {predicate}"`. The predicate can be replaced at format
//! time, which is the hook for localized or domain-specific wording.

use std::borrow::Cow;
use std::fmt;

/// The check a [`Rule`](crate::foundation::Rule) performs.
///
/// Thresholds are kept as the caller wrote them and are parsed as `f64`
/// only when a value is evaluated, so the message always echoes the
/// original text (`"5499.98"`, not `"5499.98000001"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum RuleKind {
    /// Boolean value must be `true`.
    IsTrue,
    /// Text value must not be empty.
    NonEmpty,
    /// Text value must parse as a number.
    IsNumeric,
    /// Text value must contain `needle`, ignoring case.
    Contains { needle: String },
    /// Numeric value must be strictly greater than `threshold`.
    Greater { threshold: String },
    /// Numeric value must be strictly lower than `threshold`.
    Lower { threshold: String },
    /// Numeric value must lie strictly between `lower` and `upper`.
    Between { lower: String, upper: String },
}

impl RuleKind {
    /// Stable identifier for programmatic handling and predicate overrides.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::IsTrue => "is_true",
            Self::NonEmpty => "non_empty",
            Self::IsNumeric => "is_numeric",
            Self::Contains { .. } => "contains",
            Self::Greater { .. } => "greater",
            Self::Lower { .. } => "lower",
            Self::Between { .. } => "between",
        }
    }

    /// Default predicate text, the part after `"{field} should "`.
    pub fn predicate(&self) -> Cow<'static, str> {
        match self {
            Self::IsTrue => Cow::Borrowed("be true"),
            Self::NonEmpty => Cow::Borrowed("not be empty"),
            Self::IsNumeric => Cow::Borrowed("be a number"),
            Self::Contains { needle } => Cow::Owned(format!("contain `{needle}`")),
            Self::Greater { threshold } => Cow::Owned(format!("be greater than {threshold}")),
            Self::Lower { threshold } => Cow::Owned(format!("be lower than {threshold}")),
            Self::Between { lower, upper } => {
                Cow::Owned(format!("be between {lower} and {upper}"))
            }
        }
    }

    /// Renders `"{field} should {predicate}"`.
    ///
    /// `should` replaces the default predicate when given.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck_validator::foundation::RuleKind;
    ///
    /// let kind = RuleKind::IsNumeric;
    /// assert_eq!(kind.error_message_for("Gear Number", None), "Gear Number should be a number");
    /// assert_eq!(
    ///     kind.error_message_for("Gear Number", Some("be a positive number")),
    ///     "Gear Number should be a positive number",
    /// );
    /// ```
    pub fn error_message_for(&self, field: &str, should: Option<&str>) -> String {
        match should {
            Some(predicate) => format!("{field} should {predicate}"),
            None => format!("{field} should {}", self.predicate()),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
