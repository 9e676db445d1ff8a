//! Core validation types
//!
//! - **Rule model**: [`Rule`], [`RuleKind`]
//! - **Values**: [`FieldValue`] for `str`, `String` and `bool`
//! - **Errors**: [`FieldError`] for `Result`-style callers
//!
//! A failed check is reported as the [`Rule`] itself. There is no separate
//! failure type: a rule carries its kind, parameters and custom message,
//! which is everything needed to explain the failure.

pub mod error;
pub mod kind;
pub mod rule;
pub mod value;

pub use error::FieldError;
pub use kind::RuleKind;
pub use rule::{Rule, between, contains, greater, is_numeric, is_true, lower, non_empty};
pub use value::FieldValue;
