//! # fieldcheck-validator
//!
//! Declarative field validation: describe the checks a value must pass as a
//! list of [`Rule`](foundation::Rule)s, evaluate them, and render the
//! failures as human-readable messages.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck_validator::prelude::*;
//!
//! let rules = [non_empty(), between("4", "6")];
//! let failures = validate_all("Gear Number", "0", &rules);
//!
//! assert_eq!(
//!     format_messages("Gear Number", &failures, "\n"),
//!     "Gear Number should be between 4 and 6"
//! );
//! assert!(validate_all("Gear Number", "5", &rules).is_empty());
//! ```
//!
//! ## Failures are rules
//!
//! A failed check is reported as the rule that failed, so a failure carries
//! its kind, parameters and custom message. The one exception is a
//! `Greater`/`Lower` rule whose value or threshold is not a number: it fails
//! as a plain `IsNumeric` rule.
//!
//! ## Built-in Rules
//!
//! - **Text**: [`non_empty`](foundation::non_empty),
//!   [`contains`](foundation::contains), [`is_numeric`](foundation::is_numeric)
//! - **Numeric**: [`greater`](foundation::greater), [`lower`](foundation::lower),
//!   [`between`](foundation::between)
//! - **Boolean**: [`is_true`](foundation::is_true)
//!
//! Any rule can be gated with [`Rule::on`](foundation::Rule::on) and given a
//! custom message with [`Rule::with_message`](foundation::Rule::with_message).

pub mod combinators;
pub mod engine;
pub mod formatter;
pub mod foundation;
pub mod hooks;
pub mod prelude;
pub mod validators;
