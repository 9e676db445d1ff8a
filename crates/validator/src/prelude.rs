//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck_validator::prelude::*;` import that
//! brings in the rule model, the validator, and the formatter.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck_validator::prelude::*;
//!
//! let failure = validate("Activate", &false, &is_true()).unwrap();
//! assert_eq!(failure.error_message_for("Activate", None), "Activate should be true");
//! ```

// ============================================================================
// FOUNDATION: Rule model, values, errors
// ============================================================================

pub use crate::foundation::{
    FieldError, FieldValue, Rule, RuleKind, between, contains, greater, is_numeric, is_true, lower,
    non_empty,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::Gate;

// ============================================================================
// ENGINE, FORMATTING, HOOKS
// ============================================================================

pub use crate::engine::{Validator, validate, validate_all};
pub use crate::formatter::{DEFAULT_SEPARATOR, MessageFormatter, format_messages};
pub use crate::hooks;
