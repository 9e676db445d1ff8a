//! Ready-made completion hooks
//!
//! Plain functions matching the `on_complete` parameters of
//! [`Validator`](crate::engine::Validator), reporting outcomes through
//! `tracing`. Install a subscriber to see them.
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let failures = Validator::new().validate_all_with(
//!     "Greeting",
//!     "",
//!     &[non_empty()],
//!     hooks::log_failures,
//! );
//! assert_eq!(failures.len(), 1);
//! ```

use crate::foundation::Rule;

/// Batch hook: one `warn!` per failure, or a `debug!` if the field passed.
pub fn log_failures(failures: &[Rule], field: &str) {
    if failures.is_empty() {
        tracing::debug!(field, "field passed validation");
        return;
    }
    for failure in failures {
        tracing::warn!(
            field,
            code = failure.code(),
            message = %failure.error_message_for(field, None),
            "field failed validation"
        );
    }
}

/// Single-rule hook.
pub fn log_failure(failure: Option<&Rule>, field: &str) {
    match failure {
        Some(failure) => log_failures(std::slice::from_ref(failure), field),
        None => log_failures(&[], field),
    }
}
