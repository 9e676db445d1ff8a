//! Conditional evaluation of rules
//!
//! A [`Gate`] is a zero-argument predicate attached to a
//! [`Rule`](crate::foundation::Rule). It is asked once per validation call,
//! right before the rule's own check. When it answers `false` the rule is
//! skipped and counts as passing; the value is never looked at.
//!
//! # Use Cases
//!
//! - Only check a numeric bound once the user typed something
//! - Enable a rule depending on another field the caller holds
//! - Feature-flag a rule without rebuilding the rule list
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let price = String::new();
//! let typed = !price.is_empty();
//! let rule = greater("5499.98").on(move || typed);
//!
//! assert!(validate("Min. Price", price.as_str(), &rule).is_none());
//! ```

use std::fmt;
use std::sync::Arc;

/// Shareable predicate deciding whether a rule is evaluated.
///
/// Cloning a `Gate` clones the handle, not the closure, so rules carrying
/// gates stay cheap to clone and can be shared across threads.
#[derive(Clone)]
pub struct Gate {
    condition: Arc<dyn Fn() -> bool + Send + Sync>,
}

impl Gate {
    /// Wraps a predicate.
    pub fn new<C>(condition: C) -> Self
    where
        C: Fn() -> bool + Send + Sync + 'static,
    {
        Self {
            condition: Arc::new(condition),
        }
    }

    /// Asks the predicate.
    #[inline]
    pub fn allows(&self) -> bool {
        (self.condition)()
    }
}

impl fmt::Debug for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gate").finish_non_exhaustive()
    }
}

impl<C> From<C> for Gate
where
    C: Fn() -> bool + Send + Sync + 'static,
{
    fn from(condition: C) -> Self {
        Self::new(condition)
    }
}

/// Returns `true` when there is no gate or the gate allows evaluation.
#[inline]
pub(crate) fn is_open(gate: Option<&Gate>) -> bool {
    gate.is_none_or(Gate::allows)
}
