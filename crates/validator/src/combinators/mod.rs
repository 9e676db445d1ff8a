//! Rule combinators
//!
//! - [`gate`]: conditional evaluation through a zero-argument predicate
//! - `between`: exclusive range built from two threshold checks

pub(crate) mod between;
pub mod gate;

pub use gate::Gate;
