//! Structural self-checks for graph representations.

use crate::graph_error::GraphError;

/// Whole-structure consistency check.
///
/// `validate_invariants` walks every record, so it costs `O(V + E)`; it is
/// meant for tests and for one-off checks after bulk loads.
pub trait DebugInvariants {
    /// Panic on a broken invariant in debug builds or with the
    /// `check-invariants` feature; no-op otherwise.
    fn debug_assert_invariants(&self);
    /// Return the first broken invariant found.
    fn validate_invariants(&self) -> Result<(), GraphError>;
}

/// Run a fallible invariant check and panic with the given context on error.
/// Compiled out unless debug assertions or `check-invariants` are enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
