/// Identifies which of the two per-iteration passes of the SLINK recurrence
/// an [`Observer`] hook is being called for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pass {
    /// The forward pass (step 2): absorbing points into the new pivot or
    /// relaxing `M[π[i]]`.
    Forward,
    /// The second pass (step 3): re-pointing any `i` whose λ now dominates
    /// its current parent's λ.
    Second,
}

/// Lifecycle hooks called by [`SlinkCore`](crate::SlinkCore) as it extends
/// the pointer representation one point at a time.
///
/// This is a plain runtime registry rather than a compile-time-indexed
/// timer/logger template family: the loop calls a small, fixed set of hook
/// methods on whatever `Observer` the caller supplies.
///
/// All methods have no-op default bodies, so implementing only the hooks
/// you care about costs nothing, and the default [`NoopObserver`] used by
/// [`SlinkCore::cluster`](crate::SlinkCore::cluster) should compile away to
/// nothing in a release build.
pub trait Observer {
    /// Called before inserting point `n` (i.e. before step 1 of iteration `n`).
    fn on_begin_insert(&mut self, n: usize) {
        let _ = n;
    }

    /// Called after point `n` has been fully absorbed into (π, λ).
    fn on_end_insert(&mut self, n: usize) {
        let _ = n;
    }

    /// Called before running the given pass over `i = 0..n`.
    fn on_begin_pass(&mut self, pass: Pass) {
        let _ = pass;
    }

    /// Called after the given pass completes.
    fn on_end_pass(&mut self, pass: Pass) {
        let _ = pass;
    }
}

/// An [`Observer`] that does nothing. Used whenever a caller does not
/// supply their own observer.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}
