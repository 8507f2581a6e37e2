use crate::distance::fill_row;
#[cfg(feature = "parallel")]
use crate::distance::fill_row_parallel;
use crate::error::{Error, Result};
use crate::metric::Metric;
use crate::observer::{NoopObserver, Observer, Pass};
use crate::points::PointSet;

/// Mutable scratch space for the SLINK recurrence: the pointer
/// representation `(π, λ)` being built, plus the `M` working-distance
/// buffer.
///
/// `PiLambda` can be reused across calls to
/// [`SlinkCore::cluster_with`](crate::SlinkCore::cluster_with) to amortize
/// allocation.
#[derive(Debug, Default)]
pub struct PiLambda {
    pi: Vec<usize>,
    lambda: Vec<f64>,
    m: Vec<f64>,
}

impl PiLambda {
    /// Create empty scratch space. No allocation happens until the first
    /// call to `cluster_with`.
    pub fn new() -> PiLambda {
        PiLambda { pi: vec![], lambda: vec![], m: vec![] }
    }

    /// π: for each point `i`, the index of the next point it merges with.
    ///
    /// `π[i] > i` for every `i` except the root, where `π[i] == i`.
    pub fn pi(&self) -> &[usize] {
        &self.pi
    }

    /// λ: for each point `i`, the dissimilarity at which `i` is absorbed
    /// into `π[i]`. `λ[root] == +∞`.
    pub fn lambda(&self) -> &[f64] {
        &self.lambda
    }

    /// The number of points this pointer representation currently covers.
    pub fn len(&self) -> usize {
        self.pi.len()
    }

    /// Returns true if and only if this scratch space holds no points.
    pub fn is_empty(&self) -> bool {
        self.pi.is_empty()
    }

    fn reset(&mut self, n: usize) {
        self.pi.clear();
        self.pi.resize(n, 0);
        self.lambda.clear();
        self.lambda.resize(n, 0.0);
        self.m.clear();
        self.m.resize(n.saturating_sub(1), 0.0);
    }
}

/// The SLINK recurrence: incrementally extends a `(π, λ)` pointer
/// representation one point at a time, in `O(n)` work per insertion and
/// `O(N)` auxiliary space overall.
pub struct SlinkCore;

impl SlinkCore {
    /// Cluster `points` under `metric`, returning a fresh pointer
    /// representation.
    ///
    /// Fails with [`Error::InvalidInput`] if `points` is empty or any
    /// pairwise distance is NaN or negative.
    ///
    /// `metric` must be `Sync` even when the `parallel` feature is
    /// disabled, so that a single `Metric` bound covers both the
    /// sequential and the `fill_row_parallel`-backed build of this crate —
    /// every metric this crate ships, `Euclidean` included, is a trivially
    /// `Sync` zero-sized type.
    pub fn cluster<M: Metric + Sync>(points: &PointSet, metric: &M) -> Result<PiLambda> {
        let mut state = PiLambda::new();
        Self::cluster_with(&mut state, points, metric)?;
        Ok(state)
    }

    /// Like [`cluster`](SlinkCore::cluster), but reuses `state`'s
    /// allocation instead of returning a fresh one.
    pub fn cluster_with<M: Metric + Sync>(
        state: &mut PiLambda,
        points: &PointSet,
        metric: &M,
    ) -> Result<()> {
        Self::cluster_with_observer(state, points, metric, &mut NoopObserver)
    }

    /// Like [`cluster_with`](SlinkCore::cluster_with), but reports
    /// progress through `observer` as the recurrence runs.
    pub fn cluster_with_observer<M: Metric + Sync>(
        state: &mut PiLambda,
        points: &PointSet,
        metric: &M,
        observer: &mut impl Observer,
    ) -> Result<()> {
        let n_total = points.len();
        if n_total == 0 {
            return Err(Error::InvalidInput("point set must not be empty".to_string()));
        }
        state.reset(n_total);

        state.pi[0] = 0;
        state.lambda[0] = f64::INFINITY;

        for n in 1..n_total {
            observer.on_begin_insert(n);

            state.pi[n] = n;
            state.lambda[n] = f64::INFINITY;

            // Step 1: M[0..n) <- d(i, n). Validation is a separate pass
            // below because fill_row/fill_row_parallel are pure distance
            // computations with no error path of their own.
            #[cfg(feature = "parallel")]
            fill_row_parallel(points, metric, n, &mut state.m[..n]);
            #[cfg(not(feature = "parallel"))]
            fill_row(points, metric, n, &mut state.m[..n]);

            for (i, &d) in state.m[..n].iter().enumerate() {
                if d.is_nan() || d < 0.0 {
                    return Err(Error::InvalidInput(format!(
                        "distance between point {} and point {} is {} \
                         (must be finite and non-negative)",
                        i, n, d
                    )));
                }
            }

            // Step 2: forward pass. The M[π[i]] relaxation must happen
            // before λ[i] or π[i] is mutated below — reordering these
            // breaks the recurrence.
            observer.on_begin_pass(Pass::Forward);
            for i in 0..n {
                let pi_i = state.pi[i];
                if state.lambda[i] >= state.m[i] {
                    if state.lambda[i] < state.m[pi_i] {
                        state.m[pi_i] = state.lambda[i];
                    }
                    state.lambda[i] = state.m[i];
                    state.pi[i] = n;
                } else if state.m[i] < state.m[pi_i] {
                    state.m[pi_i] = state.m[i];
                }
            }
            observer.on_end_pass(Pass::Forward);

            // Step 3: second pass, re-pointing any i dominated by its
            // current parent.
            observer.on_begin_pass(Pass::Second);
            for i in 0..n {
                if state.lambda[i] >= state.lambda[state.pi[i]] {
                    state.pi[i] = n;
                }
            }
            observer.on_end_pass(Pass::Second);

            observer.on_end_insert(n);
        }

        Ok(())
    }
}
