/*!
This crate computes a single-linkage hierarchical clustering of a set of
points using Sibson's SLINK algorithm: given `N` points in a metric space, it
produces a dendrogram in `O(N^2)` time and `O(N)` auxiliary space, encoded
as a *pointer representation* `(π, λ)`. For each point `i`, `π[i]` is the
index of the next point `i` merges with, and `λ[i]` is the dissimilarity at
which that merge happens.

# Overview

* [`SlinkCore`] runs the recurrence itself: [`SlinkCore::cluster`] takes a
  [`PointSet`] and a [`Metric`] and returns a [`PiLambda`].
* [`DendrogramBuilder`] turns a completed `(π, λ)` into an ordered sequence
  of binary [`Merge`]s, which is the non-obvious half of the package —
  naive reconstruction by scanning for "which cluster contains point X" is
  easy to get wrong once a chain of merges runs longer than two.
* [`emit_labelled`] and [`emit_mathematica`] render a merge sequence into
  the two textual forms this crate supports.

# Example

```
use slink::{DendrogramBuilder, Euclidean, Point, PointSet, SlinkCore};
use slink::dendrogram::singleton_labels;
use slink::emit::emit_labelled;

let points = PointSet::new(vec![
    Point::from((0.0, 0.0)),
    Point::from((1.0, 0.0)),
    Point::from((3.0, 0.0)),
]);

let state = SlinkCore::cluster(&points, &Euclidean).unwrap();
assert_eq!(state.pi(), &[1, 2, 2]);

let labels = singleton_labels(points.len(), '1');
let merges = DendrogramBuilder::build(&labels, state.pi(), state.lambda()).unwrap();
assert_eq!(merges.len(), points.len() - 1);

let rendered = emit_labelled(&points, &labels, &merges);
assert!(rendered.contains("C1: \"123\" C0 P2 2"));
```

CSV ingestion of point coordinates, a CLI, and timing/progress reporting are
deliberately not part of this crate — they live in the `slink-cli` binary
crate alongside it, which consumes exactly the public API shown above.
*/

#![deny(missing_docs)]

pub mod dendrogram;
pub mod distance;
pub mod emit;
mod error;
pub mod metric;
mod observer;
pub mod points;
mod slink;
mod union;

#[cfg(test)]
mod proptest;

pub use crate::dendrogram::{ClusterRef, DendrogramBuilder, Merge};
pub use crate::distance::fill_row;
#[cfg(feature = "parallel")]
pub use crate::distance::fill_row_parallel;
pub use crate::emit::{emit_labelled, emit_mathematica};
pub use crate::error::{Error, Result};
pub use crate::metric::{Euclidean, Metric};
pub use crate::observer::{NoopObserver, Observer, Pass};
pub use crate::points::{Point, PointSet};
pub use crate::slink::{PiLambda, SlinkCore};
