//! Property tests covering the invariants the SLINK recurrence and the
//! dendrogram reconstruction are expected to hold for arbitrary input.
//!
//! Generates random point sets via `quickcheck`/`rand`, the same pairing the
//! rest of this crate's test suite uses for randomized coverage. These
//! properties check the SLINK recurrence and the dendrogram reconstruction
//! against their own invariants, and against an independent naive
//! single-linkage reference for small inputs.

use quickcheck::{quickcheck, Arbitrary, Gen};
use rand::Rng;

use crate::dendrogram::{singleton_labels, DendrogramBuilder};
use crate::emit::emit_labelled;
use crate::metric::{Euclidean, Metric};
use crate::points::{Point, PointSet};
use crate::slink::SlinkCore;

#[derive(Clone, Debug)]
struct SmallPointSet(Vec<(f64, f64)>);

impl Arbitrary for SmallPointSet {
    fn arbitrary(_g: &mut Gen) -> SmallPointSet {
        let mut rng = rand::thread_rng();
        let n = rng.gen_range(1..30);
        let coords = (0..n)
            .map(|_| (rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
            .collect();
        SmallPointSet(coords)
    }
}

impl SmallPointSet {
    fn to_point_set(&self) -> PointSet {
        PointSet::new(self.0.iter().copied().map(Point::from))
    }
}

fn height_multiset(lambda: &[f64]) -> Vec<u64> {
    let mut v: Vec<u64> =
        lambda.iter().filter(|h| h.is_finite()).map(|h| h.to_bits()).collect();
    v.sort_unstable();
    v
}

quickcheck! {
    // The root is always the last index, with infinite lambda.
    fn prop_root_is_last_and_infinite(points: SmallPointSet) -> bool {
        let ps = points.to_point_set();
        let state = SlinkCore::cluster(&ps, &Euclidean).expect("valid coordinates");
        let root = state.len() - 1;
        state.pi()[root] == root && state.lambda()[root].is_infinite()
    }

    // pi[i] > i for every non-root i.
    fn prop_pi_exceeds_index_except_root(points: SmallPointSet) -> bool {
        let ps = points.to_point_set();
        let state = SlinkCore::cluster(&ps, &Euclidean).expect("valid coordinates");
        let root = state.len() - 1;
        (0..root).all(|i| state.pi()[i] > i)
    }

    // lambda is monotone non-decreasing along the pointer chain.
    fn prop_lambda_monotone_along_chain(points: SmallPointSet) -> bool {
        let ps = points.to_point_set();
        let state = SlinkCore::cluster(&ps, &Euclidean).expect("valid coordinates");
        (0..state.len()).all(|i| {
            let p = state.pi()[i];
            p == i || state.lambda()[i] <= state.lambda()[p]
        })
    }

    // The multiset of non-infinite lambda values equals the multiset
    // of merge heights DendrogramBuilder emits.
    fn prop_merge_heights_match_lambda_multiset(points: SmallPointSet) -> bool {
        let ps = points.to_point_set();
        let state = SlinkCore::cluster(&ps, &Euclidean).expect("valid coordinates");
        let labels = singleton_labels(state.len(), '1');
        let merges = DendrogramBuilder::build(&labels, state.pi(), state.lambda()).unwrap();
        let mut from_merges: Vec<u64> = merges.iter().map(|m| m.height.to_bits()).collect();
        from_merges.sort_unstable();
        from_merges == height_multiset(state.lambda())
    }

    // Running the builder and emitter twice on the same (pi, lambda)
    // yields byte-identical output.
    fn prop_emission_is_idempotent(points: SmallPointSet) -> bool {
        let ps = points.to_point_set();
        let state = SlinkCore::cluster(&ps, &Euclidean).expect("valid coordinates");
        let labels = singleton_labels(state.len(), '1');
        let merges1 = DendrogramBuilder::build(&labels, state.pi(), state.lambda()).unwrap();
        let merges2 = DendrogramBuilder::build(&labels, state.pi(), state.lambda()).unwrap();
        emit_labelled(&ps, &labels, &merges1) == emit_labelled(&ps, &labels, &merges2)
    }
}

// Reordering the input points yields the same multiset of merge
// heights.
#[test]
fn prop_permutation_invariant_height_multiset() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let n = rng.gen_range(2..15);
        let coords: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
            .collect();

        let original = PointSet::new(coords.iter().copied().map(Point::from));
        let state_original = SlinkCore::cluster(&original, &Euclidean).unwrap();

        let mut permuted = coords.clone();
        permuted.reverse();
        let reversed = PointSet::new(permuted.iter().copied().map(Point::from));
        let state_reversed = SlinkCore::cluster(&reversed, &Euclidean).unwrap();

        assert_eq!(
            height_multiset(state_original.lambda()),
            height_multiset(state_reversed.lambda()),
        );
    }
}

/// A textbook Kruskal-style single-linkage reference: sort every pairwise
/// distance and union clusters greedily, recording the height at which each
/// union happens. Used only as an independent cross-check, deliberately separate from
/// `SlinkCore`'s incremental approach.
fn naive_single_linkage_heights(points: &PointSet) -> Vec<f64> {
    let n = points.len();
    let mut edges = Vec::with_capacity(n * (n.saturating_sub(1)) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push((Euclidean.distance(points, i, j), i, j));
        }
    }
    edges.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

    let mut parent: Vec<usize> = (0..n).collect();
    fn find(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }

    let mut heights = Vec::with_capacity(n.saturating_sub(1));
    for (dist, i, j) in edges {
        let ri = find(&mut parent, i);
        let rj = find(&mut parent, j);
        if ri != rj {
            parent[ri] = rj;
            heights.push(dist);
        }
    }
    heights
}

// For small N, SLINK's induced ultrametric (as a height multiset)
// equals a naive Kruskal-style single-linkage reference.
#[test]
fn prop_equivalence_to_naive_single_linkage() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let n = rng.gen_range(1..50);
        let coords: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0)))
            .collect();
        let points = PointSet::new(coords.iter().copied().map(Point::from));

        let state = SlinkCore::cluster(&points, &Euclidean).unwrap();
        let slink_heights = height_multiset(state.lambda());

        let mut naive_heights: Vec<u64> =
            naive_single_linkage_heights(&points).into_iter().map(f64::to_bits).collect();
        naive_heights.sort_unstable();

        assert_eq!(slink_heights, naive_heights);
    }
}
