use crate::error::{Error, Result};
use crate::union::MergeUnionFind;

/// A reference to a cluster as it appears on one side of a [`Merge`]: either
/// an original point, or a cluster created by an earlier merge (identified
/// by its merge index `k`, i.e. the `k` in the displayed label `Ck`/`ck`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClusterRef {
    /// An original point, by its index in the input [`PointSet`](crate::PointSet).
    Point(usize),
    /// A cluster created by merge `k` (0-indexed).
    Cluster(usize),
}

/// One binary merge in the reconstructed dendrogram.
///
/// `left` always corresponds to the originating `(i, π[i], λ[i])` triple's
/// `i` endpoint and `right` to its `π[i]` endpoint; the two sides are not
/// reordered by numeric value or cluster size.
#[derive(Clone, Debug, PartialEq)]
pub struct Merge {
    /// The cluster on the `i` side of the originating `(i, π[i], λ[i])` triple.
    pub left: ClusterRef,
    /// The cluster on the `π[i]` side.
    pub right: ClusterRef,
    /// The dissimilarity at which `left` and `right` merged.
    pub height: f64,
    /// Number of original points in `left`.
    pub left_size: usize,
    /// Number of original points in `right`.
    pub right_size: usize,
    /// The concatenation of `left`'s and `right`'s display labels.
    pub label: String,
}

#[derive(Clone)]
struct Node {
    id: ClusterRef,
    label: String,
    size: usize,
}

/// Converts a `(π, λ)` pointer representation into an ordered sequence of
/// binary merges.
///
/// This is the non-obvious half of the package: naively re-deriving "which
/// cluster currently contains point X" by scanning a representative map is
/// quadratic-or-worse and easy to get wrong for chains longer than two.
/// `DendrogramBuilder` instead threads a single [`MergeUnionFind`] through
/// the sorted triples, giving an O(1)-amortized answer that stays correct
/// for chains of any length.
pub struct DendrogramBuilder;

impl DendrogramBuilder {
    /// Build the ordered merge sequence for a completed `(π, λ)`, labelling
    /// each of the `n` input points with `point_labels[i]`.
    ///
    /// `point_labels.len()`, `pi.len()`, and `lambda.len()` must all agree;
    /// otherwise this returns [`Error::Internal`]. The unique root (where
    /// `pi[i] == i`) is skipped.
    pub fn build(point_labels: &[String], pi: &[usize], lambda: &[f64]) -> Result<Vec<Merge>> {
        let n = pi.len();
        if lambda.len() != n || point_labels.len() != n {
            return Err(Error::Internal(
                "point_labels, pi and lambda must have equal length".to_string(),
            ));
        }
        if n == 0 {
            return Err(Error::Internal("cannot build a dendrogram over zero points".to_string()));
        }

        // Step 1 + 2: build (i, π[i], λ[i]) triples, excluding the root,
        // then stable-sort by λ ascending. Triples are already in
        // ascending-i order because we push them that way, so a stable
        // sort on λ alone gives the required "ties broken by original
        // index" tie-break for free.
        let mut triples: Vec<(usize, usize, f64)> = Vec::with_capacity(n.saturating_sub(1));
        for i in 0..n {
            if pi[i] != i {
                triples.push((i, pi[i], lambda[i]));
            }
        }
        triples.sort_by(|a, b| {
            a.2.partial_cmp(&b.2)
                .unwrap_or_else(|| panic!("NaN height in pointer representation"))
        });
        if triples.len() != n - 1 {
            return Err(Error::Internal(format!(
                "expected exactly one root but found {} (n={})",
                n - triples.len(),
                n,
            )));
        }

        let mut uf = MergeUnionFind::with_len(n);
        let mut nodes: Vec<Node> = (0..n)
            .map(|i| Node { id: ClusterRef::Point(i), label: point_labels[i].clone(), size: 1 })
            .collect();
        nodes.resize(2 * n - 1, Node { id: ClusterRef::Point(0), label: String::new(), size: 0 });

        let mut merges = Vec::with_capacity(n - 1);
        for (k, &(i, p, height)) in triples.iter().enumerate() {
            let ri = uf.find(i);
            let rp = uf.find(p);
            if ri == rp {
                return Err(Error::Internal(format!(
                    "triple ({}, {}, {}) endpoints already share a cluster \
                     (malformed pointer representation)",
                    i, p, height
                )));
            }
            let left = nodes[ri].clone();
            let right = nodes[rp].clone();
            let label = format!("{}{}", left.label, right.label);
            merges.push(Merge {
                left: left.id,
                right: right.id,
                height,
                left_size: left.size,
                right_size: right.size,
                label: label.clone(),
            });

            let new_root = uf.union(ri, rp);
            nodes[new_root] =
                Node { id: ClusterRef::Cluster(k), label, size: left.size + right.size };
        }

        Ok(merges)
    }
}

/// Assign each of `n` points a short display label in input order, starting
/// from `start` and incrementing its character code thereafter.
///
/// The starting character is a parameter rather than a hardcoded constant,
/// since different consumers display labels starting at `'1'` or at `'A'`.
/// This does not special-case overflow past `'9'`/`'Z'` — a caller
/// clustering more points than fit in one character class should pass a
/// scheme of their own devising.
pub fn singleton_labels(n: usize, start: char) -> Vec<String> {
    let mut labels = Vec::with_capacity(n);
    let mut c = start as u32;
    for _ in 0..n {
        let ch = char::from_u32(c).unwrap_or(start);
        labels.push(ch.to_string());
        c += 1;
    }
    labels
}
