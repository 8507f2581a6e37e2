/// A specialized union-find used by [`DendrogramBuilder`](crate::DendrogramBuilder)
/// to resolve, for each merge, which *current* cluster each endpoint of a
/// `(i, π[i], λ[i])` triple actually belongs to.
///
/// It represents a fixed set of `N` observations and `N - 1` possible merge
/// clusters, for `2N - 1` total labels, and path-compresses on `find`. This
/// replaces a linear scan over a `representative -> (cluster, size)` map,
/// which misidentifies the containing cluster once a representative goes
/// stale across a chain of more than two merges: this union-find instead
/// gives an O(1) amortized "what cluster is this point currently in" lookup
/// that stays correct regardless of chain length.
#[derive(Clone, Debug)]
pub struct MergeUnionFind {
    /// A map from cluster label to its cluster's parent. A label mapped to
    /// itself is a root.
    parents: Vec<usize>,
    /// The next cluster label to assign on the next union.
    next_parent: usize,
}

impl MergeUnionFind {
    /// Create a union-find over `len` observations, with `len - 1`
    /// additional labels reserved for the clusters merges will create.
    pub fn with_len(len: usize) -> MergeUnionFind {
        let size = if len == 0 { 0 } else { 2 * len - 1 };
        MergeUnionFind { parents: (0..size).collect(), next_parent: len }
    }

    /// Union the clusters represented by `a` and `b`, both of which must
    /// already be roots (the result of a prior call to [`find`](Self::find)).
    ///
    /// Returns the new label assigned to the merged cluster.
    ///
    /// # Panics
    ///
    /// Panics if `a == b`: the caller is responsible for detecting that a
    /// triple's two endpoints already share a root, which indicates a
    /// malformed pointer representation, not a valid union.
    pub fn union(&mut self, a: usize, b: usize) -> usize {
        assert_ne!(a, b, "cannot union a cluster with itself");
        assert!(self.next_parent < self.parents.len());
        let label = self.next_parent;
        self.parents[a] = label;
        self.parents[b] = label;
        self.next_parent += 1;
        label
    }

    /// Return the root cluster label containing the given label.
    pub fn find(&mut self, mut cluster: usize) -> usize {
        let mut root = cluster;
        while let Some(p) = self.parent_of(root) {
            root = p;
        }
        while let Some(p) = self.parent_of(cluster) {
            self.parents[cluster] = root;
            cluster = p;
        }
        root
    }

    fn parent_of(&self, cluster: usize) -> Option<usize> {
        let p = self.parents[cluster];
        if p == cluster {
            None
        } else {
            Some(p)
        }
    }
}
