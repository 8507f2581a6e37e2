use std::fmt::Write as _;

use crate::dendrogram::{ClusterRef, Merge};
use crate::points::PointSet;

fn labelled_ref(r: ClusterRef) -> String {
    match r {
        ClusterRef::Point(i) => format!("P{}", i),
        ClusterRef::Cluster(k) => format!("C{}", k),
    }
}

fn mathematica_ref(r: ClusterRef) -> String {
    match r {
        ClusterRef::Point(i) => i.to_string(),
        ClusterRef::Cluster(k) => format!("c{}", k),
    }
}

/// Render `points` and `merges` into the generic labelled textual form:
///
/// ```text
/// P0: "L0" x0 y0
/// P1: "L1" x1 y1
/// C0: "Lab" leftId rightId height
/// ```
///
/// This is a pure function of its inputs: it performs no clustering logic
/// of its own, and running it twice on the same arguments produces
/// byte-identical output.
pub fn emit_labelled(points: &PointSet, point_labels: &[String], merges: &[Merge]) -> String {
    let mut out = String::new();
    for (i, point) in points.as_slice().iter().enumerate() {
        let coords = point
            .coords()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "P{}: \"{}\" {}", i, point_labels[i], coords);
    }
    for (k, merge) in merges.iter().enumerate() {
        let _ = writeln!(
            out,
            "C{}: \"{}\" {} {} {}",
            k,
            merge.label,
            labelled_ref(merge.left),
            labelled_ref(merge.right),
            merge.height,
        );
    }
    out
}

/// Render `merges` into the Mathematica `Cluster[...]` textual form:
///
/// ```text
/// c0 = Cluster[0, 1, 1, 1, 1]
/// c1 = Cluster[c0, 2, 2, 2, 1]
/// DendrogramPlot[c1, LeafLabels ->(#&)]
/// ```
///
/// Returns an empty string for a single-point input (zero merges), since
/// there is no cluster to plot.
pub fn emit_mathematica(merges: &[Merge]) -> String {
    if merges.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for (k, merge) in merges.iter().enumerate() {
        let _ = writeln!(
            out,
            "c{} = Cluster[{}, {}, {}, {}, {}]",
            k,
            mathematica_ref(merge.left),
            mathematica_ref(merge.right),
            merge.height,
            merge.left_size,
            merge.right_size,
        );
    }
    let _ = writeln!(out, "DendrogramPlot[c{}, LeafLabels ->(#&)]", merges.len() - 1);
    out
}
