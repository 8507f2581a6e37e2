use crate::points::PointSet;

/// A pairwise dissimilarity over a [`PointSet`].
///
/// Implementations must be deterministic, symmetric
/// (`distance(p, i, j) == distance(p, j, i)`), reflexive
/// (`distance(p, i, i) == 0.0`), and satisfy the triangle inequality. A
/// `Metric` must never return NaN for valid point indices; doing so is
/// treated by [`SlinkCore`](crate::SlinkCore) as a fatal input-domain
/// error.
pub trait Metric {
    /// Compute the dissimilarity between points `i` and `j`.
    fn distance(&self, points: &PointSet, i: usize, j: usize) -> f64;
}

/// The reference metric: ordinary Euclidean distance over however many
/// coordinates each point carries.
///
/// `Euclidean` does not itself validate dimensionality agreement between
/// points; mismatched dimensionality will simply treat missing trailing
/// coordinates as contributing no distance, the same way zipping two
/// slices of unequal length silently stops at the shorter one. Callers
/// working with heterogeneous-dimension data should validate beforehand.
#[derive(Clone, Copy, Debug, Default)]
pub struct Euclidean;

impl Metric for Euclidean {
    fn distance(&self, points: &PointSet, i: usize, j: usize) -> f64 {
        points[i]
            .coords()
            .iter()
            .zip(points[j].coords())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::Point;

    #[test]
    fn euclidean_symmetric_and_reflexive() {
        let points = PointSet::new(vec![
            Point::from((1.0, 1.0)),
            Point::from((1.5, 1.5)),
        ]);
        let m = Euclidean;
        assert_eq!(m.distance(&points, 0, 0), 0.0);
        assert_eq!(m.distance(&points, 0, 1), m.distance(&points, 1, 0));
        assert!((m.distance(&points, 0, 1) - 0.5f64.sqrt()).abs() < 1e-12);
    }
}
