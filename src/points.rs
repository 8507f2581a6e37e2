use std::ops::Index;

/// A single observation: a tuple of `K` real-valued coordinates.
///
/// The reference metric in this crate uses `K = 2`, but `Point` itself
/// places no bound on dimensionality — it is a thin wrapper around a
/// coordinate slice so that [`Metric`](crate::Metric) implementations can
/// work with whatever `K` the caller's data has.
#[derive(Clone, Debug, PartialEq)]
pub struct Point(Vec<f64>);

impl Point {
    /// Create a point from its coordinates.
    pub fn new<I: IntoIterator<Item = f64>>(coords: I) -> Point {
        Point(coords.into_iter().collect())
    }

    /// Return this point's coordinates.
    pub fn coords(&self) -> &[f64] {
        &self.0
    }

    /// Return the dimensionality of this point.
    pub fn dim(&self) -> usize {
        self.0.len()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Point {
        Point(vec![x, y])
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Point {
        Point(coords)
    }
}

/// An ordered, immutable sequence of [`Point`]s.
///
/// The order of points is significant: it is the SLINK insertion order, and
/// changing it changes the pointer representation produced by
/// [`SlinkCore`](crate::SlinkCore) (though not the induced ultrametric: the
/// multiset of merge heights is invariant under reordering the input).
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet(Vec<Point>);

impl PointSet {
    /// Build a point set from an ordered sequence of points.
    pub fn new<I: IntoIterator<Item = Point>>(points: I) -> PointSet {
        PointSet(points.into_iter().collect())
    }

    /// The number of points in this set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if and only if this point set has no points.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the underlying points as a slice.
    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }
}

impl Index<usize> for PointSet {
    type Output = Point;
    fn index(&self, i: usize) -> &Point {
        &self.0[i]
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> PointSet {
        PointSet::new(iter)
    }
}
