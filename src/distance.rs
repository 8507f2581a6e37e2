use crate::metric::Metric;
use crate::points::PointSet;

/// Fill `out[0..n]` with the dissimilarity between each of points `0..n` and
/// the pivot `n`, using `metric`.
///
/// `out` is caller-allocated scratch, reused across SLINK iterations; only
/// `out[0..n]` is written, and the contents of `out[n..]` are left
/// untouched. This function never allocates.
///
/// # Panics
///
/// Panics if `out.len() < n` or `n >= points.len()`.
pub fn fill_row(points: &PointSet, metric: &impl Metric, n: usize, out: &mut [f64]) {
    assert!(n < points.len());
    assert!(out.len() >= n);
    for i in 0..n {
        out[i] = metric.distance(points, i, n);
    }
}

/// Like [`fill_row`], but computes the row with a data-parallel reduction
/// over `i` using `rayon`.
///
/// Filling a distance row is embarrassingly parallel: each `out[i]` depends
/// only on `points[i]` and `points[n]`, not on any other entry of `out`. The
/// forward and second passes that follow are not safe to parallelise this
/// way, since each `i` may touch `M[π[i]]` for an arbitrary `π[i]`; only
/// this row-fill step is parallelised.
///
/// Requires the `parallel` feature. Produces output bitwise identical to
/// [`fill_row`] for the same metric and point order.
#[cfg(feature = "parallel")]
pub fn fill_row_parallel(points: &PointSet, metric: &(impl Metric + Sync), n: usize, out: &mut [f64]) {
    use rayon::prelude::*;

    assert!(n < points.len());
    assert!(out.len() >= n);
    out[0..n]
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, slot)| *slot = metric.distance(points, i, n));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::Euclidean;
    use crate::points::Point;

    #[test]
    fn fills_expected_prefix() {
        let points = PointSet::new(vec![
            Point::from((0.0, 0.0)),
            Point::from((1.0, 0.0)),
            Point::from((3.0, 0.0)),
        ]);
        let mut out = vec![0.0; 2];
        fill_row(&points, &Euclidean, 2, &mut out);
        assert_eq!(out, vec![3.0, 2.0]);
    }

    #[test]
    fn zero_pivot_fills_nothing() {
        let points = PointSet::new(vec![Point::from((0.0, 0.0))]);
        let mut out: Vec<f64> = vec![];
        fill_row(&points, &Euclidean, 0, &mut out);
        assert!(out.is_empty());
    }
}
