//! Immutable snapshot of route input.

use super::Point;
use crate::error::{Result, RouteError};

/// Largest point count for which the full distance matrix is cached.
///
/// Above this, distances are computed on demand (the matrix would need
/// `n * n * 8` bytes).
const MATRIX_LIMIT: usize = 1024;

/// An ordered, non-empty, immutable set of points.
///
/// Index `i` always refers to the `i`-th input point. Index 0 is the fixed
/// start of every route computed over the set.
///
/// # Examples
///
/// ```
/// use u_routefinder::PointSet;
///
/// let set = PointSet::new(vec![(0.0, 0.0), (3.0, 4.0)]).unwrap();
/// assert_eq!(set.len(), 2);
/// assert!((set.dist(0, 1) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct PointSet {
    points: Vec<Point>,
    /// Row-major `n * n` distances, present when `n <= MATRIX_LIMIT`.
    matrix: Option<Vec<f64>>,
}

impl PointSet {
    /// Builds a point set.
    ///
    /// # Errors
    ///
    /// [`RouteError::EmptyInput`] when no points are given,
    /// [`RouteError::NonFinitePoint`] when a coordinate is NaN or infinite.
    pub fn new<I, P>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let points: Vec<Point> = points.into_iter().map(Into::into).collect();
        if points.is_empty() {
            return Err(RouteError::EmptyInput);
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(RouteError::NonFinitePoint { index });
        }

        let n = points.len();
        let matrix = (n <= MATRIX_LIMIT).then(|| {
            let mut m = vec![0.0; n * n];
            for i in 0..n {
                for j in (i + 1)..n {
                    let d = points[i].distance(&points[j]);
                    m[i * n + j] = d;
                    m[j * n + i] = d;
                }
            }
            m
        });

        Ok(Self { points, matrix })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a point set holds at least one point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point at input position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn point(&self, index: usize) -> Point {
        self.points[index]
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Euclidean distance between the points at indices `i` and `j`.
    #[inline]
    pub fn dist(&self, i: usize, j: usize) -> f64 {
        match &self.matrix {
            Some(m) => m[i * self.points.len() + j],
            None => self.points[i].distance(&self.points[j]),
        }
    }

    /// Length of the open path visiting `order` in sequence.
    ///
    /// No closing edge back to the first point is added.
    pub fn path_length(&self, order: &[usize]) -> f64 {
        order.windows(2).map(|w| self.dist(w[0], w[1])).sum()
    }

    /// The points rearranged into `order`.
    pub fn reorder(&self, order: &[usize]) -> Vec<Point> {
        order.iter().map(|&i| self.points[i]).collect()
    }
}

/// Returns true when `order` is a permutation of `0..n` starting at 0.
pub fn is_valid_route(order: &[usize], n: usize) -> bool {
    if order.len() != n || order.first() != Some(&0) {
        return false;
    }
    let mut seen = vec![false; n];
    for &i in order {
        if i >= n || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}
