//! Rounded Euclidean distances between points.
//!
//! Every pipeline stage reads distances through the [`Metric`] trait. The
//! [`DistanceMatrix`] evaluates each pair once up front; [`PointMetric`]
//! recomputes on demand and trades time for `O(n)` memory. Both use
//! [`euclidean_distance`], so the two are interchangeable without changing
//! any result.

use crate::point::Point;

/// Integer edge weight and tour cost unit.
pub type Weight = u64;

/// Source of pairwise distances over vertices `0..vertex_count()`.
///
/// Implementations must be symmetric with a zero diagonal.
pub trait Metric {
    /// Returns the number of vertices the metric covers.
    fn vertex_count(&self) -> usize;

    /// Returns the distance between two vertices.
    ///
    /// # Panics
    /// Implementations may panic when either index is `>= vertex_count()`.
    fn distance(&self, left: usize, right: usize) -> Weight;
}

/// Returns the Euclidean distance between two points rounded to the nearest
/// integer.
///
/// The squared length is computed exactly in 128-bit arithmetic and rounded
/// with an integer square root. The square root of an integer is never
/// exactly halfway between two integers, so round-half-even and
/// round-half-up give the same answer here.
///
/// # Examples
/// ```
/// use waypath_core::{Point, euclidean_distance};
///
/// assert_eq!(euclidean_distance(Point::new(0, 0), Point::new(3, 4)), 5);
/// assert_eq!(euclidean_distance(Point::new(0, 0), Point::new(2, 3)), 4);
/// ```
#[must_use]
pub fn euclidean_distance(left: Point, right: Point) -> Weight {
    let dx = u128::from(left.x().abs_diff(right.x()));
    let dy = u128::from(left.y().abs_diff(right.y()));
    let squared = dx * dx + dy * dy;
    let root = squared.isqrt();
    // sqrt(s) >= r + 0.5 exactly when s > r * (r + 1) for integer s.
    let rounded = if squared - root * root > root {
        root + 1
    } else {
        root
    };
    Weight::try_from(rounded).unwrap_or(Weight::MAX)
}

/// Precomputed symmetric distance matrix.
///
/// # Examples
/// ```
/// use waypath_core::{DistanceMatrix, Metric, Point};
///
/// let matrix = DistanceMatrix::from_points(&[Point::new(0, 0), Point::new(6, 8)]);
/// assert_eq!(matrix.vertex_count(), 2);
/// assert_eq!(matrix.distance(0, 1), 10);
/// assert_eq!(matrix.distance(1, 1), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix {
    vertex_count: usize,
    values: Vec<Weight>,
}

impl DistanceMatrix {
    /// Evaluates every pair of `points` once.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        let vertex_count = points.len();
        let mut values = vec![0; vertex_count * vertex_count];
        for (row, &left) in points.iter().enumerate() {
            for (column, &right) in points.iter().enumerate().skip(row + 1) {
                let distance = euclidean_distance(left, right);
                values[row * vertex_count + column] = distance;
                values[column * vertex_count + row] = distance;
            }
        }
        Self {
            vertex_count,
            values,
        }
    }

    /// Returns the distance between two vertices, or `None` when either is
    /// out of range.
    #[must_use]
    pub fn get(&self, left: usize, right: usize) -> Option<Weight> {
        if left >= self.vertex_count || right >= self.vertex_count {
            return None;
        }
        self.values.get(left * self.vertex_count + right).copied()
    }
}

impl Metric for DistanceMatrix {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn distance(&self, left: usize, right: usize) -> Weight {
        assert!(
            left < self.vertex_count && right < self.vertex_count,
            "vertex pair ({left}, {right}) out of range for {} vertices",
            self.vertex_count
        );
        self.values[left * self.vertex_count + right]
    }
}

/// Metric that evaluates [`euclidean_distance`] on every call.
#[derive(Clone, Copy, Debug)]
pub struct PointMetric<'a> {
    points: &'a [Point],
}

impl<'a> PointMetric<'a> {
    /// Wraps a point slice.
    #[must_use]
    pub const fn new(points: &'a [Point]) -> Self {
        Self { points }
    }
}

impl Metric for PointMetric<'_> {
    fn vertex_count(&self) -> usize {
        self.points.len()
    }

    fn distance(&self, left: usize, right: usize) -> Weight {
        euclidean_distance(self.points[left], self.points[right])
    }
}
