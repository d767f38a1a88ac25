//! Weighted undirected edges.

use std::cmp::Ordering;

use crate::distance::Weight;

/// An undirected edge in canonical form (`source <= target`).
///
/// Edges order by `(weight, source, target)`, which is the order Kruskal
/// processes candidates in.
///
/// # Examples
/// ```
/// use waypath_core::Edge;
///
/// let edge = Edge::new(4, 1, 7);
/// assert_eq!((edge.source(), edge.target(), edge.weight()), (1, 4, 7));
/// assert!(edge.joins(4, 1));
/// assert!(Edge::new(0, 9, 3) < edge);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: Weight,
}

impl Edge {
    /// Creates an edge, swapping the endpoints into canonical order.
    #[must_use]
    pub const fn new(left: usize, right: usize, weight: Weight) -> Self {
        let (source, target) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns `true` when the edge connects `left` and `right` in either
    /// direction.
    #[must_use]
    pub const fn joins(&self, left: usize, right: usize) -> bool {
        (self.source == left && self.target == right)
            || (self.source == right && self.target == left)
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
