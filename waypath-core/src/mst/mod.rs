//! Minimum spanning tree construction over the complete graph.
//!
//! Kruskal's algorithm: every one of the `n(n-1)/2` vertex pairs becomes a
//! candidate edge, candidates are sorted by `(weight, source, target)`, and
//! a disjoint-set forest rejects edges that would close a cycle. The scan
//! stops as soon as `n - 1` edges are accepted.

mod union_find;

use tracing::{debug, instrument};

use crate::{
    distance::{Metric, Weight},
    edge::Edge,
};

use self::union_find::DisjointSet;

/// Errors returned while computing a minimum spanning tree.
#[derive(Clone, Debug, Eq, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum MstError {
    /// The graph has fewer than two vertices.
    #[error("cannot compute an MST over {vertex_count} vertices; at least 2 are required")]
    InsufficientVertices {
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("MST invariant violated: {invariant} (accepted {accepted} of {expected} edges)")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// Number of edges accepted before the scan ended.
        accepted: usize,
        /// Number of edges a spanning tree needs.
        expected: usize,
    },
}

impl MstError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> MstErrorCode {
        match self {
            Self::InsufficientVertices { .. } => MstErrorCode::InsufficientVertices,
            Self::InvariantViolation { .. } => MstErrorCode::InvariantViolation,
        }
    }
}

/// Machine-readable error codes for [`MstError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MstErrorCode {
    /// The graph has fewer than two vertices.
    InsufficientVertices,
    /// An internal invariant was violated.
    InvariantViolation,
}

impl MstErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InsufficientVertices => "MST_INSUFFICIENT_VERTICES",
            Self::InvariantViolation => "MST_INVARIANT_VIOLATION",
        }
    }
}

/// A minimum spanning tree: `n - 1` edges in acceptance order plus their
/// total weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree {
    vertex_count: usize,
    edges: Vec<Edge>,
    weight: Weight,
}

impl SpanningTree {
    /// Returns the tree edges in the order Kruskal accepted them.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns the number of vertices the tree spans.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }
}

/// Computes a minimum spanning tree of the complete graph described by
/// `metric`.
///
/// Ties between equal-weight candidates resolve by `(source, target)`, so
/// the same metric always yields the same tree.
///
/// # Errors
/// Returns [`MstError::InsufficientVertices`] when the metric covers fewer
/// than two vertices.
///
/// # Examples
/// ```
/// use waypath_core::{DistanceMatrix, Point, build_spanning_tree};
///
/// let matrix = DistanceMatrix::from_points(&[
///     Point::new(0, 0),
///     Point::new(0, 2),
///     Point::new(5, 0),
/// ]);
/// let tree = build_spanning_tree(&matrix)?;
/// assert_eq!(tree.edges().len(), 2);
/// assert_eq!(tree.weight(), 7);
/// # Ok::<(), waypath_core::MstError>(())
/// ```
#[instrument(
    name = "core.mst",
    err,
    skip(metric),
    fields(vertices = metric.vertex_count()),
)]
pub fn build_spanning_tree<M: Metric + ?Sized>(metric: &M) -> Result<SpanningTree, MstError> {
    let vertex_count = metric.vertex_count();
    if vertex_count < 2 {
        return Err(MstError::InsufficientVertices { vertex_count });
    }

    let mut candidates = candidate_edges(metric);
    candidates.sort_unstable();

    let expected = vertex_count - 1;
    let mut forest = DisjointSet::new(vertex_count);
    let mut edges = Vec::with_capacity(expected);
    let mut weight: Weight = 0;

    for edge in candidates {
        if forest.union(edge.source(), edge.target()) {
            weight = weight.saturating_add(edge.weight());
            edges.push(edge);
            if edges.len() == expected {
                // Early stopping condition, the tree already has all its edges
                break;
            }
        }
    }

    if edges.len() != expected || forest.components() != 1 {
        return Err(MstError::InvariantViolation {
            invariant: "complete graph must yield a spanning tree",
            accepted: edges.len(),
            expected,
        });
    }

    debug!(weight, edges = edges.len(), "spanning tree complete");
    Ok(SpanningTree {
        vertex_count,
        edges,
        weight,
    })
}

fn candidate_edges<M: Metric + ?Sized>(metric: &M) -> Vec<Edge> {
    let vertex_count = metric.vertex_count();
    let capacity = vertex_count.saturating_mul(vertex_count.saturating_sub(1)) / 2;
    let mut candidates = Vec::with_capacity(capacity);
    for source in 0..vertex_count {
        for target in (source + 1)..vertex_count {
            candidates.push(Edge::new(source, target, metric.distance(source, target)));
        }
    }
    candidates
}
