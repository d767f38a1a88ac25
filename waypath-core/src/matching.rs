//! Greedy pairing of odd-degree spanning tree vertices.
//!
//! The pool holds the tree's odd-degree vertices in ascending order. The
//! front vertex is paired with the closest vertex left in the pool, the
//! first one winning ties, and both leave the pool. This is a heuristic
//! and does not guarantee a minimum-weight perfect matching.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::{
    distance::{Metric, Weight},
    edge::Edge,
    error::{Result, TourError},
    mst::SpanningTree,
    multigraph::Multigraph,
};

/// Adds a greedy matching over the odd-degree vertices of `tree` and
/// returns the fused multigraph, in which every vertex has even degree.
///
/// # Errors
/// Returns [`TourError::InvariantViolation`] when the tree has an odd
/// number of odd-degree vertices, which cannot happen for a valid tree.
///
/// # Examples
/// ```
/// use waypath_core::{DistanceMatrix, Point, build_spanning_tree, match_odd_vertices};
///
/// let matrix = DistanceMatrix::from_points(&[
///     Point::new(0, 0),
///     Point::new(3, 0),
///     Point::new(0, 4),
/// ]);
/// let tree = build_spanning_tree(&matrix)?;
/// let multigraph = match_odd_vertices(&tree, &matrix)?;
/// assert_eq!(multigraph.matching_edge_count(), 1);
/// assert!(multigraph.adjacency().odd_vertices().is_empty());
/// # Ok::<(), waypath_core::TourError>(())
/// ```
#[instrument(
    name = "core.matching",
    err,
    skip(tree, metric),
    fields(vertices = tree.vertex_count()),
)]
pub fn match_odd_vertices<M: Metric + ?Sized>(
    tree: &SpanningTree,
    metric: &M,
) -> Result<Multigraph> {
    let mut multigraph = Multigraph::from_tree(tree);
    let mut pool: VecDeque<usize> = multigraph.adjacency().odd_vertices().into();
    if pool.len() % 2 != 0 {
        return Err(TourError::invariant(
            "spanning tree must have an even number of odd-degree vertices",
        ));
    }
    let odd_vertices = pool.len();

    let mut weight: Weight = 0;
    while let Some(vertex) = pool.pop_front() {
        let (slot, distance) = pool
            .iter()
            .enumerate()
            .map(|(slot, &candidate)| (slot, metric.distance(vertex, candidate)))
            .min_by_key(|&(_, distance)| distance)
            .ok_or(TourError::invariant("odd vertex left without a partner"))?;
        let partner = pool
            .remove(slot)
            .ok_or(TourError::invariant("matching partner vanished from the pool"))?;
        weight = weight.saturating_add(distance);
        multigraph.add_matching_edge(Edge::new(vertex, partner, distance));
    }

    debug!(
        odd_vertices,
        matching_edges = multigraph.matching_edge_count(),
        weight,
        "odd vertices matched"
    );
    Ok(multigraph)
}
