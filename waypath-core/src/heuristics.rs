//! Tour heuristics that share the distance and spanning tree stages with
//! the Christofides pipeline but skip matching.

use tracing::instrument;

use crate::{
    adjacency::AdjacencyList,
    distance::Metric,
    error::{Result, TourError},
    mst::SpanningTree,
    tour::{Tour, finalize_tour},
};

/// Builds a tour by always moving to the closest unvisited vertex, starting
/// from vertex 0. Ties go to the lowest index.
///
/// # Errors
/// Returns [`TourError::InsufficientPoints`] when the metric covers fewer
/// than two vertices.
///
/// # Examples
/// ```
/// use waypath_core::{DistanceMatrix, Point, nearest_neighbour_tour};
///
/// let matrix = DistanceMatrix::from_points(&[
///     Point::new(0, 0),
///     Point::new(10, 0),
///     Point::new(1, 0),
/// ]);
/// let tour = nearest_neighbour_tour(&matrix)?;
/// assert_eq!(tour.vertices(), &[0, 2, 1, 0]);
/// assert_eq!(tour.cost(), 20);
/// # Ok::<(), waypath_core::TourError>(())
/// ```
#[instrument(
    name = "core.nearest_neighbour",
    err,
    skip(metric),
    fields(vertices = metric.vertex_count()),
)]
pub fn nearest_neighbour_tour<M: Metric + ?Sized>(metric: &M) -> Result<Tour> {
    let vertex_count = metric.vertex_count();
    if vertex_count < 2 {
        return Err(TourError::InsufficientPoints { got: vertex_count });
    }

    let mut visited = vec![false; vertex_count];
    let mut order = Vec::with_capacity(vertex_count + 1);
    let mut current = 0;
    visited[current] = true;
    order.push(current);

    while order.len() < vertex_count {
        let next = (0..vertex_count)
            .filter(|&candidate| !visited[candidate])
            .min_by_key(|&candidate| (metric.distance(current, candidate), candidate))
            .ok_or(TourError::invariant("unvisited vertex must remain"))?;
        visited[next] = true;
        order.push(next);
        current = next;
    }
    order.push(0);

    finalize_tour(&order, metric)
}

/// Builds a tour by walking `tree` depth first from vertex 0.
///
/// At every step the unvisited children of the current vertex are ranked by
/// their distance to the most recently visited vertex, then by index. When
/// none remain the walk backtracks to the parent.
///
/// # Errors
/// Returns [`TourError::InvariantViolation`] when the tree does not match
/// the metric or does not reach every vertex.
#[instrument(
    name = "core.mst_preorder",
    err,
    skip(tree, metric),
    fields(vertices = tree.vertex_count()),
)]
pub fn mst_preorder_tour<M: Metric + ?Sized>(tree: &SpanningTree, metric: &M) -> Result<Tour> {
    let vertex_count = tree.vertex_count();
    if vertex_count != metric.vertex_count() {
        return Err(TourError::invariant(
            "spanning tree and metric must cover the same vertices",
        ));
    }
    if vertex_count == 0 {
        return Err(TourError::InsufficientPoints { got: 0 });
    }

    let adjacency = AdjacencyList::from_edges(
        vertex_count,
        tree.edges().iter().map(|edge| (edge.source(), edge.target())),
    );
    let mut parent: Vec<Option<usize>> = vec![None; vertex_count];
    let mut visited = vec![false; vertex_count];
    let mut order = Vec::with_capacity(vertex_count + 1);

    let mut current = 0;
    let mut last = 0;
    visited[current] = true;
    order.push(current);

    loop {
        let child = adjacency
            .neighbours(current)
            .iter()
            .copied()
            .filter(|&candidate| !visited[candidate])
            .min_by_key(|&candidate| (metric.distance(last, candidate), candidate));
        if let Some(child) = child {
            visited[child] = true;
            parent[child] = Some(current);
            order.push(child);
            last = child;
            current = child;
            continue;
        }
        match parent[current] {
            Some(up) => current = up,
            None => break,
        }
    }
    order.push(0);

    finalize_tour(&order, metric)
}
