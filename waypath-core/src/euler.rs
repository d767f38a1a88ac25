//! Eulerian circuit extraction by splicing sub-walks into a growing path.
//!
//! The path starts at vertex 0. Each pass finds the earliest path position
//! whose vertex still has an unused edge and walks from there, always
//! taking the first remaining neighbour and inserting every new vertex
//! directly after the current position. The adjacency view and the edge
//! list are drained together, so each edge is consumed exactly once.

use tracing::{debug, instrument};

use crate::{
    adjacency::AdjacencyList,
    edge::Edge,
    error::{Result, TourError},
    multigraph::Multigraph,
};

/// Consumes `multigraph` and returns a closed walk that uses every edge
/// exactly once. The walk starts and ends at vertex 0 and holds
/// `edge_count + 1` vertices.
///
/// # Errors
/// Returns [`TourError::InvariantViolation`] when the multigraph is empty,
/// when edges remain that the walk cannot reach, or when the adjacency view
/// names an edge that is missing from the edge list.
///
/// # Examples
/// ```
/// use waypath_core::{
///     DistanceMatrix, Point, build_spanning_tree, extract_eulerian_circuit, match_odd_vertices,
/// };
///
/// let matrix = DistanceMatrix::from_points(&[
///     Point::new(0, 0),
///     Point::new(3, 0),
///     Point::new(0, 4),
/// ]);
/// let tree = build_spanning_tree(&matrix)?;
/// let walk = extract_eulerian_circuit(match_odd_vertices(&tree, &matrix)?)?;
/// assert_eq!(walk, vec![0, 1, 2, 0]);
/// # Ok::<(), waypath_core::TourError>(())
/// ```
#[instrument(
    name = "core.euler",
    err,
    skip(multigraph),
    fields(vertices = multigraph.vertex_count(), edges = multigraph.edge_count()),
)]
pub fn extract_eulerian_circuit(multigraph: Multigraph) -> Result<Vec<usize>> {
    if multigraph.vertex_count() == 0 {
        return Err(TourError::invariant("multigraph must have a vertex 0"));
    }
    let (mut adjacency, mut edges) = multigraph.into_parts();
    let edge_count = edges.len();

    let mut path = Vec::with_capacity(edge_count + 1);
    path.push(0);
    let mut splices = 0_usize;

    while !edges.is_empty() {
        let mut position = path
            .iter()
            .position(|&vertex| adjacency.degree(vertex) > 0)
            .ok_or(TourError::invariant(
                "remaining edges must be reachable from the walk",
            ))?;
        splices += 1;

        let mut current = path[position];
        while let Some(next) = adjacency.first_neighbour(current) {
            consume_edge(&mut adjacency, &mut edges, current, next)?;
            position += 1;
            path.insert(position, next);
            current = next;
        }
    }

    debug!(
        edges = edge_count,
        walk_len = path.len(),
        splices,
        "eulerian circuit extracted"
    );
    Ok(path)
}

fn consume_edge(
    adjacency: &mut AdjacencyList,
    edges: &mut Vec<Edge>,
    current: usize,
    next: usize,
) -> Result<()> {
    let slot = edges
        .iter()
        .position(|edge| edge.joins(current, next))
        .ok_or(TourError::invariant(
            "adjacency edge must be present in the edge list",
        ))?;
    edges.swap_remove(slot);
    if !adjacency.remove_edge(current, next) {
        return Err(TourError::invariant(
            "edge list entry must be present in the adjacency view",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::extract_eulerian_circuit;
    use crate::{
        DistanceMatrix, Edge, TourErrorCode,
        matching::match_odd_vertices,
        mst::build_spanning_tree,
        multigraph::Multigraph,
        test_utils::{points, small_point_set, suite_proptest_config},
    };

    fn walk_for(coordinates: &[(u32, u32)]) -> Vec<usize> {
        let matrix = DistanceMatrix::from_points(&points(coordinates));
        let tree = build_spanning_tree(&matrix).expect("tree must build");
        let multigraph = match_odd_vertices(&tree, &matrix).expect("matching must succeed");
        extract_eulerian_circuit(multigraph).expect("extraction must succeed")
    }

    #[rstest]
    #[case::two_points(&[(0, 0), (5, 0)], &[0, 1, 0])]
    #[case::triangle(&[(0, 0), (3, 0), (0, 4)], &[0, 1, 2, 0])]
    #[case::unit_square(&[(0, 0), (0, 1), (1, 0), (1, 1)], &[0, 1, 0, 2, 3, 0])]
    #[case::collinear(&[(0, 0), (1, 0), (2, 0), (3, 0)], &[0, 1, 2, 3, 0])]
    fn walks_follow_first_remaining_neighbour(
        #[case] coordinates: &[(u32, u32)],
        #[case] expected: &[usize],
    ) {
        assert_eq!(walk_for(coordinates), expected);
    }

    #[test]
    fn sub_walks_are_spliced_after_their_start() {
        // The first pass closes 0-1-0 over the parallel pair; the triangle
        // 1-2-3 is then spliced in at the earliest vertex with spare edges.
        let multigraph = Multigraph::from_edges(
            4,
            vec![
                Edge::new(0, 1, 1),
                Edge::new(1, 0, 1),
                Edge::new(1, 2, 1),
                Edge::new(2, 3, 1),
                Edge::new(3, 1, 1),
            ],
        );
        let walk = extract_eulerian_circuit(multigraph).expect("extraction must succeed");
        assert_eq!(walk, vec![0, 1, 2, 3, 1, 0]);
    }

    #[rstest]
    #[case::disconnected(Multigraph::from_edges(
        4,
        vec![Edge::new(0, 1, 1), Edge::new(0, 1, 1), Edge::new(2, 3, 1), Edge::new(2, 3, 1)],
    ))]
    #[case::no_vertices(Multigraph::from_edges(0, Vec::new()))]
    fn malformed_multigraphs_are_invariant_violations(#[case] multigraph: Multigraph) {
        let err = extract_eulerian_circuit(multigraph).expect_err("extraction must fail");
        assert_eq!(err.code(), TourErrorCode::InvariantViolation);
    }

    proptest! {
        #![proptest_config(suite_proptest_config(128))]

        #[test]
        fn every_edge_is_consumed_once(points in small_point_set(24)) {
            let matrix = DistanceMatrix::from_points(&points);
            let tree = build_spanning_tree(&matrix)?;
            let multigraph = match_odd_vertices(&tree, &matrix)?;
            let mut expected: Vec<(usize, usize)> = multigraph
                .edges()
                .iter()
                .map(|edge| (edge.source(), edge.target()))
                .collect();
            let walk = extract_eulerian_circuit(multigraph)?;

            prop_assert_eq!(walk.len(), expected.len() + 1);
            prop_assert_eq!(walk.first(), Some(&0));
            prop_assert_eq!(walk.last(), Some(&0));

            let mut traversed: Vec<(usize, usize)> = walk
                .windows(2)
                .map(|pair| (pair[0].min(pair[1]), pair[0].max(pair[1])))
                .collect();
            traversed.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(traversed, expected);
        }
    }
}
