//! Spanning tree fused with matching edges.

use crate::{adjacency::AdjacencyList, edge::Edge, mst::SpanningTree};

/// Undirected multigraph formed by a spanning tree plus the matching edges
/// added on its odd-degree vertices.
///
/// The adjacency view and the edge list always describe the same edges.
/// Parallel edges are permitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Multigraph {
    adjacency: AdjacencyList,
    edges: Vec<Edge>,
    matching_edges: usize,
}

impl Multigraph {
    /// Seeds the multigraph with the edges of `tree`.
    #[must_use]
    pub fn from_tree(tree: &SpanningTree) -> Self {
        let adjacency = AdjacencyList::from_edges(
            tree.vertex_count(),
            tree.edges().iter().map(|edge| (edge.source(), edge.target())),
        );
        Self {
            adjacency,
            edges: tree.edges().to_vec(),
            matching_edges: 0,
        }
    }

    /// Builds a multigraph directly from an edge list. Every edge counts as
    /// a tree edge.
    ///
    /// # Panics
    /// Panics when an endpoint is `>= vertex_count`.
    #[must_use]
    pub fn from_edges(vertex_count: usize, edges: Vec<Edge>) -> Self {
        let adjacency = AdjacencyList::from_edges(
            vertex_count,
            edges.iter().map(|edge| (edge.source(), edge.target())),
        );
        Self {
            adjacency,
            edges,
            matching_edges: 0,
        }
    }

    /// Appends a matching edge to both the adjacency view and the edge list.
    ///
    /// # Panics
    /// Panics when an endpoint is out of range.
    pub fn add_matching_edge(&mut self, edge: Edge) {
        self.adjacency.add_edge(edge.source(), edge.target());
        self.edges.push(edge);
        self.matching_edges += 1;
    }

    /// Returns the adjacency view.
    #[must_use]
    #[rustfmt::skip]
    pub const fn adjacency(&self) -> &AdjacencyList { &self.adjacency }

    /// Returns every edge, tree edges first, in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns how many edges came from the matching stage.
    #[must_use]
    #[rustfmt::skip]
    pub const fn matching_edge_count(&self) -> usize { self.matching_edges }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    /// Splits the multigraph into its adjacency view and edge list so that
    /// both can be consumed.
    #[must_use]
    pub fn into_parts(self) -> (AdjacencyList, Vec<Edge>) {
        (self.adjacency, self.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::Multigraph;
    use crate::{
        DistanceMatrix, Edge,
        mst::build_spanning_tree,
        test_utils::points,
    };

    #[test]
    fn tree_edges_seed_both_views() {
        let matrix = DistanceMatrix::from_points(&points(&[(0, 0), (3, 0), (0, 4)]));
        let tree = build_spanning_tree(&matrix).expect("triangle must succeed");
        let mut multigraph = Multigraph::from_tree(&tree);

        assert_eq!(multigraph.edge_count(), 2);
        assert_eq!(multigraph.matching_edge_count(), 0);
        assert_eq!(multigraph.adjacency().odd_vertices(), vec![1, 2]);

        multigraph.add_matching_edge(Edge::new(2, 1, 5));
        assert_eq!(multigraph.edge_count(), 3);
        assert_eq!(multigraph.matching_edge_count(), 1);
        assert!(multigraph.adjacency().odd_vertices().is_empty());

        let (adjacency, edges) = multigraph.into_parts();
        assert_eq!(adjacency.edge_count(), edges.len());
        assert_eq!(edges.last(), Some(&Edge::new(1, 2, 5)));
    }
}
