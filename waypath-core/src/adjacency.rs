//! Per-vertex neighbour lists over an undirected multigraph.
//!
//! The list is an arena of vertex records indexed by vertex id. Parallel
//! edges are kept, so a neighbour may appear several times in one record.
//! Removing an edge takes out one occurrence from each endpoint and leaves
//! the order of the remaining neighbours unchanged, which keeps Eulerian
//! extraction deterministic.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct VertexRecord {
    neighbours: Vec<usize>,
}

/// Mutable adjacency view of an undirected multigraph.
///
/// # Examples
/// ```
/// use waypath_core::AdjacencyList;
///
/// let mut adjacency = AdjacencyList::from_edges(3, [(0, 1), (1, 2)]);
/// assert_eq!(adjacency.neighbours(1), &[0, 2]);
/// assert_eq!(adjacency.odd_vertices(), vec![0, 2]);
///
/// assert!(adjacency.remove_edge(1, 0));
/// assert_eq!(adjacency.neighbours(1), &[2]);
/// assert_eq!(adjacency.edge_count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    vertices: Vec<VertexRecord>,
}

impl AdjacencyList {
    /// Creates a view over `vertex_count` isolated vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertices: vec![VertexRecord::default(); vertex_count],
        }
    }

    /// Builds a view from `(left, right)` pairs, appending neighbours in
    /// edge order.
    ///
    /// # Panics
    /// Panics when an endpoint is `>= vertex_count`.
    #[must_use]
    pub fn from_edges(vertex_count: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut adjacency = Self::new(vertex_count);
        for (left, right) in edges {
            adjacency.add_edge(left, right);
        }
        adjacency
    }

    /// Records an undirected edge on both endpoints.
    ///
    /// # Panics
    /// Panics when an endpoint is out of range.
    pub fn add_edge(&mut self, left: usize, right: usize) {
        self.vertices[left].neighbours.push(right);
        self.vertices[right].neighbours.push(left);
    }

    /// Removes one `left`–`right` edge from both endpoints, returning
    /// `false` when no such edge is present.
    pub fn remove_edge(&mut self, left: usize, right: usize) -> bool {
        let Some(left_slot) = self.position(left, right) else {
            return false;
        };
        let Some(right_slot) = self.position(right, left) else {
            return false;
        };
        self.vertices[left].neighbours.remove(left_slot);
        if left == right {
            // A self-loop stores both directions on the same record.
            if let Some(second) = self.position(left, left) {
                self.vertices[left].neighbours.remove(second);
            }
            return true;
        }
        self.vertices[right].neighbours.remove(right_slot);
        true
    }

    fn position(&self, vertex: usize, neighbour: usize) -> Option<usize> {
        self.vertices
            .get(vertex)?
            .neighbours
            .iter()
            .position(|&candidate| candidate == neighbour)
    }

    /// Returns the number of vertices in the view.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the current neighbours of `vertex`, or an empty slice for an
    /// unknown vertex.
    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> &[usize] {
        self.vertices
            .get(vertex)
            .map_or(&[], |record| record.neighbours.as_slice())
    }

    /// Returns the first remaining neighbour of `vertex`.
    #[must_use]
    pub fn first_neighbour(&self, vertex: usize) -> Option<usize> {
        self.neighbours(vertex).first().copied()
    }

    /// Returns the number of incident edge ends at `vertex`.
    #[must_use]
    pub fn degree(&self, vertex: usize) -> usize {
        self.neighbours(vertex).len()
    }

    /// Returns the vertices with odd degree in ascending order.
    #[must_use]
    pub fn odd_vertices(&self) -> Vec<usize> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, record)| record.neighbours.len() % 2 == 1)
            .map(|(vertex, _)| vertex)
            .collect()
    }

    /// Returns the number of undirected edges still present.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices
            .iter()
            .map(|record| record.neighbours.len())
            .sum::<usize>()
            / 2
    }
}
