//! Disjoint-set forest used while Kruskal grows the spanning tree.
//!
//! Two vertices are connected in the tree-so-far exactly when `find`
//! returns the same representative for both. The forest uses union by rank
//! with path compression and is discarded once the tree is complete.

#[derive(Clone, Debug)]
pub(super) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    pub(super) fn new(vertex_count: usize) -> Self {
        Self {
            parent: (0..vertex_count).collect(),
            rank: vec![0; vertex_count],
            components: vertex_count,
        }
    }

    pub(super) fn components(&self) -> usize {
        self.components
    }

    pub(super) fn find(&mut self, mut vertex: usize) -> usize {
        let mut root = vertex;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[vertex] != vertex {
            let parent = self.parent[vertex];
            self.parent[vertex] = root;
            vertex = parent;
        }

        root
    }

    /// Merges the components of `left` and `right`, returning `false` when
    /// they were already connected.
    pub(super) fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
        true
    }
}
