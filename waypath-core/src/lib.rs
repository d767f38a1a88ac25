//! Waypath core library.
//!
//! Approximates Euclidean travelling-salesman tours over a complete graph of
//! integer points. The default [`Strategy::Christofides`] pipeline runs:
//!
//! 1. Kruskal's minimum spanning tree over every point pair.
//! 2. Greedy nearest-available pairing of the tree's odd-degree vertices.
//! 3. Hierholzer-style Eulerian circuit extraction over the fused multigraph.
//! 4. Shortcutting of repeated vertices into a closed Hamiltonian tour.
//!
//! Every stage reads distances from the same [`Metric`], so the tree, the
//! matching and the final cost agree on each pair's rounded length.
//!
//! ```
//! use waypath_core::{Point, compute_approximate_tour};
//!
//! let points = [Point::new(0, 0), Point::new(5, 0)];
//! let tour = compute_approximate_tour(&points)?;
//! assert_eq!(tour.vertices(), &[0, 1, 0]);
//! assert_eq!(tour.cost(), 10);
//! # Ok::<(), waypath_core::TourError>(())
//! ```

mod adjacency;
mod distance;
mod edge;
mod error;
mod euler;
mod heuristics;
mod matching;
mod mst;
mod multigraph;
mod point;
mod progress;
mod solver;
#[cfg(test)]
mod test_utils;
mod tour;

pub use crate::{
    adjacency::AdjacencyList,
    distance::{DistanceMatrix, Metric, PointMetric, Weight, euclidean_distance},
    edge::Edge,
    error::{Result, TourError, TourErrorCode},
    euler::extract_eulerian_circuit,
    heuristics::{mst_preorder_tour, nearest_neighbour_tour},
    matching::match_odd_vertices,
    mst::{MstError, MstErrorCode, SpanningTree, build_spanning_tree},
    multigraph::Multigraph,
    point::Point,
    progress::{ProgressObserver, Stage},
    solver::{DistanceCache, Strategy, TourSolver, TourSolverBuilder, compute_approximate_tour},
    tour::{Tour, finalize_tour},
};
