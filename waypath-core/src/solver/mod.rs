//! Tour solver configuration and orchestration.
//!
//! [`TourSolverBuilder`] selects the strategy and how distances are served;
//! [`TourSolver::solve`] runs the chosen pipeline end to end.

use std::{fmt, sync::Arc};

use tracing::{debug, info, instrument};

use crate::{
    distance::{DistanceMatrix, Metric, PointMetric},
    error::{Result, TourError},
    euler::extract_eulerian_circuit,
    heuristics::{mst_preorder_tour, nearest_neighbour_tour},
    matching::match_odd_vertices,
    mst::build_spanning_tree,
    point::Point,
    progress::{ProgressObserver, Stage},
    tour::{Tour, finalize_tour},
};

/// Tour construction strategy.
///
/// # Examples
/// ```
/// use waypath_core::Strategy;
///
/// assert_eq!(Strategy::default(), Strategy::Christofides);
/// assert_eq!(Strategy::MstPreorder.as_str(), "mst-preorder");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Strategy {
    /// Spanning tree, greedy odd-vertex matching, Eulerian circuit and
    /// shortcutting.
    #[default]
    Christofides,
    /// Always move to the closest unvisited point.
    NearestNeighbour,
    /// Depth-first walk of the minimum spanning tree.
    MstPreorder,
}

impl Strategy {
    /// Returns the identifier used on the command line and in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Christofides => "christofides",
            Self::NearestNeighbour => "nearest-neighbour",
            Self::MstPreorder => "mst-preorder",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How pairwise distances are served to the pipeline.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DistanceCache {
    /// Precompute every pair once. Uses `O(n²)` memory.
    #[default]
    Matrix,
    /// Recompute each distance when it is needed. Uses `O(n)` memory.
    OnDemand,
}

/// Configures and constructs [`TourSolver`] instances.
///
/// # Examples
/// ```
/// use waypath_core::{DistanceCache, Strategy, TourSolverBuilder};
///
/// let solver = TourSolverBuilder::new()
///     .with_strategy(Strategy::NearestNeighbour)
///     .with_distance_cache(DistanceCache::OnDemand)
///     .build();
/// assert_eq!(solver.strategy(), Strategy::NearestNeighbour);
/// assert_eq!(solver.distance_cache(), DistanceCache::OnDemand);
/// ```
#[derive(Clone, Default)]
pub struct TourSolverBuilder {
    strategy: Strategy,
    distance_cache: DistanceCache,
    progress: Option<Arc<dyn ProgressObserver>>,
}

impl TourSolverBuilder {
    /// Creates a builder with the Christofides strategy and a precomputed
    /// distance matrix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the tour construction strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured strategy.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Selects how distances are served.
    #[must_use]
    pub fn with_distance_cache(mut self, distance_cache: DistanceCache) -> Self {
        self.distance_cache = distance_cache;
        self
    }

    /// Returns the configured distance cache.
    #[must_use]
    pub const fn distance_cache(&self) -> DistanceCache {
        self.distance_cache
    }

    /// Registers an observer notified after each pipeline stage.
    #[must_use]
    pub fn with_progress(mut self, observer: Arc<dyn ProgressObserver>) -> Self {
        self.progress = Some(observer);
        self
    }

    /// Constructs the solver.
    #[must_use]
    pub fn build(self) -> TourSolver {
        TourSolver {
            strategy: self.strategy,
            distance_cache: self.distance_cache,
            progress: self.progress,
        }
    }
}

impl fmt::Debug for TourSolverBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TourSolverBuilder")
            .field("strategy", &self.strategy)
            .field("distance_cache", &self.distance_cache)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}

/// Entry point for computing tours.
///
/// A solver holds configuration only, so one instance can serve any number
/// of independent solves, from any thread.
///
/// # Examples
/// ```
/// use waypath_core::{Point, TourSolverBuilder};
///
/// let solver = TourSolverBuilder::new().build();
/// let tour = solver.solve(&[
///     Point::new(0, 0),
///     Point::new(0, 1),
///     Point::new(1, 0),
///     Point::new(1, 1),
/// ])?;
/// assert_eq!(tour.vertices(), &[0, 1, 2, 3, 0]);
/// assert_eq!(tour.cost(), 4);
/// # Ok::<(), waypath_core::TourError>(())
/// ```
#[derive(Clone, Default)]
pub struct TourSolver {
    strategy: Strategy,
    distance_cache: DistanceCache,
    progress: Option<Arc<dyn ProgressObserver>>,
}

impl TourSolver {
    /// Returns the strategy this solver runs.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns how this solver serves distances.
    #[must_use]
    pub const fn distance_cache(&self) -> DistanceCache {
        self.distance_cache
    }

    /// Computes a closed tour over `points`.
    ///
    /// The tour starts and ends at index 0 and visits every other index
    /// exactly once. Identical inputs always produce identical tours.
    ///
    /// # Errors
    /// Returns [`TourError::InsufficientPoints`] for fewer than two points
    /// and [`TourError::InvariantViolation`] if an internal stage breaks its
    /// contract.
    #[instrument(
        name = "core.solve",
        err,
        skip(self, points),
        fields(
            points = points.len(),
            strategy = %self.strategy,
            distance_cache = ?self.distance_cache,
        ),
    )]
    pub fn solve(&self, points: &[Point]) -> Result<Tour> {
        if points.len() < 2 {
            return Err(TourError::InsufficientPoints { got: points.len() });
        }

        let tour = match self.distance_cache {
            DistanceCache::Matrix => {
                let matrix = DistanceMatrix::from_points(points);
                debug!(vertices = matrix.vertex_count(), "distance matrix built");
                self.run(&matrix)?
            }
            DistanceCache::OnDemand => self.run(&PointMetric::new(points))?,
        };

        info!(cost = tour.cost(), vertices = points.len(), "tour computed");
        Ok(tour)
    }

    fn run<M: Metric + ?Sized>(&self, metric: &M) -> Result<Tour> {
        self.notify(Stage::Distances);
        let tour = match self.strategy {
            Strategy::Christofides => self.christofides(metric)?,
            Strategy::NearestNeighbour => nearest_neighbour_tour(metric)?,
            Strategy::MstPreorder => {
                let tree = build_spanning_tree(metric)?;
                self.notify(Stage::SpanningTree);
                mst_preorder_tour(&tree, metric)?
            }
        };
        self.notify(Stage::Finalize);
        Ok(tour)
    }

    fn christofides<M: Metric + ?Sized>(&self, metric: &M) -> Result<Tour> {
        let tree = build_spanning_tree(metric)?;
        self.notify(Stage::SpanningTree);

        let multigraph = match_odd_vertices(&tree, metric)?;
        self.notify(Stage::Matching);

        let walk = extract_eulerian_circuit(multigraph)?;
        self.notify(Stage::EulerianCircuit);

        finalize_tour(&walk, metric)
    }

    fn notify(&self, stage: Stage) {
        if let Some(observer) = &self.progress {
            debug!(stage = stage.as_str(), "stage completed");
            observer.stage_completed(stage);
        }
    }
}

impl fmt::Debug for TourSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TourSolver")
            .field("strategy", &self.strategy)
            .field("distance_cache", &self.distance_cache)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}

/// Computes a Christofides-style tour over `points` with the default
/// configuration.
///
/// # Errors
/// Returns [`TourError::InsufficientPoints`] for fewer than two points.
pub fn compute_approximate_tour(points: &[Point]) -> Result<Tour> {
    TourSolver::default().solve(points)
}
