//! Coarse progress notifications for long solves.

use std::fmt;

/// Pipeline milestones reported to a [`ProgressObserver`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Stage {
    /// Pairwise distances can be served. Fires for both distance caches:
    /// after the matrix is filled, or at once for on-demand distances.
    Distances,
    /// The minimum spanning tree is built.
    SpanningTree,
    /// Odd-degree vertices are matched.
    Matching,
    /// The Eulerian circuit is extracted.
    EulerianCircuit,
    /// The final tour and its cost are known.
    Finalize,
}

impl Stage {
    /// Returns a stable identifier suitable for log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distances => "distances",
            Self::SpanningTree => "spanning_tree",
            Self::Matching => "matching",
            Self::EulerianCircuit => "eulerian_circuit",
            Self::Finalize => "finalize",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives a callback after each pipeline stage completes.
///
/// Observers only watch; nothing they do feeds back into the solve.
///
/// # Examples
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use waypath_core::{Point, ProgressObserver, Stage, TourSolverBuilder};
///
/// #[derive(Default)]
/// struct Log(Mutex<Vec<Stage>>);
///
/// impl ProgressObserver for Log {
///     fn stage_completed(&self, stage: Stage) {
///         if let Ok(mut stages) = self.0.lock() {
///             stages.push(stage);
///         }
///     }
/// }
///
/// let log = Arc::new(Log::default());
/// let solver = TourSolverBuilder::new().with_progress(log.clone()).build();
/// solver.solve(&[Point::new(0, 0), Point::new(1, 1)])?;
/// assert_eq!(log.0.lock().map(|stages| stages.len()).unwrap_or_default(), 5);
/// # Ok::<(), waypath_core::TourError>(())
/// ```
pub trait ProgressObserver: Send + Sync {
    /// Called once `stage` has finished.
    fn stage_completed(&self, stage: Stage);
}
