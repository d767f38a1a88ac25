//! Benchmark parameter labels.

use std::fmt;

use waypath_core::{DistanceCache, Strategy};

/// Parameters for a spanning tree benchmark run.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of points in the dataset.
    pub point_count: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.point_count)
    }
}

/// Parameters for a full solve benchmark run.
#[derive(Clone, Debug)]
pub struct SolveBenchParams {
    /// Number of points in the dataset.
    pub point_count: usize,
    /// Strategy under test.
    pub strategy: Strategy,
    /// How distances are served.
    pub distance_cache: DistanceCache,
}

impl fmt::Display for SolveBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = match self.distance_cache {
            DistanceCache::Matrix => "matrix",
            DistanceCache::OnDemand => "on-demand",
        };
        write!(f, "{}/{cache}/n={}", self.strategy, self.point_count)
    }
}
