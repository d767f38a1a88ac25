//! Benchmark setup error type.

use waypath_core::{MstError, TourError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic data generation failed.
    #[error("synthetic point generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Spanning tree construction failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// A solver run failed.
    #[error("tour computation failed: {0}")]
    Tour(#[from] TourError),
}
