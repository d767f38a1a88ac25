//! Seeded synthetic point sets.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;
use waypath_core::Point;

/// Configuration for [`SyntheticSource::generate`].
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Coordinates are drawn from `0..extent` on both axes.
    pub extent: u32,
    /// RNG seed; equal seeds yield equal point sets.
    pub seed: u64,
}

/// Errors raised while generating synthetic points.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SyntheticError {
    /// `point_count` was zero.
    #[error("point_count must be greater than zero")]
    ZeroPoints,
    /// `extent` was zero.
    #[error("extent must be greater than zero")]
    ZeroExtent,
}

/// Uniformly scattered integer points.
#[derive(Clone, Debug)]
pub struct SyntheticSource {
    points: Vec<Point>,
}

impl SyntheticSource {
    /// Generates `config.point_count` points.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the count or extent is zero.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        if config.point_count == 0 {
            return Err(SyntheticError::ZeroPoints);
        }
        if config.extent == 0 {
            return Err(SyntheticError::ZeroExtent);
        }
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let points = (0..config.point_count)
            .map(|_| Point::new(rng.gen_range(0..config.extent), rng.gen_range(0..config.extent)))
            .collect();
        Ok(Self { points })
    }

    /// Returns the generated points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}
