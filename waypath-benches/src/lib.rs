//! Benchmark support crate for waypath.
//!
//! Provides seeded synthetic point sets and parameter labels used by the
//! Criterion benchmarks for the spanning tree stage and the full solvers.

pub mod error;
pub mod params;
pub mod source;
