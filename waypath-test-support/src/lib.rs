//! Shared test utilities used across waypath crates.

pub mod proptest_profile;
pub mod tracing;
