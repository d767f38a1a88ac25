//! Support library for the `waypath` binary.
//!
//! Exposes the command pipeline and logging setup so tests and doctests can
//! drive them without spawning a process.

pub mod cli;
pub mod logging;
