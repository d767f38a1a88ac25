//! Command-line interface for computing tours from point files.
//!
//! `waypath solve <PATH>` reads `label x y` lines, runs the selected tour
//! strategy and writes the cost followed by the visiting order.

mod commands;

pub use commands::{
    Cli, CliError, Command, DistanceArg, Layout, OutputFormat, RenderOptions, SolveCommand,
    SolveSummary, StrategyArg, render_summary, run_cli, write_summary,
};

#[cfg(test)]
mod test_helpers;
