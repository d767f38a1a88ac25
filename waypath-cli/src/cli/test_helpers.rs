//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, DistanceArg, Layout, OutputFormat, SolveCommand, StrategyArg, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_points_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn solve(path: PathBuf) -> SolveCommand {
    SolveCommand {
        path,
        strategy: StrategyArg::Christofides,
        distance: DistanceArg::Matrix,
        lenient: false,
        format: OutputFormat::Text,
        layout: Layout::Lines,
        output: None,
        name: None,
    }
}

pub(super) fn run_cli_expecting_error(command: SolveCommand, panic_msg: &str) -> CliError {
    match run_cli(Cli {
        command: super::Command::Solve(command),
    }) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
