//! CLI entry point for computing approximate tours.
//!
//! Parses arguments with clap, solves the requested point file, writes the
//! tour to stdout or a file, and maps failures to a non-zero exit code after
//! logging their stable error codes.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, field};

use waypath_cli::{
    cli::{Cli, CliError, Command, run_cli, write_summary},
    logging::{self, LoggingError, LoggingOutcome},
};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let Command::Solve(solve) = &cli.command;
    let options = solve.render_options();
    let summary = run_cli(cli).context("failed to solve")?;
    write_summary(&summary, &options).context("failed to write tour")?;
    Ok(())
}

fn main() -> ExitCode {
    match logging::init_logging() {
        Ok(LoggingOutcome::Installed) => {}
        Ok(LoggingOutcome::AlreadyConfigured(err)) => report_logging_conflict(&err),
        Err(err) => {
            report_logging_init_error(&err);
            return ExitCode::FAILURE;
        }
    }

    if let Err(err) = try_main() {
        let (code, mst_code) = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Core(core) => Some((Some(core.code()), core.mst_code())),
                _ => None,
            })
            .unwrap_or((None, None));

        error!(
            error = format!("{err:#}"),
            code = code.map(|code| field::display(code.as_str())),
            mst_code = mst_code.map(|code| field::display(code.as_str())),
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}

#[expect(
    clippy::print_stderr,
    reason = "Another subscriber owns the global slot, so tracing output may be lost"
)]
fn report_logging_conflict(err: &tracing_subscriber::util::TryInitError) {
    eprintln!("structured logging already configured elsewhere: {err}");
}
