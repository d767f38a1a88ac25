//! Command implementations and argument parsing for the waypath CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use waypath_core::{DistanceCache, Strategy, Tour, TourError, TourSolverBuilder};
use waypath_providers_points::{ParseMode, PointReaderError, PointSet};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "waypath", about = "Approximate travelling-salesman tours over 2-D points.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute a closed tour over the points in a file.
    Solve(SolveCommand),
}

/// Options accepted by the `solve` command.
#[derive(Debug, Args, Clone)]
pub struct SolveCommand {
    /// Path to a text file with one `label x y` point per line.
    pub path: PathBuf,

    /// Tour construction strategy.
    #[arg(long, value_enum, default_value_t = StrategyArg::Christofides)]
    pub strategy: StrategyArg,

    /// How pairwise distances are served.
    #[arg(long, value_enum, default_value_t = DistanceArg::Matrix)]
    pub distance: DistanceArg,

    /// Skip malformed lines instead of failing.
    #[arg(long)]
    pub lenient: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Placement of vertex indices in text output.
    #[arg(long, value_enum, default_value_t = Layout::Lines)]
    pub layout: Layout,

    /// Write the result to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

impl SolveCommand {
    /// Returns the rendering half of the options.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format: self.format,
            layout: self.layout,
            output: self.output.clone(),
        }
    }
}

/// Strategy names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Spanning tree, odd-vertex matching and Eulerian shortcutting.
    Christofides,
    /// Greedy closest-unvisited walk.
    NearestNeighbour,
    /// Depth-first walk of the minimum spanning tree.
    MstPreorder,
}

impl From<StrategyArg> for Strategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Christofides => Self::Christofides,
            StrategyArg::NearestNeighbour => Self::NearestNeighbour,
            StrategyArg::MstPreorder => Self::MstPreorder,
        }
    }
}

/// Distance cache names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistanceArg {
    /// Precompute every pair.
    Matrix,
    /// Compute distances when needed.
    OnDemand,
}

impl From<DistanceArg> for DistanceCache {
    fn from(value: DistanceArg) -> Self {
        match value {
            DistanceArg::Matrix => Self::Matrix,
            DistanceArg::OnDemand => Self::OnDemand,
        }
    }
}

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Cost on the first line, then the visiting order.
    Text,
    /// A single JSON document.
    Json,
}

/// Placement of vertex indices in text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// One index per line.
    Lines,
    /// All indices on one space-separated line.
    Inline,
}

/// Where and how a summary is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Text layout; ignored for JSON.
    pub layout: Layout,
    /// Destination file, or stdout when `None`.
    pub output: Option<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The result could not be written.
    #[error("failed to write `{target}`: {source}")]
    Output {
        /// File path, or `<stdout>`.
        target: String,
        /// Underlying write failure.
        #[source]
        source: io::Error,
    },
    /// The point file was malformed.
    #[error(transparent)]
    Points(#[from] PointReaderError),
    /// The tour could not be computed.
    #[error(transparent)]
    Core(#[from] TourError),
}

/// Outcome of a `solve` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveSummary {
    /// Name of the point source.
    pub data_source: String,
    /// Strategy that produced the tour.
    pub strategy: Strategy,
    /// Malformed lines skipped in lenient mode.
    pub skipped: usize,
    /// The computed tour.
    pub tour: Tour,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    data_source: &'a str,
    strategy: &'static str,
    points: usize,
    skipped: usize,
    cost: u64,
    tour: &'a [usize],
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading the points or computing the tour fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use clap::Parser;
/// # use tempfile::NamedTempFile;
/// # use waypath_cli::cli::{Cli, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "a 0 0\nb 5 0\n")?;
/// let cli = Cli::try_parse_from(["waypath", "solve", &file.path().display().to_string()])?;
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.tour.vertices(), &[0, 1, 0]);
/// assert_eq!(summary.tour.cost(), 10);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<SolveSummary, CliError> {
    match cli.command {
        Command::Solve(solve) => {
            Span::current().record("command", field::display("solve"));
            solve_command(solve)
        }
    }
}

#[instrument(
    name = "cli.solve",
    err,
    skip(command),
    fields(path = field::Empty, strategy = field::Empty, lenient = command.lenient),
)]
pub(super) fn solve_command(command: SolveCommand) -> Result<SolveSummary, CliError> {
    let strategy = Strategy::from(command.strategy);
    let span = Span::current();
    span.record("path", field::display(command.path.display()));
    span.record("strategy", field::display(strategy));

    let mode = if command.lenient {
        ParseMode::Lenient
    } else {
        ParseMode::Strict
    };
    let name = derive_data_source_name(&command.path, command.name.as_deref());
    let reader = open_reader(&command.path)?;
    let points = PointSet::try_from_reader(name, reader, mode)?;

    let solver = TourSolverBuilder::new()
        .with_strategy(strategy)
        .with_distance_cache(command.distance.into())
        .build();
    let tour = solver.solve(points.points())?;

    info!(
        data_source = points.name(),
        points = points.len(),
        skipped = points.skipped(),
        cost = tour.cost(),
        "solve completed"
    );
    Ok(SolveSummary {
        data_source: points.name().to_owned(),
        strategy,
        skipped: points.skipped(),
        tour,
    })
}

#[instrument(name = "cli.open_reader", err, fields(path = field::Empty))]
pub(super) fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "points".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer`.
///
/// Text output puts the cost on the first line followed by the vertex
/// indices, one per line or space-separated on a single line. JSON output is
/// one pretty-printed document.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use waypath_cli::cli::{Layout, OutputFormat, render_summary, run_cli, Cli};
/// # use clap::Parser;
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "a 0 0\nb 0 1\nc 1 0\nd 1 1\n")?;
/// let path = file.path().display().to_string();
/// let summary = run_cli(Cli::try_parse_from(["waypath", "solve", &path])?)?;
///
/// let mut buffer = Vec::new();
/// render_summary(&summary, OutputFormat::Text, Layout::Inline, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "4\n0 1 2 3 0\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(
    summary: &SolveSummary,
    format: OutputFormat,
    layout: Layout,
    mut writer: impl Write,
) -> io::Result<()> {
    let vertices = summary.tour.vertices();
    match format {
        OutputFormat::Text => {
            writeln!(writer, "{}", summary.tour.cost())?;
            match layout {
                Layout::Lines => {
                    for vertex in vertices {
                        writeln!(writer, "{vertex}")?;
                    }
                }
                Layout::Inline => {
                    let joined: Vec<String> = vertices.iter().map(ToString::to_string).collect();
                    writeln!(writer, "{}", joined.join(" "))?;
                }
            }
        }
        OutputFormat::Json => {
            let document = JsonSummary {
                data_source: &summary.data_source,
                strategy: summary.strategy.as_str(),
                points: vertices.len().saturating_sub(1),
                skipped: summary.skipped,
                cost: summary.tour.cost(),
                tour: vertices,
            };
            serde_json::to_writer_pretty(&mut writer, &document)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Renders `summary` to the destination named in `options` and flushes it.
///
/// # Errors
/// Returns [`CliError::Output`] when the destination cannot be created or
/// written.
#[instrument(name = "cli.write", err, skip(summary), fields(format = ?options.format))]
pub fn write_summary(summary: &SolveSummary, options: &RenderOptions) -> Result<(), CliError> {
    match &options.output {
        Some(path) => {
            let to_output_error = |source| CliError::Output {
                target: path.display().to_string(),
                source,
            };
            let file = File::create(path).map_err(to_output_error)?;
            let mut writer = BufWriter::new(file);
            render_summary(summary, options.format, options.layout, &mut writer)
                .and_then(|()| writer.flush())
                .map_err(to_output_error)
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            render_summary(summary, options.format, options.layout, &mut writer)
                .and_then(|()| writer.flush())
                .map_err(|source| CliError::Output {
                    target: "<stdout>".to_owned(),
                    source,
                })
        }
    }
}
