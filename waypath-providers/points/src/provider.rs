//! Point set loading from readers and paths.
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::{debug, instrument, warn};
use waypath_core::Point;

use crate::{
    errors::PointReaderError,
    parse::{decode_line, parse_line},
};

/// How malformed lines are handled.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ParseMode {
    /// Fail on the first malformed line.
    #[default]
    Strict,
    /// Skip malformed lines with a warning.
    Lenient,
}

/// Points read from a `label x y` source, indexed in file order.
///
/// # Examples
/// ```
/// use waypath_providers_points::{ParseMode, PointSet};
///
/// let input = "a 0 0\nb 3 4\n\n";
/// let set = PointSet::try_from_reader("demo", input.as_bytes(), ParseMode::Strict)?;
/// assert_eq!(set.name(), "demo");
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.points()[1].x(), 3);
/// # Ok::<(), waypath_providers_points::PointReaderError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointSet {
    name: String,
    points: Vec<Point>,
    skipped: usize,
}

impl PointSet {
    /// Wraps points that are already in memory.
    #[must_use]
    pub fn from_points(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
            skipped: 0,
        }
    }

    /// Opens `path` and reads it with [`Self::try_from_reader`].
    ///
    /// # Errors
    /// Returns [`PointReaderError::Io`] when the file cannot be opened, plus
    /// every error [`Self::try_from_reader`] can return.
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
        mode: ParseMode,
    ) -> Result<Self, PointReaderError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file), mode)
    }

    /// Reads one point per line. Blank lines are ignored; a line that is not
    /// valid UTF-8 counts as malformed.
    ///
    /// # Errors
    /// Returns [`PointReaderError::InvalidLine`] for a malformed line in
    /// [`ParseMode::Strict`], [`PointReaderError::Io`] when reading fails and
    /// [`PointReaderError::EmptyInput`] when no point was read.
    #[instrument(name = "points.read", err, skip(name, reader), fields(mode = ?mode))]
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        mut reader: R,
        mode: ParseMode,
    ) -> Result<Self, PointReaderError> {
        let mut points = Vec::new();
        let mut skipped = 0_usize;
        let mut buffer = Vec::new();
        let mut line = 0_usize;
        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            line += 1;
            let parsed = match decode_line(&buffer) {
                Ok(text) if text.trim().is_empty() => continue,
                Ok(text) => parse_line(text),
                Err(reason) => Err(reason),
            };
            match parsed {
                Ok(point) => points.push(point),
                Err(reason) => match mode {
                    ParseMode::Strict => {
                        return Err(PointReaderError::InvalidLine { line, reason });
                    }
                    ParseMode::Lenient => {
                        warn!(line, %reason, "skipping malformed point line");
                        skipped += 1;
                    }
                },
            }
        }
        if points.is_empty() {
            return Err(PointReaderError::EmptyInput);
        }
        debug!(points = points.len(), skipped, "points loaded");
        Ok(Self {
            name: name.into(),
            points,
            skipped,
        })
    }

    /// Returns the data source name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the points in file order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when the set holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns how many malformed lines lenient parsing dropped.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Consumes the set and returns its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}
