//! Error types for point line parsing and point file reading.

use std::io;

use thiserror::Error;

/// Reasons a single point line is rejected.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum LineError {
    /// The line has fewer than three tokens.
    #[error("missing {field} field")]
    MissingField {
        /// Name of the first absent field.
        field: &'static str,
    },
    /// A coordinate contains something other than ASCII digits.
    #[error("{field} coordinate `{value}` is not a non-negative integer")]
    NotAnInteger {
        /// Coordinate column.
        field: &'static str,
        /// Token as read.
        value: String,
    },
    /// A coordinate does not fit in 32 bits.
    #[error("{field} coordinate `{value}` exceeds {max}", max = u32::MAX)]
    OutOfRange {
        /// Coordinate column.
        field: &'static str,
        /// Token as read.
        value: String,
    },
    /// The line is not valid UTF-8.
    #[error("line is not valid UTF-8 after byte {valid_up_to}")]
    InvalidEncoding {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },
    /// The line carries tokens after the `y` coordinate.
    #[error("unexpected trailing token `{token}`")]
    TrailingToken {
        /// First surplus token.
        token: String,
    },
}

/// Errors raised while reading a point file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PointReaderError {
    /// Reading from the underlying source failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// A line could not be parsed in strict mode.
    #[error("line {line}: {reason}")]
    InvalidLine {
        /// 1-based line number.
        line: usize,
        /// Why the line was rejected.
        #[source]
        reason: LineError,
    },
    /// The source held no points.
    #[error("input contains no points")]
    EmptyInput,
}
