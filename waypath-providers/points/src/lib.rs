//! Point set provider for line-oriented `label x y` files.

mod errors;
mod parse;
mod provider;

pub use errors::{LineError, PointReaderError};
pub use provider::{ParseMode, PointSet};

#[cfg(test)]
mod tests;
