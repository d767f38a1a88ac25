pub(crate) use super::{LineError, ParseMode, PointReaderError, PointSet};
