//! Planar integer points.

/// A vertex of the complete graph, identified elsewhere by its input index.
///
/// # Examples
/// ```
/// use waypath_core::Point;
///
/// let point = Point::new(3, 4);
/// assert_eq!((point.x(), point.y()), (3, 4));
/// assert_eq!(Point::from((3, 4)), point);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Point {
    x: u32,
    y: u32,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Returns the horizontal coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn x(&self) -> u32 { self.x }

    /// Returns the vertical coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn y(&self) -> u32 { self.y }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}
