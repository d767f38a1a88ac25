use waypath_core::{Metric, Point, Weight};

/// Metric over points on a number line, used to drive the pipeline stages
/// through a caller-supplied [`Metric`].
#[derive(Clone)]
pub struct LineMetric {
    positions: Vec<Weight>,
}

impl LineMetric {
    #[must_use]
    pub fn new(positions: Vec<Weight>) -> Self {
        Self { positions }
    }
}

impl Metric for LineMetric {
    fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn distance(&self, left: usize, right: usize) -> Weight {
        self.positions[left].abs_diff(self.positions[right])
    }
}

#[must_use]
pub fn points(coordinates: &[(u32, u32)]) -> Vec<Point> {
    coordinates.iter().copied().map(Point::from).collect()
}
