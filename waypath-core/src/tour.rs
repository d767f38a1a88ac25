//! Closed Hamiltonian tours and the shortcutting step that produces them.

use tracing::{debug, instrument};

use crate::{
    distance::{Metric, Weight},
    error::{Result, TourError},
};

/// A closed tour: starts and ends at vertex 0 and visits every other vertex
/// exactly once in between.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tour {
    vertices: Vec<usize>,
    cost: Weight,
}

impl Tour {
    pub(crate) const fn new(vertices: Vec<usize>, cost: Weight) -> Self {
        Self { vertices, cost }
    }

    /// Returns the visiting order, including the closing return to 0.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[usize] { &self.vertices }

    /// Returns the summed length of every hop, closing hop included.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cost(&self) -> Weight { self.cost }

    /// Returns the number of entries in [`Self::vertices`], which is one
    /// more than the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` when the tour has no vertices. Tours built by this
    /// crate are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` when the tour is a closed cycle starting at 0 that
    /// visits each of `0..vertex_count` exactly once.
    #[must_use]
    pub fn is_hamiltonian(&self, vertex_count: usize) -> bool {
        if self.vertices.len() != vertex_count + 1
            || self.vertices.first() != Some(&0)
            || self.vertices.last() != Some(&0)
        {
            return false;
        }
        let mut seen = vec![false; vertex_count];
        for &vertex in &self.vertices[..vertex_count] {
            match seen.get_mut(vertex) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    /// Consumes the tour and returns its vertex sequence.
    #[must_use]
    pub fn into_vertices(self) -> Vec<usize> {
        self.vertices
    }
}

/// Shortcuts a closed walk into a [`Tour`].
///
/// Keeps the first occurrence of each vertex, sums the distances between
/// consecutively kept vertices and closes the cycle back to the walk's first
/// vertex.
///
/// # Errors
/// Returns [`TourError::InvariantViolation`] when the walk is empty, does
/// not start at vertex 0, names a vertex outside the metric, or misses a
/// vertex.
///
/// # Examples
/// ```
/// use waypath_core::{DistanceMatrix, Point, finalize_tour};
///
/// let matrix = DistanceMatrix::from_points(&[
///     Point::new(0, 0),
///     Point::new(0, 1),
///     Point::new(1, 0),
///     Point::new(1, 1),
/// ]);
/// let tour = finalize_tour(&[0, 1, 0, 2, 3, 0], &matrix)?;
/// assert_eq!(tour.vertices(), &[0, 1, 2, 3, 0]);
/// assert_eq!(tour.cost(), 4);
/// # Ok::<(), waypath_core::TourError>(())
/// ```
#[instrument(
    name = "core.finalize",
    err,
    skip(walk, metric),
    fields(walk_len = walk.len(), vertices = metric.vertex_count()),
)]
pub fn finalize_tour<M: Metric + ?Sized>(walk: &[usize], metric: &M) -> Result<Tour> {
    let vertex_count = metric.vertex_count();
    let Some(&start) = walk.first() else {
        return Err(TourError::invariant("walk must not be empty"));
    };
    if start != 0 {
        return Err(TourError::invariant("walk must start at vertex 0"));
    }

    let mut visited = vec![false; vertex_count];
    let mut vertices = Vec::with_capacity(vertex_count + 1);
    let mut cost: Weight = 0;
    for &vertex in walk {
        let Some(seen) = visited.get_mut(vertex) else {
            return Err(TourError::invariant("walk vertex must exist in the metric"));
        };
        if *seen {
            continue;
        }
        *seen = true;
        if let Some(&previous) = vertices.last() {
            cost = cost.saturating_add(metric.distance(previous, vertex));
        }
        vertices.push(vertex);
    }

    if vertices.len() != vertex_count {
        return Err(TourError::invariant("walk must visit every vertex"));
    }
    if let Some(&last) = vertices.last() {
        cost = cost.saturating_add(metric.distance(last, start));
    }
    vertices.push(start);

    debug!(cost, "tour finalized");
    Ok(Tour::new(vertices, cost))
}
