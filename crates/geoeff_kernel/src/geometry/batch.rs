//! Point batches and the detector hit test.
//!
//! A [`PointBatch`] holds N points in the detector plane as two parallel
//! coordinate buffers. Batches are sized once, filled by a generator,
//! translated by an emission batch and then reduced to a hit count.
//!
//! # Memory Layout
//!
//! - `x`: N x-coordinates
//! - `y`: N y-coordinates
//!
//! Both buffers always have the same length.

use crate::error::{GeoEffError, Result};

/// Squared radius of the detector in normalised units.
pub const DETECTOR_RADIUS_SQ: f64 = 1.0;

/// Batch of 2D points in the detector plane.
///
/// # Examples
///
/// ```rust
/// use geoeff_kernel::geometry::PointBatch;
///
/// let mut batch = PointBatch::new(3);
/// batch.translate(&[0.5, 1.0, 0.0], &[0.5, 0.5, -1.5]).unwrap();
///
/// assert_eq!(batch.squared_radii(), vec![0.5, 1.25, 2.25]);
/// assert_eq!(batch.count_hits(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PointBatch {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl PointBatch {
    /// Creates a batch of `n` points at the origin.
    pub fn new(n: usize) -> Self {
        Self {
            x: vec![0.0; n],
            y: vec![0.0; n],
        }
    }

    /// Number of points in the batch.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns `true` if the batch holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// x-coordinates.
    #[inline]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// y-coordinates.
    #[inline]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Mutable access to both coordinate buffers at once.
    #[inline]
    pub(crate) fn coords_mut(&mut self) -> (&mut [f64], &mut [f64]) {
        (&mut self.x, &mut self.y)
    }

    /// Adds per-point offsets in place.
    ///
    /// # Errors
    ///
    /// Returns [`GeoEffError::SizeMismatch`] if either offset slice differs in
    /// length from the batch. The batch is left untouched in that case.
    pub fn translate(&mut self, dx: &[f64], dy: &[f64]) -> Result<()> {
        let expected = self.len();
        for actual in [dx.len(), dy.len()] {
            if actual != expected {
                return Err(GeoEffError::SizeMismatch { expected, actual });
            }
        }

        for (x, d) in self.x.iter_mut().zip(dx) {
            *x += d;
        }
        for (y, d) in self.y.iter_mut().zip(dy) {
            *y += d;
        }
        Ok(())
    }

    /// Translates this batch by every point of `offsets`.
    pub fn translate_by(&mut self, offsets: &PointBatch) -> Result<()> {
        self.translate(&offsets.x, &offsets.y)
    }

    /// Squared distance from the detector centre for each point.
    pub fn squared_radii(&self) -> Vec<f64> {
        self.x
            .iter()
            .zip(&self.y)
            .map(|(x, y)| x * x + y * y)
            .collect()
    }

    /// Number of points that land on the unit detector disc.
    pub fn count_hits(&self) -> usize {
        self.x
            .iter()
            .zip(&self.y)
            .filter(|&(x, y)| is_hit(x * x + y * y))
            .count()
    }
}

/// Hit test against the unit detector disc; the rim counts as a hit.
#[inline]
pub fn is_hit(squared_radius: f64) -> bool {
    squared_radius <= DETECTOR_RADIUS_SQ
}
