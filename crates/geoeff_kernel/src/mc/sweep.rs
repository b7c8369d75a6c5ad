//! Distance sweeps.
//!
//! The [`SweepDriver`] evaluates the efficiency over an evenly spaced set of
//! distances and pairs every Monte Carlo estimate with the closed-form
//! point-source approximation.
//!
//! # Seeds
//!
//! The driver owns a [`SeedSequence`] started at the configured seed and
//! draws one seed per distance. For an annular detector the outer and inner
//! boundary evaluations at a distance reuse that seed. In
//! [`ExecutionMode::Parallel`] the seeds are drawn up front, so both modes
//! produce the same numbers.

use rayon::prelude::*;
use tracing::info;

use super::config::{ExecutionMode, SweepConfig};
use super::estimator::{combine_annular, evaluate, EfficiencyEstimate, HEMISPHERE_PERCENT};
use crate::error::{GeoEffError, Result};
use crate::geometry::{DetectorShape, SourceProfile};
use crate::rng::SeedSequence;

/// Evenly spaced values from `min` to `max`, both ends included.
///
/// # Errors
///
/// [`GeoEffError::InvalidConfiguration`] if `n_points < 2`.
///
/// ```rust
/// use geoeff_kernel::mc::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5).unwrap(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert!(linspace(0.0, 1.0, 1).is_err());
/// ```
pub fn linspace(min: f64, max: f64, n_points: usize) -> Result<Vec<f64>> {
    if n_points < 2 {
        return Err(GeoEffError::invalid(
            "n_points",
            format!("must be at least 2, got {n_points}"),
        ));
    }
    let delta = (max - min) / (n_points - 1) as f64;
    Ok((0..n_points).map(|i| min + delta * i as f64).collect())
}

/// Closed-form efficiency in percent of a point source on the detector axis.
///
/// `ps(z) = 50 − 50 z / sqrt(1 + z²)`: 50 at contact, falling monotonically
/// to zero with distance.
#[inline]
pub fn point_source_efficiency(z: f64) -> f64 {
    HEMISPHERE_PERCENT - HEMISPHERE_PERCENT * z / (1.0 + z * z).sqrt()
}

/// Point-source approximation for every distance in `z`.
pub fn point_source_approximation(z: &[f64]) -> Vec<f64> {
    z.iter().map(|&z| point_source_efficiency(z)).collect()
}

/// Efficiency of a detector shape at one distance.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DetectorEstimate {
    /// Efficiency in percent.
    pub efficiency_percent: f64,
    /// Relative uncertainty in percent.
    pub relative_error_percent: f64,
    /// Estimate for the outer (full) disc.
    pub outer: EfficiencyEstimate,
    /// Estimate for the inner disc of an annular detector.
    pub inner: Option<EfficiencyEstimate>,
}

/// Evaluates a detector shape at distance `z`.
///
/// A circular detector is a single [`evaluate`] call. An annular detector is
/// the outer disc at `(z, source)` minus the inner disc. Measured in inner
/// radii the inner disc sees the source at `(z / ratio, source / ratio)`;
/// both evaluations use `seed`, so every inner hit is also an outer hit.
pub fn evaluate_detector(
    z: f64,
    source: SourceProfile,
    detector: DetectorShape,
    n_samples: usize,
    seed: u64,
) -> Result<DetectorEstimate> {
    let outer = evaluate(z, source, n_samples, seed)?;

    match detector {
        DetectorShape::Circular => Ok(DetectorEstimate {
            efficiency_percent: outer.efficiency_percent,
            relative_error_percent: outer.relative_error_percent,
            outer,
            inner: None,
        }),
        DetectorShape::Annular { .. } => {
            let scale = detector.inner_scale();
            let inner = evaluate(z * scale, source.scaled(scale), n_samples, seed)?;
            let (efficiency_percent, relative_error_percent) = combine_annular(&outer, &inner);
            Ok(DetectorEstimate {
                efficiency_percent,
                relative_error_percent,
                outer,
                inner: Some(inner),
            })
        }
    }
}

/// One distance of a sweep with its results.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DistanceSweepPoint {
    /// Distance in detector radii.
    pub z: f64,
    /// Distance divided by the last distance of the sweep.
    pub normalised_z: f64,
    /// Monte Carlo efficiency in percent.
    pub efficiency_percent: f64,
    /// Relative uncertainty in percent.
    pub relative_error_percent: f64,
    /// Point-source approximation in percent.
    pub point_source_percent: f64,
    /// Seed used at this distance.
    pub seed: u64,
    /// Raw estimate(s) behind the efficiency.
    pub estimate: DetectorEstimate,
}

/// Result of a distance sweep.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepResult {
    /// Points in order of increasing distance.
    pub points: Vec<DistanceSweepPoint>,
    /// Point-source approximation, parallel to `points`.
    pub point_source: Vec<f64>,
}

impl SweepResult {
    /// Number of distances.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the sweep holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distances of the sweep.
    pub fn distances(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.z).collect()
    }

    /// Monte Carlo efficiencies in percent.
    pub fn efficiencies(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.efficiency_percent).collect()
    }

    /// Relative uncertainties in percent.
    pub fn relative_errors(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.relative_error_percent).collect()
    }
}

/// Distance sweep driver.
///
/// # Examples
///
/// ```rust
/// use geoeff_kernel::mc::{SweepConfig, SweepDriver};
///
/// let config = SweepConfig::builder()
///     .z_range(0.0, 5.0)
///     .n_points(6)
///     .sample_power(3)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let result = SweepDriver::new(config).unwrap().run().unwrap();
/// assert_eq!(result.len(), 6);
/// assert_eq!(result.point_source[0], 50.0);
/// ```
pub struct SweepDriver {
    config: SweepConfig,
}

impl SweepDriver {
    /// Creates a driver for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeoEffError::InvalidConfiguration`] if the configuration is
    /// invalid.
    pub fn new(config: SweepConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Runs the sweep.
    pub fn run(&self) -> Result<SweepResult> {
        self.run_with_progress(|_, _| {})
    }

    /// Runs the sweep, calling `progress` with the index and result of every
    /// distance in order.
    ///
    /// In parallel mode the callbacks fire after all distances are done.
    pub fn run_with_progress<F>(&self, mut progress: F) -> Result<SweepResult>
    where
        F: FnMut(usize, &DistanceSweepPoint),
    {
        let config = &self.config;
        let distances = linspace(config.z_min(), config.z_max(), config.n_points())?;
        let point_source = point_source_approximation(&distances);
        let z_last = distances.last().copied().unwrap_or_default();
        let n_samples = config.n_samples();

        info!(
            source = %config.source().kind(),
            source_size = config.source().size(),
            detector = %config.detector().kind(),
            n_points = config.n_points(),
            n_samples,
            seed = config.seed(),
            mode = ?config.mode(),
            "Starting efficiency sweep"
        );

        let seeds = SeedSequence::new(config.seed()).peek_many(distances.len());
        let evaluate_point = |i: usize| -> Result<DistanceSweepPoint> {
            let z = distances[i];
            let estimate = evaluate_detector(
                z,
                config.source(),
                config.detector(),
                n_samples,
                seeds[i],
            )?;
            Ok(DistanceSweepPoint {
                z,
                normalised_z: if z_last == 0.0 { z } else { z / z_last },
                efficiency_percent: estimate.efficiency_percent,
                relative_error_percent: estimate.relative_error_percent,
                point_source_percent: point_source[i],
                seed: seeds[i],
                estimate,
            })
        };

        let points = match config.mode() {
            ExecutionMode::Sequential => {
                let mut points = Vec::with_capacity(distances.len());
                for i in 0..distances.len() {
                    let point = evaluate_point(i)?;
                    progress(i, &point);
                    points.push(point);
                }
                points
            }
            ExecutionMode::Parallel => {
                let points = (0..distances.len())
                    .into_par_iter()
                    .map(evaluate_point)
                    .collect::<Result<Vec<_>>>()?;
                for (i, point) in points.iter().enumerate() {
                    progress(i, point);
                }
                points
            }
        };

        info!(n_points = points.len(), "Efficiency sweep complete");
        Ok(SweepResult {
            points,
            point_source,
        })
    }
}
