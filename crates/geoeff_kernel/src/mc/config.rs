//! Distance sweep configuration.
//!
//! This module provides the immutable [`SweepConfig`] and its builder. All
//! validation happens once, in [`SweepConfigBuilder::build`]; the estimator
//! and sweep driver trust the values they receive.

use crate::error::{GeoEffError, Result};
use crate::geometry::{DetectorShape, SourceProfile};

/// Seed used when none is supplied.
pub const DEFAULT_SEED: u64 = 15_763_027;

/// Largest accepted sample-count exponent (10^8 samples per evaluation).
///
/// One evaluation holds two point batches of `2 × 10^power` f64 values,
/// about 3.2 GB at the cap.
pub const MAX_SAMPLE_POWER: u32 = 8;

/// Largest accepted sample-count exponent in [`ExecutionMode::Parallel`].
///
/// Every rayon worker runs its own evaluation, so peak memory is about
/// 320 MB per worker at this cap.
pub const MAX_PARALLEL_SAMPLE_POWER: u32 = 7;

/// How the distance points of a sweep are evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// One distance after another on the calling thread.
    #[default]
    Sequential,
    /// Distances mapped over the rayon thread pool.
    ///
    /// Seeds are assigned before dispatch, so results are identical to
    /// [`Sequential`](Self::Sequential). Memory grows with the number of
    /// workers, so the sample power is capped at
    /// [`MAX_PARALLEL_SAMPLE_POWER`].
    Parallel,
}

/// Distance sweep configuration.
///
/// Use [`SweepConfig::builder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use geoeff_kernel::geometry::{DetectorShape, SourceProfile};
/// use geoeff_kernel::mc::SweepConfig;
///
/// let config = SweepConfig::builder()
///     .z_range(0.0, 5.0)
///     .n_points(6)
///     .source(SourceProfile::Uniform { radius: 0.5 })
///     .detector(DetectorShape::Annular { ratio: 0.3 })
///     .sample_power(4)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_samples(), 10_000);
/// assert_eq!(config.n_points(), 6);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SweepConfig {
    z_min: f64,
    z_max: f64,
    n_points: usize,
    source: SourceProfile,
    detector: DetectorShape,
    sample_power: u32,
    seed: u64,
    mode: ExecutionMode,
}

impl SweepConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SweepConfigBuilder {
        SweepConfigBuilder::default()
    }

    /// Smallest source-to-detector distance, in detector radii.
    #[inline]
    pub fn z_min(&self) -> f64 {
        self.z_min
    }

    /// Largest source-to-detector distance, in detector radii.
    #[inline]
    pub fn z_max(&self) -> f64 {
        self.z_max
    }

    /// Number of distances in the sweep.
    #[inline]
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Source profile.
    #[inline]
    pub fn source(&self) -> SourceProfile {
        self.source
    }

    /// Detector shape.
    #[inline]
    pub fn detector(&self) -> DetectorShape {
        self.detector
    }

    /// Sample-count exponent.
    #[inline]
    pub fn sample_power(&self) -> u32 {
        self.sample_power
    }

    /// Samples per evaluation, `10^sample_power`.
    #[inline]
    pub fn n_samples(&self) -> usize {
        10usize.pow(self.sample_power)
    }

    /// Initial seed of the sweep.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Execution mode.
    #[inline]
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeoEffError::InvalidConfiguration`] if:
    /// - `n_points` is below 2
    /// - either distance is not finite
    /// - the source size is negative or not finite
    /// - an annular ratio lies outside (0, 1]
    /// - `sample_power` exceeds [`MAX_SAMPLE_POWER`], or
    ///   [`MAX_PARALLEL_SAMPLE_POWER`] in parallel mode
    pub fn validate(&self) -> Result<()> {
        if self.n_points < 2 {
            return Err(GeoEffError::invalid(
                "n_points",
                format!("must be at least 2, got {}", self.n_points),
            ));
        }
        for (name, z) in [("z_min", self.z_min), ("z_max", self.z_max)] {
            if !z.is_finite() {
                return Err(GeoEffError::invalid(name, format!("must be finite, got {z}")));
            }
        }
        let max_power = match self.mode {
            ExecutionMode::Sequential => MAX_SAMPLE_POWER,
            ExecutionMode::Parallel => MAX_PARALLEL_SAMPLE_POWER,
        };
        if self.sample_power > max_power {
            return Err(GeoEffError::invalid(
                "sample_power",
                format!(
                    "must be at most {max_power} in {:?} mode, got {}",
                    self.mode, self.sample_power
                ),
            ));
        }
        self.source.validate()?;
        self.detector.validate()?;
        Ok(())
    }
}

/// Builder for [`SweepConfig`].
///
/// The distance range, point count and sample power are required. The source
/// defaults to a point source, the detector to [`DetectorShape::Circular`] and
/// the seed to [`DEFAULT_SEED`].
#[derive(Clone, Debug, Default)]
pub struct SweepConfigBuilder {
    z_range: Option<(f64, f64)>,
    n_points: Option<usize>,
    source: Option<SourceProfile>,
    detector: DetectorShape,
    sample_power: Option<u32>,
    seed: Option<u64>,
    mode: ExecutionMode,
}

impl SweepConfigBuilder {
    /// Sets the inclusive distance range.
    #[inline]
    pub fn z_range(mut self, z_min: f64, z_max: f64) -> Self {
        self.z_range = Some((z_min, z_max));
        self
    }

    /// Sets the number of distances.
    #[inline]
    pub fn n_points(mut self, n_points: usize) -> Self {
        self.n_points = Some(n_points);
        self
    }

    /// Sets the source profile.
    #[inline]
    pub fn source(mut self, source: SourceProfile) -> Self {
        self.source = Some(source);
        self
    }

    /// Sets the detector shape.
    #[inline]
    pub fn detector(mut self, detector: DetectorShape) -> Self {
        self.detector = detector;
        self
    }

    /// Sets the sample-count exponent.
    #[inline]
    pub fn sample_power(mut self, sample_power: u32) -> Self {
        self.sample_power = Some(sample_power);
        self
    }

    /// Sets the initial seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the execution mode.
    #[inline]
    pub fn mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeoEffError::InvalidConfiguration`] if a required field is
    /// missing or [`SweepConfig::validate`] fails.
    pub fn build(self) -> Result<SweepConfig> {
        let (z_min, z_max) = self
            .z_range
            .ok_or_else(|| GeoEffError::invalid("z_range", "must be specified"))?;
        let n_points = self
            .n_points
            .ok_or_else(|| GeoEffError::invalid("n_points", "must be specified"))?;
        let sample_power = self
            .sample_power
            .ok_or_else(|| GeoEffError::invalid("sample_power", "must be specified"))?;

        let config = SweepConfig {
            z_min,
            z_max,
            n_points,
            source: self.source.unwrap_or(SourceProfile::POINT),
            detector: self.detector,
            sample_power,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            mode: self.mode,
        };

        config.validate()?;
        Ok(config)
    }
}
