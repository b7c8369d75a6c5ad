//! Efficiency estimation at a single distance.
//!
//! # Overview
//!
//! [`evaluate`] coordinates one Monte Carlo estimate:
//! 1. Source positions from the [`SourceProfile`] (seed `s`)
//! 2. Isotropic emission offsets at distance `z` (seed `s + 1`)
//! 3. Translation, hit test against the unit disc, aggregation
//!
//! The isotropic generator covers the full sphere, so the hit fraction is
//! halved: `efficiency_percent = 50 · hits / N`.
//!
//! # Uncertainty
//!
//! The relative error treats the hit count as Poisson distributed:
//! `relative_error_percent = 100 / sqrt(2 · N · efficiency_percent / 100)`,
//! i.e. `100 / sqrt(hits)`. Zero hits give `+∞`, which is reported as data.

use tracing::debug;

use crate::error::Result;
use crate::geometry::{generate_isotropic, generate_source, PointBatch, SourceProfile};

/// Percentage of emitted rays heading towards the detector plane.
pub const HEMISPHERE_PERCENT: f64 = 50.0;

/// Outcome of one efficiency evaluation.
///
/// # Examples
///
/// ```rust
/// use geoeff_kernel::mc::EfficiencyEstimate;
///
/// let estimate = EfficiencyEstimate::from_hits(2_500, 10_000);
/// assert_eq!(estimate.efficiency_percent, 12.5);
/// assert_eq!(estimate.relative_error_percent, 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EfficiencyEstimate {
    /// Geometric efficiency in percent.
    pub efficiency_percent: f64,
    /// Relative uncertainty of the efficiency in percent.
    pub relative_error_percent: f64,
    /// Points that landed on the detector.
    pub hits: usize,
    /// Points simulated.
    pub n_samples: usize,
}

impl EfficiencyEstimate {
    /// Builds the estimate from raw counts.
    ///
    /// `n_samples == 0` yields an efficiency of zero and an infinite relative
    /// error rather than NaN.
    pub fn from_hits(hits: usize, n_samples: usize) -> Self {
        let efficiency_percent = efficiency_percent(hits, n_samples);
        Self {
            efficiency_percent,
            relative_error_percent: relative_error_percent(efficiency_percent, n_samples),
            hits,
            n_samples,
        }
    }

    /// Absolute uncertainty of the efficiency in percentage points.
    ///
    /// Zero when there are no hits, since the efficiency itself is zero.
    pub fn absolute_error_percent(&self) -> f64 {
        if self.hits == 0 {
            0.0
        } else {
            self.efficiency_percent * self.relative_error_percent / 100.0
        }
    }
}

/// Hit percentage corrected to the detector-facing hemisphere.
#[inline]
pub fn efficiency_percent(hits: usize, n_samples: usize) -> f64 {
    if n_samples == 0 {
        return 0.0;
    }
    HEMISPHERE_PERCENT * hits as f64 / n_samples as f64
}

/// Relative uncertainty in percent of an efficiency measured with `n_samples`.
///
/// Returns `+∞` when the efficiency is zero.
#[inline]
pub fn relative_error_percent(efficiency_percent: f64, n_samples: usize) -> f64 {
    100.0 / (2.0 * n_samples as f64 * efficiency_percent / 100.0).sqrt()
}

/// Estimates the efficiency of the unit circular detector at distance `z`.
///
/// Uses `seed` for the source positions and `seed + 1` (wrapping) for the
/// emission directions. Identical arguments give bit-identical results.
///
/// # Errors
///
/// Only [`GeoEffError::SizeMismatch`](crate::GeoEffError::SizeMismatch),
/// which indicates a defect in batch wiring.
///
/// # Examples
///
/// ```rust
/// use geoeff_kernel::geometry::SourceProfile;
/// use geoeff_kernel::mc::evaluate;
///
/// let near = evaluate(0.0, SourceProfile::POINT, 10_000, 7).unwrap();
/// assert_eq!(near.efficiency_percent, 50.0);
/// ```
pub fn evaluate(
    z: f64,
    profile: SourceProfile,
    n_samples: usize,
    seed: u64,
) -> Result<EfficiencyEstimate> {
    let mut source = PointBatch::new(n_samples);
    generate_source(&mut source, profile, seed);

    let mut emission = PointBatch::new(n_samples);
    generate_isotropic(&mut emission, z, seed.wrapping_add(1));

    source.translate_by(&emission)?;
    let hits = source.count_hits();

    let estimate = EfficiencyEstimate::from_hits(hits, n_samples);
    debug!(
        z,
        seed,
        hits,
        n_samples,
        efficiency = estimate.efficiency_percent,
        "Evaluated efficiency"
    );
    Ok(estimate)
}

/// Combines the outer and inner circular estimates of an annular detector.
///
/// Returns `(efficiency_percent, relative_error_percent)` with
/// `efficiency = outer − inner` and the relative errors added in quadrature.
/// The quadrature mixes relative errors of two different base quantities, so
/// it is an approximation of the true uncertainty of the difference.
pub fn combine_annular(outer: &EfficiencyEstimate, inner: &EfficiencyEstimate) -> (f64, f64) {
    let efficiency = outer.efficiency_percent - inner.efficiency_percent;
    let relative_error = (outer.relative_error_percent * outer.relative_error_percent
        + inner.relative_error_percent * inner.relative_error_percent)
        .sqrt();
    (efficiency, relative_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_hits() {
        let estimate = EfficiencyEstimate::from_hits(100, 1000);
        assert_relative_eq!(estimate.efficiency_percent, 5.0);
        // 100 / sqrt(hits)
        assert_relative_eq!(estimate.relative_error_percent, 10.0, epsilon = 1e-12);
        assert_relative_eq!(estimate.absolute_error_percent(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_hits_infinite_error() {
        let estimate = EfficiencyEstimate::from_hits(0, 10_000);
        assert_eq!(estimate.efficiency_percent, 0.0);
        assert!(estimate.relative_error_percent.is_infinite());
        assert!(estimate.relative_error_percent > 0.0);
        assert_eq!(estimate.absolute_error_percent(), 0.0);
    }

    #[test]
    fn test_zero_samples() {
        let estimate = evaluate(1.0, SourceProfile::POINT, 0, 3).unwrap();
        assert_eq!(estimate.efficiency_percent, 0.0);
        assert_eq!(estimate.hits, 0);
        assert!(estimate.relative_error_percent.is_infinite());
        assert!(!estimate.relative_error_percent.is_nan());
    }

    #[test]
    fn test_far_away_detector_has_no_hits() {
        let estimate = evaluate(1e9, SourceProfile::POINT, 1000, 3).unwrap();
        assert_eq!(estimate.hits, 0);
        assert!(estimate.relative_error_percent.is_infinite());
    }

    #[test]
    fn test_determinism() {
        let profile = SourceProfile::Gaussian { sigma: 0.6 };
        let a = evaluate(1.3, profile, 5000, 99).unwrap();
        let b = evaluate(1.3, profile, 5000, 99).unwrap();

        assert_eq!(a, b);
        assert_eq!(
            a.efficiency_percent.to_bits(),
            b.efficiency_percent.to_bits()
        );
    }

    #[test]
    fn test_seed_changes_result() {
        let hits: Vec<usize> = (0..5)
            .map(|i| evaluate(1.0, SourceProfile::POINT, 5000, 1 + 2 * i).unwrap().hits)
            .collect();
        assert!(hits.windows(2).any(|w| w[0] != w[1]), "hits {hits:?}");
    }

    #[test]
    fn test_contact_distance_point_source() {
        let estimate = evaluate(0.0, SourceProfile::POINT, 1000, 5).unwrap();
        assert_eq!(estimate.hits, 1000);
        assert_eq!(estimate.efficiency_percent, HEMISPHERE_PERCENT);
    }

    #[test]
    fn test_combine_annular() {
        let outer = EfficiencyEstimate::from_hits(400, 1000);
        let inner = EfficiencyEstimate::from_hits(100, 1000);

        let (efficiency, relative_error) = combine_annular(&outer, &inner);
        assert_relative_eq!(efficiency, 15.0, epsilon = 1e-12);
        // sqrt(5² + 10²)
        assert_relative_eq!(relative_error, 125.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_combine_annular_zero_inner_hits() {
        let outer = EfficiencyEstimate::from_hits(400, 1000);
        let inner = EfficiencyEstimate::from_hits(0, 1000);

        let (efficiency, relative_error) = combine_annular(&outer, &inner);
        assert_eq!(efficiency, outer.efficiency_percent);
        assert!(relative_error.is_infinite());
    }
}
