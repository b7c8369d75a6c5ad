//! Source profiles and detector shapes.
//!
//! Selectors ([`SourceKind`], [`DetectorKind`]) are parsed from user input
//! and carry no parameters. Once the parameters are known they become the
//! tagged variants [`SourceProfile`] and [`DetectorShape`] that the estimator
//! works with.

use std::fmt;
use std::str::FromStr;

use crate::error::GeoEffError;

/// Source spatial profile selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SourceKind {
    /// Uniformly populated disc.
    Uniform,
    /// Gaussian radial falloff.
    Gaussian,
}

impl SourceKind {
    /// Builds the profile for a source of the given size.
    ///
    /// `size` is the disc radius for [`Uniform`](Self::Uniform) and the
    /// standard deviation for [`Gaussian`](Self::Gaussian), both in units of
    /// detector radius.
    pub fn with_size(self, size: f64) -> SourceProfile {
        match self {
            SourceKind::Uniform => SourceProfile::Uniform { radius: size },
            SourceKind::Gaussian => SourceProfile::Gaussian { sigma: size },
        }
    }

    /// Lowercase name as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Uniform => "uniform",
            SourceKind::Gaussian => "gaussian",
        }
    }
}

impl FromStr for SourceKind {
    type Err = GeoEffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uniform" => Ok(SourceKind::Uniform),
            "gaussian" => Ok(SourceKind::Gaussian),
            _ => Err(GeoEffError::invalid(
                "source_type",
                format!("'{s}' is not a valid source type, choose 'uniform' or 'gaussian'"),
            )),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source spatial profile with its size parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SourceProfile {
    /// Uniform disc of the given radius.
    Uniform {
        /// Disc radius in units of detector radius.
        radius: f64,
    },
    /// Gaussian radial profile with the given standard deviation.
    Gaussian {
        /// Standard deviation in units of detector radius.
        sigma: f64,
    },
}

impl SourceProfile {
    /// Point source (zero-radius uniform disc).
    pub const POINT: SourceProfile = SourceProfile::Uniform { radius: 0.0 };

    /// Parameterless selector for this profile.
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceProfile::Uniform { .. } => SourceKind::Uniform,
            SourceProfile::Gaussian { .. } => SourceKind::Gaussian,
        }
    }

    /// Radius or sigma, whichever this profile carries.
    pub fn size(&self) -> f64 {
        match *self {
            SourceProfile::Uniform { radius } => radius,
            SourceProfile::Gaussian { sigma } => sigma,
        }
    }

    /// Same profile with its size multiplied by `factor`.
    ///
    /// Used to express the source in units of the inner radius of an
    /// annular detector (see [`DetectorShape::inner_scale`]).
    pub fn scaled(&self, factor: f64) -> Self {
        self.kind().with_size(self.size() * factor)
    }

    pub(crate) fn validate(&self) -> Result<(), GeoEffError> {
        let size = self.size();
        if !size.is_finite() || size < 0.0 {
            return Err(GeoEffError::invalid(
                "source_size",
                format!("must be finite and non-negative, got {size}"),
            ));
        }
        Ok(())
    }
}

/// Detector shape selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DetectorKind {
    /// Full disc.
    Circular,
    /// Disc with an inactive concentric inner disc.
    Annular,
}

impl DetectorKind {
    /// Lowercase name as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectorKind::Circular => "circular",
            DetectorKind::Annular => "annular",
        }
    }
}

impl FromStr for DetectorKind {
    type Err = GeoEffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circular" => Ok(DetectorKind::Circular),
            "annular" => Ok(DetectorKind::Annular),
            _ => Err(GeoEffError::invalid(
                "detector_type",
                format!("'{s}' is not a valid detector type, choose 'circular' or 'annular'"),
            )),
        }
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detector shape, normalised to an outer radius of one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DetectorShape {
    /// Unit disc.
    #[default]
    Circular,
    /// Unit disc minus a concentric disc of radius `ratio`.
    Annular {
        /// Inner radius over outer radius, in (0, 1].
        ratio: f64,
    },
}

impl DetectorShape {
    /// Parameterless selector for this shape.
    pub fn kind(&self) -> DetectorKind {
        match self {
            DetectorShape::Circular => DetectorKind::Circular,
            DetectorShape::Annular { .. } => DetectorKind::Annular,
        }
    }

    /// Builds a shape from its selector and optional inner/outer ratio.
    ///
    /// # Errors
    ///
    /// An annular detector without a ratio, or with a ratio outside (0, 1].
    pub fn from_kind(kind: DetectorKind, ratio: Option<f64>) -> Result<Self, GeoEffError> {
        let shape = match kind {
            DetectorKind::Circular => DetectorShape::Circular,
            DetectorKind::Annular => DetectorShape::Annular {
                ratio: ratio.ok_or_else(|| {
                    GeoEffError::invalid("ratio", "required for an annular detector")
                })?,
            },
        };
        shape.validate()?;
        Ok(shape)
    }

    /// Factor converting lengths in outer radii to lengths in inner radii.
    ///
    /// `1 / ratio` for an annular detector, one for a circular detector.
    ///
    /// ```rust
    /// use geoeff_kernel::geometry::DetectorShape;
    ///
    /// assert_eq!(DetectorShape::Annular { ratio: 0.25 }.inner_scale(), 4.0);
    /// assert_eq!(DetectorShape::Circular.inner_scale(), 1.0);
    /// ```
    pub fn inner_scale(&self) -> f64 {
        match *self {
            DetectorShape::Circular => 1.0,
            DetectorShape::Annular { ratio } => 1.0 / ratio,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), GeoEffError> {
        if let DetectorShape::Annular { ratio } = *self {
            if !(ratio > 0.0 && ratio <= 1.0) {
                return Err(GeoEffError::invalid(
                    "ratio",
                    format!("inner/outer ratio must be in (0, 1], got {ratio}"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_from_str() {
        assert_eq!("uniform".parse::<SourceKind>(), Ok(SourceKind::Uniform));
        assert_eq!("Gaussian".parse::<SourceKind>(), Ok(SourceKind::Gaussian));
        assert_eq!(" uniform ".parse::<SourceKind>(), Ok(SourceKind::Uniform));

        let err = "circular".parse::<SourceKind>().unwrap_err();
        assert!(matches!(
            err,
            GeoEffError::InvalidConfiguration {
                name: "source_type",
                ..
            }
        ));
    }

    #[test]
    fn test_detector_kind_from_str() {
        assert_eq!("circular".parse::<DetectorKind>(), Ok(DetectorKind::Circular));
        assert_eq!("ANNULAR".parse::<DetectorKind>(), Ok(DetectorKind::Annular));
        assert!("square".parse::<DetectorKind>().is_err());
    }

    #[test]
    fn test_kind_display_round_trip() {
        for kind in [SourceKind::Uniform, SourceKind::Gaussian] {
            assert_eq!(kind.to_string().parse::<SourceKind>(), Ok(kind));
        }
        for kind in [DetectorKind::Circular, DetectorKind::Annular] {
            assert_eq!(kind.to_string().parse::<DetectorKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_profile_scaled() {
        let profile = SourceKind::Gaussian.with_size(0.8);
        assert_eq!(profile.scaled(0.5), SourceProfile::Gaussian { sigma: 0.4 });
        assert_eq!(SourceProfile::POINT.scaled(0.3), SourceProfile::POINT);
        assert_eq!(profile.kind(), SourceKind::Gaussian);
    }

    #[test]
    fn test_profile_validate() {
        assert!(SourceProfile::POINT.validate().is_ok());
        assert!(SourceProfile::Uniform { radius: -0.1 }.validate().is_err());
        assert!(SourceProfile::Gaussian { sigma: f64::NAN }.validate().is_err());
    }

    #[test]
    fn test_detector_from_kind() {
        assert_eq!(
            DetectorShape::from_kind(DetectorKind::Circular, None),
            Ok(DetectorShape::Circular)
        );
        assert_eq!(
            DetectorShape::from_kind(DetectorKind::Annular, Some(0.5)),
            Ok(DetectorShape::Annular { ratio: 0.5 })
        );
        assert!(DetectorShape::from_kind(DetectorKind::Annular, None).is_err());
        assert!(DetectorShape::from_kind(DetectorKind::Annular, Some(0.0)).is_err());
        assert!(DetectorShape::from_kind(DetectorKind::Annular, Some(1.5)).is_err());
        assert!(DetectorShape::from_kind(DetectorKind::Annular, Some(1.0)).is_ok());
    }
}
