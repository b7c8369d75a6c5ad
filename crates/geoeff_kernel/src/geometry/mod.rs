//! Detector-plane geometry.
//!
//! - [`PointBatch`]: parallel x/y buffers with translation and the hit test
//! - [`generators`]: source and emission point generators
//! - [`SourceProfile`] / [`DetectorShape`]: tagged source and detector variants
//!
//! All lengths are in units of the (outer) detector radius, so the detector
//! is always the unit disc centred at the origin.

mod batch;
pub mod generators;
mod profile;

pub use batch::{is_hit, PointBatch, DETECTOR_RADIUS_SQ};
pub use generators::{generate_circular, generate_gaussian, generate_isotropic, generate_source};
pub use profile::{DetectorKind, DetectorShape, SourceKind, SourceProfile};
