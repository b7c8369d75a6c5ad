//! Monte Carlo efficiency estimation.
//!
//! # Architecture
//!
//! ```text
//! SweepDriver
//! ├── SweepConfig        (validated once at build time)
//! ├── SeedSequence       (one seed per distance)
//! └── evaluate_detector()
//!     ├── evaluate()     (outer disc)
//!     ├── evaluate()     (inner disc in inner radii, annular only)
//!     └── combine_annular()
//! ```
//!
//! Each [`evaluate`] call builds two fresh [`PointBatch`](crate::geometry::PointBatch)es,
//! fills them from the source and emission generators, translates one by the
//! other and counts points on the unit disc. Nothing outlives the call.
//!
//! # Examples
//!
//! ```rust
//! use geoeff_kernel::geometry::{DetectorShape, SourceKind};
//! use geoeff_kernel::mc::{SweepConfig, SweepDriver};
//!
//! let config = SweepConfig::builder()
//!     .z_range(0.5, 3.0)
//!     .n_points(6)
//!     .source(SourceKind::Gaussian.with_size(0.2))
//!     .detector(DetectorShape::Annular { ratio: 0.25 })
//!     .sample_power(4)
//!     .build()
//!     .unwrap();
//!
//! let result = SweepDriver::new(config).unwrap().run().unwrap();
//! for point in &result.points {
//!     println!(
//!         "{:.2}\t{:.4}\t{:.4}",
//!         point.normalised_z, point.efficiency_percent, point.relative_error_percent
//!     );
//! }
//! ```

pub mod config;
pub mod estimator;
pub mod sweep;

pub use config::{
    ExecutionMode, SweepConfig, SweepConfigBuilder, DEFAULT_SEED, MAX_PARALLEL_SAMPLE_POWER,
    MAX_SAMPLE_POWER,
};
pub use estimator::{
    combine_annular, efficiency_percent, evaluate, relative_error_percent, EfficiencyEstimate,
    HEMISPHERE_PERCENT,
};
pub use sweep::{
    evaluate_detector, linspace, point_source_approximation, point_source_efficiency,
    DetectorEstimate, DistanceSweepPoint, SweepDriver, SweepResult,
};
