//! # Geometric Efficiency Kernel
//!
//! Monte Carlo estimation of the geometric detection efficiency of a disc
//! detector facing an isotropically emitting source.
//!
//! This crate provides:
//! - Seeded random sampling ([`rng`])
//! - Source and emission point generation and the hit test ([`geometry`])
//! - Single-distance estimation and distance sweeps ([`mc`])
//!
//! All lengths are expressed in units of the detector radius. Efficiencies
//! and their relative uncertainties are reported in percent.
//!
//! ## Logging
//!
//! The kernel emits `tracing` events but never installs a subscriber.

#![warn(missing_docs)]

pub mod error;
pub mod geometry;
pub mod mc;
pub mod rng;

pub use error::{GeoEffError, Result};
