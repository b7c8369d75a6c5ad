//! Point generators for source positions and emission offsets.
//!
//! Each generator fills an already sized [`PointBatch`] in place from a fresh
//! [`EfficiencyRng`] seeded with the supplied seed. Every point consumes one
//! azimuth draw followed by one radial draw, in that order, so a batch is
//! fully determined by its length, its parameter and the seed.
//!
//! # Emission Model
//!
//! [`generate_isotropic`] samples directions uniformly over the full sphere
//! (θ = acos(1 − 2u)) and extrapolates them to a plane at distance `z`.
//! Directions pointing away from the detector also land in the plane because
//! tan θ changes sign, so exactly half of the solid angle is double counted.
//! The estimator corrects for this with a factor of one half.

use std::f64::consts::TAU;

use super::batch::PointBatch;
use super::profile::SourceProfile;
use crate::rng::EfficiencyRng;

/// Fills `batch` with isotropic emission offsets projected to distance `z`.
///
/// For each point: φ ~ U(0, 2π), u ~ U(0, 1), θ = acos(1 − 2u), giving
/// `(z tanθ cosφ, z tanθ sinφ)`.
pub fn generate_isotropic(batch: &mut PointBatch, z: f64, seed: u64) {
    let mut rng = EfficiencyRng::from_seed(seed);
    let (xs, ys) = batch.coords_mut();

    for (x, y) in xs.iter_mut().zip(ys.iter_mut()) {
        let phi = rng.gen_uniform_range(0.0, TAU);
        let theta = (1.0 - 2.0 * rng.gen_uniform()).acos();
        let reach = z * theta.tan();
        *x = reach * phi.cos();
        *y = reach * phi.sin();
    }
}

/// Fills `batch` with points uniformly distributed over a disc of radius `r`.
///
/// The radial coordinate is `r sqrt(u)`, which makes the density uniform in
/// area rather than in radius.
pub fn generate_circular(batch: &mut PointBatch, r: f64, seed: u64) {
    let mut rng = EfficiencyRng::from_seed(seed);
    let (xs, ys) = batch.coords_mut();

    for (x, y) in xs.iter_mut().zip(ys.iter_mut()) {
        let phi = rng.gen_uniform_range(0.0, TAU);
        let rho = r * rng.gen_uniform().sqrt();
        *x = rho * phi.cos();
        *y = rho * phi.sin();
    }
}

/// Fills `batch` with points of a Gaussian radial profile.
///
/// The radial offset is a signed draw from N(0, sigma). A negative draw puts
/// the point on the opposite side of the same azimuth. This is a radial
/// falloff, not a bivariate normal: the areal density near the centre is
/// higher than for independent normal x and y.
pub fn generate_gaussian(batch: &mut PointBatch, sigma: f64, seed: u64) {
    let mut rng = EfficiencyRng::from_seed(seed);
    let (xs, ys) = batch.coords_mut();

    for (x, y) in xs.iter_mut().zip(ys.iter_mut()) {
        let phi = rng.gen_uniform_range(0.0, TAU);
        let r = rng.gen_normal_scaled(0.0, sigma);
        *x = r * phi.cos();
        *y = r * phi.sin();
    }
}

/// Fills `batch` with source positions for the given profile.
pub fn generate_source(batch: &mut PointBatch, profile: SourceProfile, seed: u64) {
    match profile {
        SourceProfile::Uniform { radius } => generate_circular(batch, radius, seed),
        SourceProfile::Gaussian { sigma } => generate_gaussian(batch, sigma, seed),
    }
}
