//! # Random Number Generation
//!
//! Seeded random number generation for the efficiency simulation.
//!
//! - [`EfficiencyRng`]: seeded PRNG wrapper with uniform and normal draws
//! - [`SeedSequence`]: explicit seed counter threaded through a sweep
//!
//! ## Reproducibility
//!
//! Every point batch is filled from a freshly constructed [`EfficiencyRng`].
//! The seeds come from a [`SeedSequence`] owned by the caller, so a whole sweep
//! is reproducible from its initial seed and no generator state is shared
//! between evaluations.
//!
//! ```rust
//! use geoeff_kernel::rng::{EfficiencyRng, SeedSequence};
//!
//! let mut seeds = SeedSequence::new(15_763_027);
//! let mut rng = EfficiencyRng::from_seed(seeds.advance());
//!
//! let phi = rng.gen_uniform_range(0.0, std::f64::consts::TAU);
//! assert!((0.0..std::f64::consts::TAU).contains(&phi));
//! ```

mod prng;
mod seed;

pub use prng::EfficiencyRng;
pub use seed::{SeedSequence, SEED_STRIDE};
