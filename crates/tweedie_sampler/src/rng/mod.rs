//! # Random Number Generation
//!
//! Seeded generator used to drive Tweedie sampling.
//!
//! The sampler itself accepts any `rand::Rng`, so callers are free to bring
//! their own generator. [`SamplerRng`] is the convenience choice: it records
//! the seed it was initialised with so that a run can be reproduced later.
//!
//! ## Usage Example
//!
//! ```rust
//! use tweedie_sampler::rng::SamplerRng;
//! use tweedie_sampler::sample;
//!
//! let mut rng = SamplerRng::from_seed(12345);
//! let x = sample(&mut rng, 10.0, 1.3, 50.0).unwrap();
//! assert!(x >= 0.0);
//! ```

mod prng;

pub use prng::SamplerRng;

#[cfg(test)]
mod tests;
