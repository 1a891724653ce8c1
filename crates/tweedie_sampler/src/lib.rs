//! # Tweedie Sampler
//!
//! Random variate generation for the Tweedie distribution in the compound
//! Poisson-Gamma regime (power parameter `1 < p < 2`).
//!
//! A Tweedie variate with mean `mu`, power `p` and dispersion `phi` is a
//! Poisson-distributed number of independent Gamma-distributed claims. The
//! distribution has a point mass at zero (no claims) and a right-skewed
//! positive part, which makes it a common model for insurance claim amounts.
//!
//! ## Module Structure
//!
//! - [`error`]: `TweedieError`
//! - [`params`]: validated parameters and the Poisson-Gamma transformation
//! - [`config`]: summation strategy and sampler configuration
//! - [`rng`]: seeded generator wrapper
//! - [`sampler`]: `TweedieSampler` and the one-shot [`sample`] function
//!
//! ## Usage Example
//!
//! ```rust
//! use tweedie_sampler::rng::SamplerRng;
//! use tweedie_sampler::sample;
//!
//! let mut rng = SamplerRng::from_seed(12345);
//! let draws: Vec<f64> = (0..10)
//!     .map(|_| sample(&mut rng, 10.0, 1.3, 50.0).unwrap())
//!     .collect();
//!
//! assert!(draws.iter().all(|&x| x >= 0.0));
//! ```
//!
//! ## Logging
//!
//! Sampler construction and parameter rejection are reported through
//! `tracing`. The library never installs a subscriber.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod params;
pub mod rng;
pub mod sampler;

pub use config::{GammaSummation, SamplerConfig, SamplerConfigBuilder, DEFAULT_MAX_EVENTS};
pub use error::TweedieError;
pub use params::{PoissonGammaParams, TweedieParams, MAX_LAMBDA};
pub use sampler::{sample, TweedieSampler};
