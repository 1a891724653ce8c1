//! Error types for Tweedie sampling.
//!
//! This module provides:
//! - `TweedieError`: parameter, numerical and configuration failures

use thiserror::Error;

/// Tweedie sampling errors.
///
/// Every failure is a distinct variant so that a rejected call can never be
/// mistaken for a legitimate zero-valued sample.
///
/// # Variants
/// - `InvalidPowerParameter`: power `p` outside the open interval (1, 2)
/// - `InvalidMeanOrDispersion`: `mu` or `phi` not finite and positive
/// - `NumericalInstability`: derived Poisson/Gamma parameters are unusable
/// - `InvalidConfig`: sampler configuration rejected at build time
///
/// # Examples
/// ```
/// use tweedie_sampler::TweedieError;
///
/// let err = TweedieError::InvalidPowerParameter { p: 2.0 };
/// assert!(format!("{}", err).contains("p = 2"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TweedieError {
    /// Power parameter not strictly between 1 and 2.
    #[error("Invalid power parameter: p = {p}, must lie in the open interval (1, 2)")]
    InvalidPowerParameter {
        /// The rejected power parameter
        p: f64,
    },

    /// Mean or dispersion not finite and strictly positive.
    #[error("Invalid mean or dispersion: mu = {mu}, phi = {phi}, both must be finite and positive")]
    InvalidMeanOrDispersion {
        /// The supplied mean
        mu: f64,
        /// The supplied dispersion
        phi: f64,
    },

    /// Derived parameters overflowed or were rejected by the distribution.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },

    /// Invalid sampler configuration.
    #[error("Invalid configuration '{name}': {value}")]
    InvalidConfig {
        /// Configuration field name
        name: &'static str,
        /// Description of the invalid value
        value: String,
    },
}

impl TweedieError {
    /// Returns true for errors caused by the `(mu, p, phi)` arguments.
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            TweedieError::InvalidPowerParameter { .. }
                | TweedieError::InvalidMeanOrDispersion { .. }
        )
    }
}

impl From<rand_distr::PoissonError> for TweedieError {
    fn from(err: rand_distr::PoissonError) -> Self {
        TweedieError::NumericalInstability {
            message: format!("Poisson rejected derived mean: {}", err),
        }
    }
}

impl From<rand_distr::GammaError> for TweedieError {
    fn from(err: rand_distr::GammaError) -> Self {
        TweedieError::NumericalInstability {
            message: format!("Gamma rejected derived parameters: {}", err),
        }
    }
}
