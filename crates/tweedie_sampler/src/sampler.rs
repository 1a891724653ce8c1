//! Compound Poisson-Gamma Tweedie sampler.
//!
//! A draw proceeds in two stages:
//! ```text
//! N ~ Poisson(lambda)
//! X = 0                                 if N = 0
//! X = sum_{i=1..N} Gamma(kappa, theta)  otherwise
//! ```
//! The point mass at zero, `P(X = 0) = exp(-lambda)`, comes from the first
//! branch.

use rand::Rng;
use rand_distr::{Distribution, Gamma, Poisson};

use crate::config::{GammaSummation, SamplerConfig};
use crate::error::TweedieError;
use crate::params::{PoissonGammaParams, TweedieParams};

/// Sampler for a fixed set of Tweedie parameters.
///
/// Construction validates the parameters and derives the Poisson and Gamma
/// distributions once; [`draw`](Self::draw) then only consumes entropy.
///
/// # Examples
///
/// ```rust
/// use tweedie_sampler::rng::SamplerRng;
/// use tweedie_sampler::{SamplerConfig, TweedieParams, TweedieSampler};
///
/// let params = TweedieParams::new(10.0, 1.3, 50.0).unwrap();
/// let sampler = TweedieSampler::new(params, &SamplerConfig::default()).unwrap();
///
/// let mut rng = SamplerRng::from_seed(12345);
/// let x = sampler.draw(&mut rng).unwrap();
/// assert!(x >= 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct TweedieSampler {
    params: TweedieParams,
    derived: PoissonGammaParams,
    /// `None` when the Poisson mean underflowed to zero.
    claim_count: Option<Poisson<f64>>,
    claim_size: Gamma<f64>,
    summation: GammaSummation,
    max_events: u64,
}

impl TweedieSampler {
    /// Creates a sampler for `params` using the strategy in `config`.
    ///
    /// # Errors
    ///
    /// Returns `NumericalInstability` when the derived Poisson mean or Gamma
    /// parameters are not usable, and `InvalidConfig` for an invalid config.
    pub fn new(params: TweedieParams, config: &SamplerConfig) -> Result<Self, TweedieError> {
        config.validate()?;
        let derived = params.poisson_gamma()?;
        let claim_count = if derived.lambda() > 0.0 {
            Some(Poisson::new(derived.lambda())?)
        } else {
            None
        };
        let claim_size = Gamma::new(derived.kappa(), derived.theta())?;

        tracing::debug!(
            mu = params.mu(),
            p = params.p(),
            phi = params.phi(),
            lambda = derived.lambda(),
            kappa = derived.kappa(),
            theta = derived.theta(),
            summation = ?config.summation(),
            "constructed Tweedie sampler"
        );

        Ok(Self {
            params,
            derived,
            claim_count,
            claim_size,
            summation: config.summation(),
            max_events: config.max_events(),
        })
    }

    /// Returns the Tweedie parameters.
    #[inline]
    pub fn params(&self) -> &TweedieParams {
        &self.params
    }

    /// Returns the derived Poisson-Gamma parameters.
    #[inline]
    pub fn poisson_gamma(&self) -> &PoissonGammaParams {
        &self.derived
    }

    /// Returns the claim aggregation strategy.
    #[inline]
    pub fn summation(&self) -> GammaSummation {
        self.summation
    }

    /// Draws one non-negative sample.
    ///
    /// # Errors
    ///
    /// Returns `NumericalInstability` if the aggregate Gamma shape for the
    /// drawn claim count cannot be represented.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, TweedieError> {
        let Some(claim_count) = &self.claim_count else {
            return Ok(0.0);
        };
        let claims: f64 = claim_count.sample(rng);
        tracing::trace!(claims, "drew claim count");

        if claims == 0.0 {
            return Ok(0.0);
        }

        match self.summation {
            GammaSummation::PerEvent if claims <= self.max_events as f64 => {
                Ok((0..claims as u64).map(|_| self.claim_size.sample(rng)).sum())
            }
            GammaSummation::PerEvent => {
                tracing::debug!(
                    claims,
                    max_events = self.max_events,
                    "claim count above per-event cap, using additive draw"
                );
                self.draw_aggregate(claims, rng)
            }
            GammaSummation::Additive => self.draw_aggregate(claims, rng),
        }
    }

    fn draw_aggregate<R: Rng + ?Sized>(&self, claims: f64, rng: &mut R) -> Result<f64, TweedieError> {
        let total = Gamma::new(claims * self.derived.kappa(), self.derived.theta())?;
        Ok(total.sample(rng))
    }
}

/// Draws one sample from the Tweedie distribution with mean `mu`, power `p`
/// and dispersion `phi`.
///
/// Uses the additive Gamma draw. Build a [`TweedieSampler`] instead when
/// drawing repeatedly with the same parameters.
///
/// # Errors
///
/// - `InvalidPowerParameter` if `p` is not strictly between 1 and 2
/// - `InvalidMeanOrDispersion` if `mu` or `phi` is not finite and positive
/// - `NumericalInstability` if the derived parameters overflow
///
/// # Examples
///
/// ```rust
/// use tweedie_sampler::rng::SamplerRng;
/// use tweedie_sampler::{sample, TweedieError};
///
/// let mut rng = SamplerRng::from_seed(12345);
/// assert!(sample(&mut rng, 10.0, 1.3, 50.0).unwrap() >= 0.0);
///
/// assert!(matches!(
///     sample(&mut rng, 10.0, 2.0, 50.0),
///     Err(TweedieError::InvalidPowerParameter { .. })
/// ));
/// ```
pub fn sample<R: Rng + ?Sized>(rng: &mut R, mu: f64, p: f64, phi: f64) -> Result<f64, TweedieError> {
    let result = TweedieParams::new(mu, p, phi)
        .and_then(|params| TweedieSampler::new(params, &SamplerConfig::default()))
        .and_then(|sampler| sampler.draw(rng));

    if let Err(err) = &result {
        if err.is_parameter_error() {
            tracing::warn!(mu, p, phi, error = %err, "rejected Tweedie parameters");
        } else {
            tracing::error!(mu, p, phi, error = %err, "Tweedie draw failed");
        }
    }
    result
}
