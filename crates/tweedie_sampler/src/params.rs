//! Tweedie parameters and their compound Poisson-Gamma representation.
//!
//! For a power parameter `1 < p < 2` a Tweedie variate with mean `mu` and
//! dispersion `phi` is the sum of `N ~ Poisson(lambda)` independent
//! `Gamma(kappa, theta)` claims, where:
//! ```text
//! lambda = mu^(2-p) / (phi * (2-p))
//! kappa  = (2-p) / (p-1)
//! theta  = phi * (p-1) * mu^(p-1)
//! ```

use crate::error::TweedieError;

/// Largest Poisson mean whose claim counts fit in a `u64`.
pub const MAX_LAMBDA: f64 = u64::MAX as f64;

/// Validated Tweedie parameters in the compound Poisson-Gamma regime.
///
/// # Examples
/// ```
/// use tweedie_sampler::TweedieParams;
///
/// let params = TweedieParams::new(10.0, 1.3, 50.0).unwrap();
/// assert_eq!(params.mean(), 10.0);
/// assert!(TweedieParams::new(10.0, 2.0, 50.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweedieParams {
    mu: f64,
    p: f64,
    phi: f64,
}

impl TweedieParams {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// - `InvalidPowerParameter` if `p` is not strictly between 1 and 2
    ///   (NaN included)
    /// - `InvalidMeanOrDispersion` if `mu` or `phi` is not finite and positive
    pub fn new(mu: f64, p: f64, phi: f64) -> Result<Self, TweedieError> {
        // Negated comparison so NaN is rejected too.
        if !(p > 1.0 && p < 2.0) {
            return Err(TweedieError::InvalidPowerParameter { p });
        }
        if !(mu.is_finite() && mu > 0.0 && phi.is_finite() && phi > 0.0) {
            return Err(TweedieError::InvalidMeanOrDispersion { mu, phi });
        }
        Ok(Self { mu, p, phi })
    }

    /// Returns the mean `mu`.
    #[inline]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Returns the power parameter `p`.
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Returns the dispersion `phi`.
    #[inline]
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Distribution mean, equal to `mu`.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mu
    }

    /// Distribution variance, `phi * mu^p`.
    #[inline]
    pub fn variance(&self) -> f64 {
        self.phi * self.mu.powf(self.p)
    }

    /// Probability of an exact zero draw, `exp(-lambda)`.
    pub fn zero_probability(&self) -> f64 {
        (-self.poisson_mean()).exp()
    }

    fn poisson_mean(&self) -> f64 {
        let two_minus_p = 2.0 - self.p;
        self.mu.powf(two_minus_p) / (self.phi * two_minus_p)
    }

    /// Derives the Poisson count mean and the Gamma claim shape and scale.
    ///
    /// A Poisson mean that underflows to exactly zero is accepted: every
    /// draw is then zero.
    ///
    /// # Errors
    ///
    /// Returns `NumericalInstability` when the Poisson mean is not finite or
    /// exceeds [`MAX_LAMBDA`], or when the claim shape or scale is not finite
    /// and positive. This happens for extreme `mu`/`phi` combinations or for
    /// `p` so close to 1 that the claim shape overflows.
    pub fn poisson_gamma(&self) -> Result<PoissonGammaParams, TweedieError> {
        let lambda = self.poisson_mean();
        let kappa = (2.0 - self.p) / (self.p - 1.0);
        let theta = self.phi * (self.p - 1.0) * self.mu.powf(self.p - 1.0);

        if !(lambda >= 0.0 && lambda <= MAX_LAMBDA) {
            return Err(self.instability("lambda", lambda));
        }
        for (name, value) in [("kappa", kappa), ("theta", theta)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(self.instability(name, value));
            }
        }

        Ok(PoissonGammaParams {
            lambda,
            kappa,
            theta,
        })
    }

    fn instability(&self, name: &str, value: f64) -> TweedieError {
        TweedieError::NumericalInstability {
            message: format!(
                "derived {} = {} for mu = {}, p = {}, phi = {}",
                name, value, self.mu, self.p, self.phi
            ),
        }
    }
}

/// Compound Poisson-Gamma parameters derived from [`TweedieParams`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoissonGammaParams {
    lambda: f64,
    kappa: f64,
    theta: f64,
}

impl PoissonGammaParams {
    /// Mean of the Poisson claim count.
    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Shape of each Gamma claim.
    #[inline]
    pub fn kappa(&self) -> f64 {
        self.kappa
    }

    /// Scale of each Gamma claim.
    #[inline]
    pub fn theta(&self) -> f64 {
        self.theta
    }
}
