//! Sampler configuration.
//!
//! This module provides the summation strategy and the configuration builder
//! used to construct [`TweedieSampler`](crate::TweedieSampler) instances.

use crate::error::TweedieError;
use crate::rng::SamplerRng;

/// Default cap on the claim count summed one claim at a time.
pub const DEFAULT_MAX_EVENTS: u64 = 10_000_000;

/// How the Gamma claims of one draw are aggregated.
///
/// Both strategies produce the same distribution: the sum of `N` independent
/// `Gamma(kappa, theta)` claims is `Gamma(N * kappa, theta)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GammaSummation {
    /// One `Gamma(N * kappa, theta)` draw per sample.
    #[default]
    Additive,

    /// `N` separate `Gamma(kappa, theta)` draws, summed.
    ///
    /// Cost grows linearly with the claim count.
    PerEvent,
}

/// Tweedie sampler configuration.
///
/// Use [`SamplerConfigBuilder`] to construct validated instances.
///
/// # Examples
///
/// ```rust
/// use tweedie_sampler::{GammaSummation, SamplerConfig};
///
/// let config = SamplerConfig::builder()
///     .summation(GammaSummation::PerEvent)
///     .seed(12345)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.summation(), GammaSummation::PerEvent);
/// assert_eq!(config.seed(), Some(12345));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplerConfig {
    /// Claim aggregation strategy.
    summation: GammaSummation,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Largest claim count drawn one claim at a time.
    max_events: u64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            summation: GammaSummation::default(),
            seed: None,
            max_events: DEFAULT_MAX_EVENTS,
        }
    }
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Returns the claim aggregation strategy.
    #[inline]
    pub fn summation(&self) -> GammaSummation {
        self.summation
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the per-event summation cap.
    #[inline]
    pub fn max_events(&self) -> u64 {
        self.max_events
    }

    /// Creates the generator described by this configuration.
    ///
    /// Seeded when [`seed`](Self::seed) is set, entropy-seeded otherwise.
    pub fn rng(&self) -> SamplerRng {
        match self.seed {
            Some(seed) => SamplerRng::from_seed(seed),
            None => SamplerRng::from_entropy(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `max_events` is 0.
    pub fn validate(&self) -> Result<(), TweedieError> {
        if self.max_events == 0 {
            return Err(TweedieError::InvalidConfig {
                name: "max_events",
                value: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Parses and validates a configuration from TOML.
    ///
    /// Missing fields take their default values.
    ///
    /// ```rust
    /// use tweedie_sampler::{GammaSummation, SamplerConfig};
    ///
    /// let config = SamplerConfig::from_toml_str("summation = \"per_event\"\nseed = 7").unwrap();
    /// assert_eq!(config.summation(), GammaSummation::PerEvent);
    /// assert_eq!(config.seed(), Some(7));
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(input: &str) -> Result<Self, TweedieError> {
        let config: SamplerConfig =
            toml::from_str(input).map_err(|e| TweedieError::InvalidConfig {
                name: "toml",
                value: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }
}

/// Builder for [`SamplerConfig`].
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    summation: GammaSummation,
    seed: Option<u64>,
    max_events: Option<u64>,
}

impl SamplerConfigBuilder {
    /// Sets the claim aggregation strategy.
    #[inline]
    pub fn summation(mut self, summation: GammaSummation) -> Self {
        self.summation = summation;
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the per-event summation cap.
    ///
    /// # Arguments
    ///
    /// * `max_events` - Largest claim count summed one claim at a time (>= 1)
    #[inline]
    pub fn max_events(mut self, max_events: u64) -> Self {
        self.max_events = Some(max_events);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `max_events` is 0.
    pub fn build(self) -> Result<SamplerConfig, TweedieError> {
        let config = SamplerConfig {
            summation: self.summation,
            seed: self.seed,
            max_events: self.max_events.unwrap_or(DEFAULT_MAX_EVENTS),
        };

        config.validate()?;
        Ok(config)
    }
}
