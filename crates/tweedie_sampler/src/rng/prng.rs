//! Seeded pseudo-random number generator wrapper.

use rand::rngs::StdRng;
use rand::{Error, RngCore, SeedableRng};

/// Random number generator for Tweedie sampling.
///
/// Wraps `StdRng` and remembers its seed. Implements `RngCore`, so it can be
/// passed anywhere a `rand::Rng` is expected.
///
/// # Examples
///
/// ```rust
/// use rand::Rng;
/// use tweedie_sampler::rng::SamplerRng;
///
/// let mut rng1 = SamplerRng::from_seed(42);
/// let mut rng2 = SamplerRng::from_seed(42);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.gen::<u64>(), rng2.gen::<u64>());
/// assert_eq!(rng1.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct SamplerRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation, `None` when seeded from entropy.
    seed: Option<u64>,
}

impl SamplerRng {
    /// Creates a generator initialised with the given seed.
    ///
    /// The same seed always produces the same sequence of samples.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a generator seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Returns the seed used for initialisation, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RngCore for SamplerRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.inner.try_fill_bytes(dest)
    }
}
