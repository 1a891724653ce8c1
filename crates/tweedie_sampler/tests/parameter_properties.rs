//! Property-based tests for parameter validation and sample support.

use proptest::prelude::*;
use tweedie_sampler::rng::SamplerRng;
use tweedie_sampler::{sample, TweedieError, TweedieParams};

fn valid_power() -> impl Strategy<Value = f64> {
    1.01f64..1.99f64
}

fn invalid_power() -> impl Strategy<Value = f64> {
    prop_oneof![-10.0f64..=1.0f64, 2.0f64..10.0f64, Just(1.0), Just(2.0)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_sample_non_negative(
        mu in 0.01f64..1000.0f64,
        p in valid_power(),
        phi in 0.01f64..100.0f64,
        seed in any::<u64>(),
    ) {
        let mut rng = SamplerRng::from_seed(seed);
        let x = sample(&mut rng, mu, p, phi).unwrap();
        prop_assert!(x >= 0.0, "sample {} is negative", x);
        prop_assert!(x.is_finite());
    }

    #[test]
    fn test_invalid_power_always_rejected(
        mu in 0.01f64..1000.0f64,
        p in invalid_power(),
        phi in 0.01f64..100.0f64,
    ) {
        let mut rng = SamplerRng::from_seed(0);
        let result = sample(&mut rng, mu, p, phi);
        prop_assert_eq!(result, Err(TweedieError::InvalidPowerParameter { p }));
    }

    #[test]
    fn test_non_positive_mean_rejected(
        mu in -1000.0f64..=0.0f64,
        p in valid_power(),
        phi in 0.01f64..100.0f64,
    ) {
        let result = TweedieParams::new(mu, p, phi);
        let is_mean_error = matches!(result, Err(TweedieError::InvalidMeanOrDispersion { .. }));
        prop_assert!(is_mean_error);
    }

    #[test]
    fn test_zero_probability_decreases_with_mean(
        mu in 0.01f64..100.0f64,
        p in valid_power(),
        phi in 0.01f64..100.0f64,
    ) {
        let smaller = TweedieParams::new(mu, p, phi).unwrap();
        let larger = TweedieParams::new(mu * 2.0, p, phi).unwrap();
        prop_assert!(larger.zero_probability() <= smaller.zero_probability());
    }
}
