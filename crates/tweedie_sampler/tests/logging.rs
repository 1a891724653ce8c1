//! Sampling with a tracing subscriber installed.

use tracing_subscriber::EnvFilter;
use tweedie_sampler::rng::SamplerRng;
use tweedie_sampler::{sample, TweedieError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("tweedie_sampler=trace"))
        .with_test_writer()
        .try_init();
}

#[test]
fn test_sampling_with_trace_subscriber() {
    init_tracing();
    let mut rng = SamplerRng::from_seed(12345);

    for _ in 0..10 {
        assert!(sample(&mut rng, 10.0, 1.3, 50.0).unwrap() >= 0.0);
    }
    assert!(matches!(
        sample(&mut rng, 10.0, 1.0, 50.0),
        Err(TweedieError::InvalidPowerParameter { .. })
    ));
    assert!(matches!(
        sample(&mut rng, 1e25, 1.01, 1.0),
        Err(TweedieError::NumericalInstability { .. })
    ));
}
