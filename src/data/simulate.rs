//! Synthetic light-curve observations.
//!
//! Observation times are drawn uniformly from `[t_min, t_max]` and sorted; each
//! flux is the model value plus Gaussian noise with standard deviation
//! `noise_sigma`. The RNG is seeded so a config always yields the same sample.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{SimulationConfig, validate_time_window};
use crate::error::AppError;
use crate::models::evaluate;

#[derive(Debug, Clone)]
pub struct SimulatedObservations {
    pub times: Vec<f64>,
    /// Noisy flux.
    pub flux: Vec<f64>,
    /// Noise-free model flux at the same times.
    pub truth: Vec<f64>,
}

pub fn simulate(config: &SimulationConfig) -> Result<SimulatedObservations, AppError> {
    config.params.validate()?;
    if config.count == 0 {
        return Err(AppError::parameter("Observation count must be > 0."));
    }
    validate_time_window(config.t_min, config.t_max)?;
    if !(config.noise_sigma.is_finite() && config.noise_sigma >= 0.0) {
        return Err(AppError::parameter("Noise sigma must be finite and >= 0."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::numeric(format!("Noise distribution error: {e}")))?;

    let mut times: Vec<f64> = (0..config.count)
        .map(|_| rng.gen_range(config.t_min..=config.t_max))
        .collect();
    times.sort_by(f64::total_cmp);

    let truth = evaluate(config.model, &times, &config.params);
    let flux = truth
        .iter()
        .map(|&y| y + config.noise_sigma * normal.sample(&mut rng))
        .collect();

    Ok(SimulatedObservations { times, flux, truth })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ModelKind, ModelParameters};

    fn config(seed: u64, noise_sigma: f64) -> SimulationConfig {
        SimulationConfig {
            model: ModelKind::A,
            params: ModelParameters { amplitude: 10.0, duration: 50.0 },
            t_min: -200.0,
            t_max: 200.0,
            count: 64,
            noise_sigma,
            seed,
        }
    }

    #[test]
    fn same_seed_same_sample() {
        let a = simulate(&config(7, 0.5)).unwrap();
        let b = simulate(&config(7, 0.5)).unwrap();
        assert_eq!(a.times, b.times);
        assert_eq!(a.flux, b.flux);

        let c = simulate(&config(8, 0.5)).unwrap();
        assert_ne!(a.times, c.times);
    }

    #[test]
    fn times_sorted_within_range() {
        let obs = simulate(&config(1, 0.1)).unwrap();
        assert_eq!(obs.times.len(), 64);
        assert!(obs.times.windows(2).all(|w| w[0] <= w[1]));
        assert!(obs.times.iter().all(|t| (-200.0..=200.0).contains(t)));
    }

    #[test]
    fn zero_noise_reproduces_model() {
        let obs = simulate(&config(3, 0.0)).unwrap();
        assert_eq!(obs.flux, obs.truth);
    }

    #[test]
    fn invalid_settings_rejected() {
        let mut bad = config(1, 0.1);
        bad.count = 0;
        assert!(simulate(&bad).is_err());

        let mut bad = config(1, -1.0);
        bad.noise_sigma = -1.0;
        assert!(simulate(&bad).is_err());

        let mut bad = config(1, 0.1);
        bad.params.duration = 0.0;
        assert!(simulate(&bad).is_err());
    }

    #[test]
    fn huge_window_is_parameter_error() {
        let mut wide = config(1, 0.1);
        wide.t_min = -1e308;
        wide.t_max = 1e308;
        let err = simulate(&wide).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Parameter);
    }
}
