//! Model evaluation for light-curve models A and B.
//!
//! Both models share the signature `fn(&[f64], &ModelParameters) -> Vec<f64>`
//! and are elementwise in the scaled time `x = t / duration`:
//!
//! - A: `amplitude * exp(-x^2)`
//! - B: `amplitude / (1 + x^2)`
//!
//! Nothing here validates parameters. A zero duration yields NaN at `t = 0`;
//! use `ModelParameters::new` or `ensure_finite` to catch that.

use rayon::prelude::*;

use crate::domain::{ModelKind, ModelParameters};
use crate::error::AppError;
use crate::math::{gaussian, lorentzian_denom, scaled_time};

/// Shared signature of the light-curve models.
pub type LightCurveFn = fn(&[f64], &ModelParameters) -> Vec<f64>;

/// Model A: Gaussian-like peak centred on `t = 0`.
pub fn model_a_lightcurve(times: &[f64], params: &ModelParameters) -> Vec<f64> {
    times
        .iter()
        .map(|&t| predict(ModelKind::A, t, params))
        .collect()
}

/// Model B: Lorentzian-like peak centred on `t = 0`.
pub fn model_b_lightcurve(times: &[f64], params: &ModelParameters) -> Vec<f64> {
    times
        .iter()
        .map(|&t| predict(ModelKind::B, t, params))
        .collect()
}

/// Model function for the given kind.
pub fn lightcurve_fn(model: ModelKind) -> LightCurveFn {
    match model {
        ModelKind::A => model_a_lightcurve,
        ModelKind::B => model_b_lightcurve,
    }
}

/// Predict the flux at a single time `t`.
pub fn predict(model: ModelKind, t: f64, params: &ModelParameters) -> f64 {
    let x = scaled_time(t, params.duration);
    match model {
        ModelKind::A => params.amplitude * gaussian(x),
        ModelKind::B => params.amplitude / lorentzian_denom(x),
    }
}

/// Evaluate `model` over `times`.
pub fn evaluate(model: ModelKind, times: &[f64], params: &ModelParameters) -> Vec<f64> {
    lightcurve_fn(model)(times, params)
}

/// Same values as [`evaluate`], computed on rayon's global pool.
pub fn evaluate_par(model: ModelKind, times: &[f64], params: &ModelParameters) -> Vec<f64> {
    times
        .par_iter()
        .map(|&t| predict(model, t, params))
        .collect()
}

/// Fail with a numeric error if any value is NaN or infinite.
pub fn ensure_finite(times: &[f64], values: &[f64]) -> Result<(), AppError> {
    match values.iter().position(|v| !v.is_finite()) {
        None => Ok(()),
        Some(i) => {
            let t = times.get(i).copied().unwrap_or(f64::NAN);
            Err(AppError::numeric(format!(
                "Non-finite model value {} at t={t} (index {i}); check that duration is non-zero.",
                values[i]
            )))
        }
    }
}
