//! Evaluation pipeline behind `lce eval`.
//!
//! grid -> model evaluation (parallel for large grids) -> finiteness check

use tracing::debug;

use crate::domain::EvalConfig;
use crate::error::AppError;
use crate::math::time_grid;
use crate::models::{ensure_finite, evaluate, evaluate_par};

/// Grids at least this long are evaluated on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 50_000;

/// All computed outputs of a single `lce eval` run.
#[derive(Debug, Clone)]
pub struct EvalOutput {
    pub times: Vec<f64>,
    pub flux: Vec<f64>,
}

/// Build the grid, evaluate the model and reject non-finite output.
pub fn run_eval(config: &EvalConfig) -> Result<EvalOutput, AppError> {
    config.params.validate()?;
    let times = time_grid(&config.grid)?;

    let parallel = times.len() >= PARALLEL_THRESHOLD;
    debug!(model = %config.model, n = times.len(), parallel, "evaluating light curve");

    let flux = if parallel {
        evaluate_par(config.model, &times, &config.params)
    } else {
        evaluate(config.model, &times, &config.params)
    };
    ensure_finite(&times, &flux)?;

    Ok(EvalOutput { times, flux })
}
