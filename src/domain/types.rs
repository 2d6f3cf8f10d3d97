//! Shared domain types.
//!
//! These types are kept small and serializable so they can be:
//!
//! - passed straight into the model functions
//! - exported to JSON/CSV
//! - reloaded later for plotting

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Which closed-form light-curve profile to evaluate.
///
/// The label (`"A"` / `"B"`) is also the suffix of the results directory
/// `event<ID>_<label>/` used by the evidence lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum ModelKind {
    /// Gaussian-like peak: `amplitude * exp(-x^2)`.
    #[default]
    #[serde(rename = "A")]
    #[value(name = "a", alias = "A")]
    A,
    /// Lorentzian-like peak: `amplitude / (1 + x^2)`.
    #[serde(rename = "B")]
    #[value(name = "b", alias = "B")]
    B,
}

impl ModelKind {
    pub const ALL: [ModelKind; 2] = [ModelKind::A, ModelKind::B];

    /// Directory label for this model.
    pub fn label(self) -> &'static str {
        match self {
            ModelKind::A => "A",
            ModelKind::B => "B",
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::A => "Model A (Gaussian)",
            ModelKind::B => "Model B (Lorentzian)",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parameters shared by both light-curve models.
///
/// `ModelParameters::new` validates; the fields stay public so callers that
/// want raw IEEE behaviour (e.g. `duration = 0` giving NaN at `t = 0`) can
/// still build a value directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Peak value at `t = 0`; scales the curve linearly.
    pub amplitude: f64,
    /// Width of the peak in seconds. Must be non-zero.
    pub duration: f64,
}

impl ModelParameters {
    pub const AMPLITUDE_KEY: &'static str = "amplitude";
    pub const DURATION_KEY: &'static str = "duration";

    pub fn new(amplitude: f64, duration: f64) -> Result<Self, AppError> {
        let params = Self { amplitude, duration };
        params.validate()?;
        Ok(params)
    }

    /// Build from a name → value mapping. Unknown keys are ignored.
    pub fn from_map(map: &HashMap<String, f64>) -> Result<Self, AppError> {
        let get = |key: &str| {
            map.get(key)
                .copied()
                .ok_or_else(|| AppError::parameter(format!("Missing model parameter '{key}'.")))
        };
        Self::new(get(Self::AMPLITUDE_KEY)?, get(Self::DURATION_KEY)?)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !self.amplitude.is_finite() {
            return Err(AppError::parameter(format!(
                "Invalid amplitude {}: must be finite.",
                self.amplitude
            )));
        }
        if !self.duration.is_finite() || self.duration == 0.0 {
            return Err(AppError::parameter(format!(
                "Invalid duration {}: must be finite and non-zero.",
                self.duration
            )));
        }
        Ok(())
    }
}

/// A saved light curve (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightCurveFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub model: ModelKind,
    pub params: ModelParameters,
    pub grid: CurveGrid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveGrid {
    pub times: Vec<f64>,
    pub flux: Vec<f64>,
}

/// Time grid settings for evaluating a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub t_min: f64,
    pub t_max: f64,
    pub steps: usize,
}

impl GridSpec {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_time_window(self.t_min, self.t_max)?;
        if self.steps < 2 {
            return Err(AppError::parameter("Time grid needs at least 2 steps."));
        }
        Ok(())
    }
}

/// Largest accepted span `t_max - t_min`. Uniform sampling divides the span by a
/// factor just below 1, so the span keeps a factor-of-two headroom below `f64::MAX`.
pub const MAX_TIME_SPAN: f64 = f64::MAX / 2.0;

/// Require a finite, non-empty window whose span `t_max - t_min` is finite too.
pub fn validate_time_window(t_min: f64, t_max: f64) -> Result<(), AppError> {
    if !(t_min.is_finite() && t_max.is_finite() && t_max > t_min) {
        return Err(AppError::parameter(format!("Invalid time range [{t_min}, {t_max}].")));
    }
    let span = t_max - t_min;
    if !(span.is_finite() && span <= MAX_TIME_SPAN) {
        return Err(AppError::parameter(format!(
            "Time range [{t_min}, {t_max}] is too wide: its span overflows."
        )));
    }
    Ok(())
}

/// Configuration for `lce eval`.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    pub model: ModelKind,
    pub params: ModelParameters,
    pub grid: GridSpec,
}

/// Configuration for synthetic observations.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub model: ModelKind,
    pub params: ModelParameters,
    pub t_min: f64,
    pub t_max: f64,
    pub count: usize,
    /// Standard deviation of the additive Gaussian noise (flux units).
    pub noise_sigma: f64,
    pub seed: u64,
}
