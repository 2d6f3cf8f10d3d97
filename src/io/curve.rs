//! Read/write light-curve JSON files.
//!
//! A light-curve JSON is the portable form of an evaluated model:
//! - model kind + parameters
//! - generation timestamp
//! - the evaluated `(times, flux)` grid for quick plotting
//!
//! The schema is defined by `domain::LightCurveFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{CurveGrid, LightCurveFile, ModelKind, ModelParameters};
use crate::error::AppError;

pub const TOOL_NAME: &str = "lce";

/// Assemble a light-curve file for an evaluated grid.
pub fn light_curve_file(
    model: ModelKind,
    params: ModelParameters,
    times: &[f64],
    flux: &[f64],
) -> LightCurveFile {
    LightCurveFile {
        tool: TOOL_NAME.to_string(),
        generated_at: Utc::now(),
        model,
        params,
        grid: CurveGrid {
            times: times.to_vec(),
            flux: flux.to_vec(),
        },
    }
}

/// Write a light-curve JSON file.
pub fn write_curve_json(path: &Path, curve: &LightCurveFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::output(format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, curve)
        .map_err(|e| AppError::output(format!("Failed to write curve JSON: {e}")))?;

    Ok(())
}

/// Read a light-curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<LightCurveFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::filesystem(format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let curve: LightCurveFile =
        serde_json::from_reader(file).map_err(|e| AppError::parse(format!("Invalid curve JSON: {e}")))?;

    if curve.grid.times.len() != curve.grid.flux.len() {
        return Err(AppError::parse(format!(
            "Invalid curve JSON: {} times but {} flux values.",
            curve.grid.times.len(),
            curve.grid.flux.len()
        )));
    }
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::model_b_lightcurve;

    #[test]
    fn curve_json_survives_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("curve.json");
        let params = ModelParameters::new(2.0, 3.0).unwrap();
        let times = [-3.0, 0.0, 3.0];
        let flux = model_b_lightcurve(&times, &params);

        write_curve_json(&path, &light_curve_file(ModelKind::B, params, &times, &flux)).unwrap();
        let back = read_curve_json(&path).unwrap();

        assert_eq!(back.model, ModelKind::B);
        assert_eq!(back.params, params);
        assert_eq!(back.grid.flux, vec![1.0, 2.0, 1.0]);
    }

    #[test]
    fn mismatched_grid_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.json");
        let json = r#"{
            "tool": "lce",
            "generated_at": "2025-01-01T00:00:00Z",
            "model": "A",
            "params": {"amplitude": 1.0, "duration": 1.0},
            "grid": {"times": [0.0, 1.0], "flux": [1.0]}
        }"#;
        std::fs::write(&path, json).unwrap();
        let err = read_curve_json(&path).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Parse);
    }
}
