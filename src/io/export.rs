//! Export light curves to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts:
//! one row per time stamp, plus the noise-free model value for simulations.

use std::path::Path;

use serde::Serialize;

use crate::data::SimulatedObservations;
use crate::domain::ModelKind;
use crate::error::AppError;

#[derive(Debug, Serialize)]
struct CurveRow {
    model: &'static str,
    time_s: f64,
    flux: f64,
}

#[derive(Debug, Serialize)]
struct ObservationRow {
    model: &'static str,
    time_s: f64,
    flux_obs: f64,
    flux_true: f64,
}

/// Write an evaluated light curve to a CSV file.
pub fn write_curve_csv(path: &Path, model: ModelKind, times: &[f64], flux: &[f64]) -> Result<(), AppError> {
    if times.len() != flux.len() {
        return Err(AppError::output(format!(
            "Cannot export {} times with {} flux values.",
            times.len(),
            flux.len()
        )));
    }

    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::output(format!("Failed to create export CSV '{}': {e}", path.display())))?;

    for (&time_s, &flux) in times.iter().zip(flux) {
        writer
            .serialize(CurveRow { model: model.label(), time_s, flux })
            .map_err(|e| AppError::output(format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::output(format!("Failed to flush export CSV: {e}")))
}

/// Write simulated observations (observed + true flux) to a CSV file.
pub fn write_observations_csv(path: &Path, model: ModelKind, obs: &SimulatedObservations) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::output(format!("Failed to create export CSV '{}': {e}", path.display())))?;

    for i in 0..obs.times.len() {
        writer
            .serialize(ObservationRow {
                model: model.label(),
                time_s: obs.times[i],
                flux_obs: obs.flux[i],
                flux_true: obs.truth[i],
            })
            .map_err(|e| AppError::output(format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::output(format!("Failed to flush export CSV: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_csv_has_header_and_rows() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("curve.csv");
        write_curve_csv(&path, ModelKind::A, &[0.0, 1.5], &[2.0, 0.5]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["model,time_s,flux", "A,0.0,2.0", "A,1.5,0.5"]);
    }

    #[test]
    fn length_mismatch_is_output_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = write_curve_csv(&tmp.path().join("x.csv"), ModelKind::B, &[0.0], &[]).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Output);
    }
}
