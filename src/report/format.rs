//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the model/lookup code stays clean and testable
//! - output changes are localized (snapshot tests below)

use crate::data::SimulatedObservations;
use crate::domain::{ModelKind, ModelParameters};
use crate::evidence::EvidenceComparison;
use crate::report::{curve_stats, fwhm};

/// Max rows printed in a curve table before we start striding.
const MAX_TABLE_ROWS: usize = 21;

/// Format the summary of an evaluated model (parameters + curve stats).
pub fn format_eval_summary(model: ModelKind, params: &ModelParameters, times: &[f64], flux: &[f64]) -> String {
    let mut out = String::new();

    out.push_str("=== lce - light-curve model ===\n");
    out.push_str(&format!("Model: {}\n", model.display_name()));
    out.push_str(&format!(
        "Params: amplitude={} duration={}s | FWHM={:.4}s\n",
        params.amplitude,
        params.duration,
        fwhm(model, params)
    ));

    match (times.first(), times.last(), curve_stats(times, flux)) {
        (Some(t0), Some(t1), Some(stats)) => {
            out.push_str(&format!(
                "Grid: n={} | t=[{t0:.3}, {t1:.3}]s | flux=[{:.6}, {:.6}] | peak at t={:.3}s\n",
                stats.n, stats.flux_min, stats.flux_max, stats.peak_time
            ));
        }
        _ => out.push_str(&format!("Grid: n={} (no finite samples)\n", times.len())),
    }
    out.push('\n');

    out
}

/// Format a `time, flux` table, striding through long curves.
pub fn format_curve_table(times: &[f64], flux: &[f64]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>14} {:>16}\n", "time_s", "flux"));
    out.push_str(&format!("{:-<14} {:-<16}\n", "", ""));

    let n = times.len().min(flux.len());
    let stride = n.div_ceil(MAX_TABLE_ROWS).max(1);
    for i in (0..n).step_by(stride) {
        out.push_str(&format!("{:>14.3} {:>16.6}\n", times[i], flux[i]));
    }
    // Always show the last sample.
    if n > 0 && (n - 1) % stride != 0 {
        out.push_str(&format!("{:>14.3} {:>16.6}\n", times[n - 1], flux[n - 1]));
    }

    out
}

/// Format a single evidence lookup result.
pub fn format_evidence(event_id: &str, model: &str, value: f64) -> String {
    format!("event {event_id} model {model}: evidence = {value}\n")
}

/// Format an A-vs-B comparison.
pub fn format_comparison(c: &EvidenceComparison) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== lce - evidence comparison (event {}) ===\n", c.event_id));
    out.push_str(&format!("ln Z_A = {}\n", c.evidence_a));
    out.push_str(&format!("ln Z_B = {}\n", c.evidence_b));
    out.push_str(&format!("ln B_AB = {:.4}\n", c.log_bayes_factor));
    match c.preferred {
        Some(model) => out.push_str(&format!(
            "Preferred: {} ({})\n",
            model.display_name(),
            c.strength.label()
        )),
        None => out.push_str("Preferred: none (equal evidence)\n"),
    }
    out
}

/// Format a short summary of simulated observations.
pub fn format_simulation_summary(model: ModelKind, params: &ModelParameters, obs: &SimulatedObservations) -> String {
    let mut out = String::new();
    out.push_str("=== lce - simulated observations ===\n");
    out.push_str(&format!("Model: {}\n", model.display_name()));
    out.push_str(&format!("Params: amplitude={} duration={}s\n", params.amplitude, params.duration));

    let rms = if obs.flux.is_empty() {
        0.0
    } else {
        let sse: f64 = obs.flux.iter().zip(&obs.truth).map(|(y, m)| (y - m).powi(2)).sum();
        (sse / obs.flux.len() as f64).sqrt()
    };
    out.push_str(&format!("Observations: n={} | residual RMS={rms:.6}\n", obs.times.len()));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_strides_and_keeps_last_row() {
        let times: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let flux = vec![1.0; 50];
        let txt = format_curve_table(&times, &flux);
        let rows: Vec<&str> = txt.lines().skip(2).collect();
        assert!(rows.len() <= MAX_TABLE_ROWS + 1);
        assert!(rows.first().unwrap().trim_start().starts_with("0.000"));
        assert!(rows.last().unwrap().trim_start().starts_with("49.000"));
    }

    #[test]
    fn comparison_snapshot() {
        let c = EvidenceComparison::from_evidences(42, -10.0, -12.0).unwrap();
        let expected = concat!(
            "=== lce - evidence comparison (event 42) ===\n",
            "ln Z_A = -10\n",
            "ln Z_B = -12\n",
            "ln B_AB = 2.0000\n",
            "Preferred: Model A (Gaussian) (positive)\n",
        );
        assert_eq!(format_comparison(&c), expected);
    }

    #[test]
    fn evidence_line() {
        assert_eq!(format_evidence("42", "A", 3.14), "event 42 model A: evidence = 3.14\n");
    }
}
