//! Reporting utilities: curve summaries and formatted terminal output.

pub mod format;

pub use format::*;

use crate::domain::{ModelKind, ModelParameters};

/// Summary statistics of an evaluated light curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveStats {
    pub n: usize,
    pub flux_min: f64,
    pub flux_max: f64,
    /// Time of the largest `|flux|` sample.
    pub peak_time: f64,
}

/// Compute summary statistics, ignoring non-finite samples.
///
/// Returns `None` when there are no finite samples.
pub fn curve_stats(times: &[f64], flux: &[f64]) -> Option<CurveStats> {
    let mut flux_min = f64::INFINITY;
    let mut flux_max = f64::NEG_INFINITY;
    let mut peak: Option<(f64, f64)> = None;

    for (&t, &y) in times.iter().zip(flux) {
        if !y.is_finite() {
            continue;
        }
        flux_min = flux_min.min(y);
        flux_max = flux_max.max(y);
        if peak.is_none_or(|(_, best)| y.abs() > best.abs()) {
            peak = Some((t, y));
        }
    }

    peak.map(|(peak_time, _)| CurveStats {
        n: times.len().min(flux.len()),
        flux_min,
        flux_max,
        peak_time,
    })
}

/// Full width at half maximum of the model peak (seconds).
///
/// - A: `2 |duration| sqrt(ln 2)`
/// - B: `2 |duration|`
pub fn fwhm(model: ModelKind, params: &ModelParameters) -> f64 {
    let d = params.duration.abs();
    match model {
        ModelKind::A => 2.0 * d * std::f64::consts::LN_2.sqrt(),
        ModelKind::B => 2.0 * d,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::predict;

    #[test]
    fn stats_skip_non_finite() {
        let s = curve_stats(&[-1.0, 0.0, 1.0], &[0.5, f64::NAN, 0.7]).unwrap();
        assert_eq!(s.n, 3);
        assert_eq!(s.flux_min, 0.5);
        assert_eq!(s.peak_time, 1.0);
        assert!(curve_stats(&[0.0], &[f64::NAN]).is_none());
    }

    #[test]
    fn fwhm_hits_half_maximum() {
        let p = ModelParameters { amplitude: 3.0, duration: 40.0 };
        for model in ModelKind::ALL {
            let half = fwhm(model, &p) / 2.0;
            let y = predict(model, half, &p);
            assert!((y - 1.5).abs() < 1e-12, "{model}: {y}");
        }
    }
}
