//! Evenly spaced time grids.

use crate::domain::GridSpec;
use crate::error::AppError;

/// `n` evenly spaced points from `t0` to `t1` inclusive.
///
/// The last point is exactly `t1` (no accumulated rounding).
pub fn linspace(t0: f64, t1: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![t0],
        _ => {
            let last = n - 1;
            (0..n)
                .map(|i| {
                    if i == last {
                        t1
                    } else {
                        let u = i as f64 / last as f64;
                        t0 + u * (t1 - t0)
                    }
                })
                .collect()
        }
    }
}

/// Validate a grid spec and build its time points.
pub fn time_grid(spec: &GridSpec) -> Result<Vec<f64>, AppError> {
    spec.validate()?;
    Ok(linspace(spec.t_min, spec.t_max, spec.steps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints_and_spacing() {
        let g = linspace(-10.0, 10.0, 5);
        assert_eq!(g, vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn time_grid_rejects_inverted_range() {
        let spec = GridSpec { t_min: 5.0, t_max: 1.0, steps: 10 };
        assert!(time_grid(&spec).is_err());
        let spec = GridSpec { t_min: 0.0, t_max: 1.0, steps: 1 };
        assert!(time_grid(&spec).is_err());
    }
}
