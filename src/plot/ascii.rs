//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observations: `o`
//! - model curve: `-` line

use crate::domain::{LightCurveFile, ModelKind, ModelParameters};
use crate::math::linspace;
use crate::models::evaluate;

const CURVE: char = '-';
const OBSERVATION: char = 'o';
const EMPTY: char = ' ';

/// Fraction of the flux span added above and below the data.
const Y_PAD_FRAC: f64 = 0.05;

/// Render a model curve over `[t_min, t_max]`, with optional observation overlay.
pub fn render_model_plot(
    model: ModelKind,
    params: &ModelParameters,
    t_min: f64,
    t_max: f64,
    observations: &[(f64, f64)],
    width: usize,
    height: usize,
) -> String {
    let times = linspace(t_min, t_max, width.max(2));
    let flux = evaluate(model, &times, params);
    let curve: Vec<(f64, f64)> = times.into_iter().zip(flux).collect();
    render_ascii_plot(&curve, observations, width, height)
}

/// Render a plot from a saved light-curve file (curve only).
pub fn render_curve_file_plot(curve: &LightCurveFile, width: usize, height: usize) -> String {
    let points: Vec<(f64, f64)> = curve
        .grid
        .times
        .iter()
        .copied()
        .zip(curve.grid.flux.iter().copied())
        .collect();
    render_ascii_plot(&points, &[], width, height)
}

/// Render a curve (drawn as a line) and observation points on one grid.
pub fn render_ascii_plot(curve: &[(f64, f64)], observations: &[(f64, f64)], width: usize, height: usize) -> String {
    let finite = || {
        curve
            .iter()
            .chain(observations)
            .copied()
            .filter(|(t, y)| t.is_finite() && y.is_finite())
    };

    let t_bounds = bounds(finite().map(|(t, _)| t))
        .filter(|(lo, hi)| hi > lo)
        .unwrap_or((0.0, 1.0));
    let y_bounds = match bounds(finite().map(|(_, y)| y)) {
        Some((lo, hi)) if hi > lo => {
            let pad = ((hi - lo) * Y_PAD_FRAC).max(1e-12);
            (lo - pad, hi + pad)
        }
        // Flat curve: centre it.
        Some((lo, _)) => (lo - 0.5, lo + 0.5),
        None => (0.0, 1.0),
    };

    let mut canvas = Canvas::new(width.max(10), height.max(5), t_bounds, y_bounds);

    // Curve first so observations overlay it; NaN gaps break the line.
    let mut last: Option<(usize, usize)> = None;
    for &(t, y) in curve {
        if !(t.is_finite() && y.is_finite()) {
            last = None;
            continue;
        }
        let cell = canvas.cell(t, y);
        canvas.segment(last.unwrap_or(cell), cell, CURVE);
        last = Some(cell);
    }

    for (t, y) in observations.iter().copied().filter(|(t, y)| t.is_finite() && y.is_finite()) {
        let (col, row) = canvas.cell(t, y);
        canvas.cells[row][col] = OBSERVATION;
    }

    let header = format!(
        "Plot: t=[{:.3}, {:.3}]s | flux=[{:.2}, {:.2}]",
        t_bounds.0, t_bounds.1, y_bounds.0, y_bounds.1
    );
    canvas.render(&header)
}

/// Min and max of an iterator of finite values.
fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Character grid addressed in data coordinates. Row 0 is the top (max flux).
struct Canvas {
    cells: Vec<Vec<char>>,
    t_bounds: (f64, f64),
    y_bounds: (f64, f64),
}

impl Canvas {
    fn new(width: usize, height: usize, t_bounds: (f64, f64), y_bounds: (f64, f64)) -> Self {
        Self {
            cells: vec![vec![EMPTY; width]; height],
            t_bounds,
            y_bounds,
        }
    }

    fn width(&self) -> usize {
        self.cells[0].len()
    }

    fn height(&self) -> usize {
        self.cells.len()
    }

    /// Grid index of `value` along an axis with `n` cells.
    fn index(value: f64, (lo, hi): (f64, f64), n: usize) -> usize {
        let frac = ((value - lo) / (hi - lo)).clamp(0.0, 1.0);
        (frac * (n - 1) as f64).round() as usize
    }

    /// `(col, row)` for a data point.
    fn cell(&self, t: f64, y: f64) -> (usize, usize) {
        let col = Self::index(t, self.t_bounds, self.width());
        let row = self.height() - 1 - Self::index(y, self.y_bounds, self.height());
        (col, row)
    }

    /// Draw a straight segment into empty cells (DDA stepping).
    fn segment(&mut self, from: (usize, usize), to: (usize, usize), ch: char) {
        let (c0, r0) = (from.0 as f64, from.1 as f64);
        let (dc, dr) = (to.0 as f64 - c0, to.1 as f64 - r0);
        let steps = dc.abs().max(dr.abs()) as usize;

        for i in 0..=steps {
            let f = if steps == 0 { 0.0 } else { i as f64 / steps as f64 };
            let col = (c0 + dc * f).round() as usize;
            let row = (r0 + dr * f).round() as usize;
            if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
                if *cell == EMPTY {
                    *cell = ch;
                }
            }
        }
    }

    fn render(self, header: &str) -> String {
        let mut out = String::with_capacity((self.width() + 1) * (self.height() + 1) + header.len());
        out.push_str(header);
        out.push('\n');
        for row in self.cells {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}
