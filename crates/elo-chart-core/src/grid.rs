// File: crates/elo-chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

use crate::error::ChartError;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Upper bound on points any evenly spaced grid may hold.
pub const MAX_GRID_POINTS: usize = 100_000;

/// Number of points `arange_inclusive(start, end, step)` yields, or `None`
/// when that exceeds `MAX_GRID_POINTS`.
pub fn grid_len(start: f64, end: f64, step: f64) -> Option<usize> {
    if !(step > 0.0) || !(end > start) { return Some(1); }
    let n = ((end - start) / step + 1e-9).floor();
    // also catches inf/NaN from degenerate steps
    if n.is_finite() && n < MAX_GRID_POINTS as f64 { Some(n as usize + 1) } else { None }
}

/// `grid_len` as a validation step.
pub fn checked_grid_len(start: f64, end: f64, step: f64) -> Result<usize, ChartError> {
    grid_len(start, end, step).ok_or(ChartError::TooManyPoints { step, span: end - start, limit: MAX_GRID_POINTS })
}

/// Evenly spaced samples `start, start + step, ...` up to and including `end`
/// (within a small tolerance so float drift does not drop the last point).
/// Truncated at `MAX_GRID_POINTS`; callers validate with `grid_len` first.
pub fn arange_inclusive(start: f64, end: f64, step: f64) -> Vec<f64> {
    let n = grid_len(start, end, step).unwrap_or(MAX_GRID_POINTS);
    (0..n).map(|i| start + step * i as f64).collect()
}

/// Integer-valued "nice" ticks (1, 2, 5 x 10^k steps) covering `[lo, hi]`,
/// roughly `max_ticks` of them.
pub fn nice_ticks(lo: f64, hi: f64, max_ticks: usize) -> Vec<f64> {
    if !(hi > lo) || max_ticks == 0 { return vec![lo]; }
    let raw = (hi - lo) / max_ticks as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let mut step = mag;
    for m in [1.0, 2.0, 5.0, 10.0] {
        step = m * mag;
        if step >= raw { break; }
    }
    let step = step.max(1.0).round();
    let first = (lo / step).ceil() * step;
    let mut out = Vec::new();
    let mut v = first;
    while v <= hi + 1e-9 {
        out.push(v);
        v += step;
    }
    out
}
