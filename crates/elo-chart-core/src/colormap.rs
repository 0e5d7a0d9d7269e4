// File: crates/elo-chart-core/src/colormap.rs
// Summary: Rating normalisation and piecewise-linear colour ramp shared by cells and legend.

use crate::color::Rgba;
use crate::error::ChartError;

/// Position of `rating` inside `[lo, hi]`, clamped to [0, 1].
/// Callers guarantee `lo < hi` (validated in `RenderConfig`).
#[inline]
pub fn normalize(rating: f64, lo: f64, hi: f64) -> f64 {
    ((rating - lo) / (hi - lo)).clamp(0.0, 1.0)
}

/// Ordered list of colour stops, evenly spaced over [0, 1].
#[derive(Clone, Debug, PartialEq)]
pub struct ColorRamp {
    stops: Vec<Rgba>,
    lo: f64,
    hi: f64,
}

impl ColorRamp {
    pub fn new(stops: Vec<Rgba>, domain: (i32, i32)) -> Result<Self, ChartError> {
        if stops.len() < 2 {
            return Err(ChartError::TooFewColorStops(stops.len()));
        }
        let (lo, hi) = domain;
        if lo >= hi {
            return Err(ChartError::InvalidDomain { lo, hi });
        }
        Ok(Self { stops, lo: lo as f64, hi: hi as f64 })
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }

    pub fn stops(&self) -> &[Rgba] {
        &self.stops
    }

    pub fn position(&self, rating: f64) -> f64 {
        normalize(rating, self.lo, self.hi)
    }

    /// Colour at a normalised position `t` in [0, 1].
    pub fn color_at(&self, t: f64) -> Rgba {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let segments = (self.stops.len() - 1) as f64;
        let scaled = t * segments;
        let idx = (scaled.floor() as usize).min(self.stops.len() - 2);
        let local = scaled - idx as f64;
        self.stops[idx].lerp(self.stops[idx + 1], local)
    }

    /// Colour for a rating value.
    pub fn color_for(&self, rating: f64) -> Rgba {
        self.color_at(self.position(rating))
    }

    /// `count` evenly spaced (rating, colour) pairs spanning the domain, for legends.
    pub fn swatches(&self, count: usize) -> Vec<(f64, Rgba)> {
        crate::grid::linspace(self.lo, self.hi, count.max(2))
            .into_iter()
            .map(|r| (r, self.color_for(r)))
            .collect()
    }
}
