// File: crates/elo-chart-core/src/scale.rs
// Summary: Linear value-to-logical-unit scale used for both chart axes.

/// Maps the value range `[vmin, vmax]` onto `[px_from, px_to]`.
/// `px_to` may be smaller than `px_from` (Y axes grow upward).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px_from: f32,
    pub px_to: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(px_from: f32, px_to: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { px_from, px_to, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.vmax - self.vmin;
        self.px_from + ((v - self.vmin) / span) as f32 * (self.px_to - self.px_from)
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = self.vmax - self.vmin;
        self.vmin + ((px - self.px_from) / (self.px_to - self.px_from)) as f64 * span
    }
    /// Whether `v` lies inside the value range (inclusive).
    pub fn contains(&self, v: f64) -> bool {
        v >= self.vmin.min(self.vmax) && v <= self.vmax.max(self.vmin)
    }
}
