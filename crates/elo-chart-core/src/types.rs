// File: crates/elo-chart-core/src/types.rs
// Summary: Shared types and constants (logical sizes, dpi, paddings).

use crate::geometry::RectF;

/// Default logical figure width (100 logical units = 1 inch).
pub const WIDTH: u32 = 1200;
/// Default logical figure height.
pub const HEIGHT: u32 = 800;
/// Logical units per inch; pixel size = logical * dpi / UNITS_PER_INCH.
pub const UNITS_PER_INCH: f32 = 100.0;
/// Default output resolution.
pub const DEFAULT_DPI: u32 = 300;

/// Screen margins, in logical units.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Shrink `outer` by these margins plus `extra_bottom` reserved below.
    pub fn plot_area(&self, outer: RectF, extra_bottom: f32) -> RectF {
        RectF::from_ltrb(
            outer.left + self.left as f32,
            outer.top + self.top as f32,
            outer.right - self.right as f32,
            outer.bottom - self.bottom as f32 - extra_bottom,
        )
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(90, 40, 70, 80)
    }
}

/// Pixel dimensions for a logical size rendered at `dpi`.
pub fn pixel_size(width: u32, height: u32, dpi: u32) -> (i32, i32) {
    let scale = dpi as f32 / UNITS_PER_INCH;
    (
        ((width as f32 * scale).round() as i32).max(1),
        ((height as f32 * scale).round() as i32).max(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_size_scales_with_dpi() {
        assert_eq!(pixel_size(1200, 800, 300), (3600, 2400));
        assert_eq!(pixel_size(1200, 800, 50), (600, 400));
    }

    #[test]
    fn plot_area_reserves_bottom_space() {
        let outer = RectF::from_ltwh(0.0, 0.0, 1200.0, 800.0);
        let plot = Insets::default().plot_area(outer, 50.0);
        assert_eq!(plot, RectF::from_ltrb(90.0, 70.0, 1160.0, 670.0));
    }
}
