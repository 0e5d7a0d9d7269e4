// File: crates/elo-chart-core/src/config.rs
// Summary: Render configuration passed explicitly into every render (no global style state).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::colormap::ColorRamp;
use crate::error::ChartError;
use crate::grid::checked_grid_len;
use crate::theme::{self, Theme};
use crate::types::{DEFAULT_DPI, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    /// Rating vs. age polylines.
    #[default]
    Line,
    /// One row per player, one cell per age bucket.
    Grid,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub output_path: PathBuf,
    pub dpi: u32,
    pub chart_mode: ChartMode,
    /// Normalisation domain for the colour ramp.
    pub rating_domain: (i32, i32),
    /// Grid column width in years.
    pub granularity: f64,
    pub color_stops: Vec<Rgba>,
    pub show_legend: bool,
    pub show_annotations: bool,
    /// Logical figure size; pixels = logical * dpi / 100.
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub footnote: Option<String>,
    pub theme: String,
    /// Visible ages (both modes).
    pub age_range: (i32, i32),
    /// Visible ratings on the line chart's Y axis.
    pub rating_axis: (i32, i32),
    /// Derive both ranges from the data instead of `age_range`/`rating_axis`.
    pub autoscale: bool,
    /// Spline step in years; `None` draws straight segments between samples.
    pub interpolation: Option<f64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("chess_grandmasters_elo_progression.png"),
            dpi: DEFAULT_DPI,
            chart_mode: ChartMode::Line,
            rating_domain: (2000, 2900),
            granularity: 1.0,
            color_stops: vec![
                Rgba::rgb(0xeb, 0xed, 0xf0),
                Rgba::rgb(0x9b, 0xe9, 0xa8),
                Rgba::rgb(0x40, 0xc4, 0x63),
                Rgba::rgb(0x30, 0xa1, 0x4e),
                Rgba::rgb(0x21, 0x6e, 0x39),
            ],
            show_legend: true,
            show_annotations: true,
            width: WIDTH,
            height: HEIGHT,
            title: "ELO Rating Progression of Chess Grandmasters".to_string(),
            x_label: "Age".to_string(),
            y_label: "ELO Rating".to_string(),
            footnote: Some(
                "Note: Historical ELO ratings are approximate, especially for players from earlier eras."
                    .to_string(),
            ),
            theme: "light".to_string(),
            age_range: (10, 60),
            rating_axis: (2100, 2950),
            autoscale: false,
            interpolation: None,
        }
    }
}

impl RenderConfig {
    /// Defaults for the contribution-grid chart.
    pub fn grid() -> Self {
        Self {
            output_path: PathBuf::from("chess_grandmasters_elo_grid.png"),
            chart_mode: ChartMode::Grid,
            title: "ELO Rating by Age of Chess Grandmasters".to_string(),
            height: 560,
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ChartError> {
        let cfg: RenderConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Fail fast on anything that would corrupt the drawing pipeline.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.dpi == 0 {
            return Err(ChartError::InvalidDpi);
        }
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::InvalidSize { width: self.width, height: self.height });
        }
        if !(self.granularity.is_finite() && self.granularity > 0.0) {
            return Err(ChartError::InvalidGranularity(self.granularity));
        }
        if let Some(r) = self.interpolation {
            if !(r.is_finite() && r > 0.0) {
                return Err(ChartError::InvalidResolution(r));
            }
        }
        for (lo, hi) in [self.age_range, self.rating_axis] {
            if lo >= hi {
                return Err(ChartError::InvalidDomain { lo, hi });
            }
        }
        if !self.autoscale {
            checked_grid_len(self.age_range.0 as f64, self.age_range.1 as f64, self.granularity)?;
        }
        self.color_ramp().map(|_| ())
    }

    pub fn color_ramp(&self) -> Result<ColorRamp, ChartError> {
        ColorRamp::new(self.color_stops.clone(), self.rating_domain)
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }
}
