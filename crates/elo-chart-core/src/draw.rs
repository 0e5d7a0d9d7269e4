// File: crates/elo-chart-core/src/draw.rs
// Summary: Renderer-agnostic drawing capability trait and style types.
// Notes:
// - All coordinates are logical units; backends scale to pixels.
// - Text positions are baselines; `TextAlign` picks the horizontal anchor.

use crate::color::Rgba;
use crate::geometry::{Point, RectF};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    Circle,
    Square,
    Triangle,
    Diamond,
    Cross,
    Star,
    Crown,
    /// Hollow circle outline.
    Ring,
}

impl Marker {
    /// Marker cycle for series, same order as the original figure.
    pub const SERIES_CYCLE: [Marker; 6] = [
        Marker::Circle,
        Marker::Square,
        Marker::Triangle,
        Marker::Diamond,
        Marker::Cross,
        Marker::Star,
    ];

    pub fn for_series(index: usize) -> Marker {
        Self::SERIES_CYCLE[index % Self::SERIES_CYCLE.len()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: Rgba,
    pub width: f32,
    /// On/off dash lengths; `None` draws solid.
    pub dash: Option<(f32, f32)>,
}

impl LineStyle {
    pub const fn solid(color: Rgba, width: f32) -> Self {
        Self { color, width, dash: None }
    }

    pub const fn dashed(color: Rgba, width: f32, on: f32, off: f32) -> Self {
        Self { color, width, dash: Some((on, off)) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Rgba,
    pub align: TextAlign,
    pub bold: bool,
    pub italic: bool,
}

impl TextStyle {
    pub const fn new(size: f32, color: Rgba) -> Self {
        Self { size, color, align: TextAlign::Left, bold: false, italic: false }
    }

    pub const fn aligned(self, align: TextAlign) -> Self {
        Self { align, ..self }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn italic(self) -> Self {
        Self { italic: true, ..self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LegendAnchor {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Swatch {
    /// Short line segment, optionally with a marker on it.
    Line { color: Rgba, marker: Option<Marker> },
    /// Filled box.
    Fill(Rgba),
    /// Marker alone.
    Glyph { marker: Marker, color: Rgba },
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub swatch: Swatch,
}

impl LegendEntry {
    pub fn new(label: impl Into<String>, swatch: Swatch) -> Self {
        Self { label: label.into(), swatch }
    }
}

/// Minimal drawing surface the chart layouts render onto.
pub trait DrawBackend {
    /// Logical canvas size (width, height).
    fn size(&self) -> (f32, f32);

    /// Polyline through `points`; fewer than two points draws nothing.
    fn draw_line(&mut self, points: &[Point], style: &LineStyle);

    /// Marker centred at `at`, `size` is its diameter.
    fn draw_marker(&mut self, at: Point, marker: Marker, size: f32, color: Rgba);

    /// Filled rectangle.
    fn draw_rect(&mut self, rect: RectF, fill: Rgba);

    /// Single line of text with its baseline at `at.y`.
    fn draw_text(&mut self, at: Point, text: &str, style: &TextStyle);

    /// Advance width of `text` at `size`.
    fn text_width(&self, text: &str, size: f32) -> f32;

    /// Restrict later drawing to `rect` until the matching `pop_clip`.
    fn push_clip(&mut self, _rect: RectF) {}

    fn pop_clip(&mut self) {}

    /// Boxed legend placed in a corner of `plot`.
    fn draw_legend(
        &mut self,
        plot: RectF,
        anchor: LegendAnchor,
        entries: &[LegendEntry],
        text: &TextStyle,
        background: Rgba,
    ) {
        if entries.is_empty() {
            return;
        }
        let frame = legend_frame(&*self, plot, anchor, entries, text.size);
        self.draw_rect(frame, background);

        let row_h = text.size * LEGEND_ROW;
        let label_style = text.aligned(TextAlign::Left);
        for (i, e) in entries.iter().enumerate() {
            let cy = frame.top + LEGEND_PAD + row_h * (i as f32 + 0.5);
            let sx = frame.left + LEGEND_PAD;
            let mid = Point::new(sx + LEGEND_SWATCH * 0.5, cy);
            match e.swatch {
                Swatch::Line { color, marker } => {
                    self.draw_line(
                        &[Point::new(sx, cy), Point::new(sx + LEGEND_SWATCH, cy)],
                        &LineStyle::solid(color, 2.0),
                    );
                    if let Some(m) = marker {
                        self.draw_marker(mid, m, text.size * 0.6, color);
                    }
                }
                Swatch::Fill(color) => {
                    let h = row_h * 0.7;
                    self.draw_rect(RectF::from_ltwh(sx, cy - h * 0.5, LEGEND_SWATCH, h), color);
                }
                Swatch::Glyph { marker, color } => self.draw_marker(mid, marker, text.size * 0.9, color),
            }
            let at = Point::new(sx + LEGEND_SWATCH + LEGEND_PAD, cy + text.size * 0.35);
            self.draw_text(at, &e.label, &label_style);
        }
    }
}

const LEGEND_PAD: f32 = 8.0;
const LEGEND_SWATCH: f32 = 28.0;
const LEGEND_ROW: f32 = 1.5;
const LEGEND_MARGIN: f32 = 10.0;

/// Box a legend with `entries` occupies inside `plot`.
pub fn legend_frame<B: DrawBackend + ?Sized>(
    backend: &B,
    plot: RectF,
    anchor: LegendAnchor,
    entries: &[LegendEntry],
    text_size: f32,
) -> RectF {
    let label_w = entries
        .iter()
        .map(|e| backend.text_width(&e.label, text_size))
        .fold(0.0f32, f32::max);
    let w = LEGEND_PAD * 3.0 + LEGEND_SWATCH + label_w;
    let h = LEGEND_PAD * 2.0 + text_size * LEGEND_ROW * entries.len() as f32;
    let (left, top) = match anchor {
        LegendAnchor::UpperLeft => (plot.left + LEGEND_MARGIN, plot.top + LEGEND_MARGIN),
        LegendAnchor::UpperRight => (plot.right - LEGEND_MARGIN - w, plot.top + LEGEND_MARGIN),
        LegendAnchor::LowerLeft => (plot.left + LEGEND_MARGIN, plot.bottom - LEGEND_MARGIN - h),
        LegendAnchor::LowerRight => (plot.right - LEGEND_MARGIN - w, plot.bottom - LEGEND_MARGIN - h),
    };
    RectF::from_ltwh(left, top, w, h)
}
