// File: crates/elo-chart-core/src/record.rs
// Summary: Backend that records draw calls instead of rasterising them.

use crate::color::Rgba;
use crate::draw::{DrawBackend, LegendAnchor, LegendEntry, LineStyle, Marker, TextStyle};
use crate::geometry::{Point, RectF};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line { points: Vec<Point>, style: LineStyle },
    Marker { at: Point, marker: Marker, size: f32, color: Rgba },
    Rect { rect: RectF, fill: Rgba },
    Text { at: Point, text: String, style: TextStyle },
    Legend { anchor: LegendAnchor, entries: Vec<LegendEntry> },
}

/// Headless backend used by tests and layout benches.
#[derive(Clone, Debug)]
pub struct RecordingBackend {
    width: f32,
    height: f32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingBackend {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, commands: Vec::new() }
    }

    pub fn markers(&self, kind: Marker) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands
            .iter()
            .filter(move |c| matches!(c, DrawCommand::Marker { marker, .. } if *marker == kind))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn legends(&self) -> impl Iterator<Item = &[LegendEntry]> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Legend { entries, .. } => Some(entries.as_slice()),
            _ => None,
        })
    }
}

impl DrawBackend for RecordingBackend {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn draw_line(&mut self, points: &[Point], style: &LineStyle) {
        if points.len() < 2 {
            return;
        }
        self.commands.push(DrawCommand::Line { points: points.to_vec(), style: *style });
    }

    fn draw_marker(&mut self, at: Point, marker: Marker, size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Marker { at, marker, size, color });
    }

    fn draw_rect(&mut self, rect: RectF, fill: Rgba) {
        self.commands.push(DrawCommand::Rect { rect, fill });
    }

    fn draw_text(&mut self, at: Point, text: &str, style: &TextStyle) {
        self.commands.push(DrawCommand::Text { at, text: text.to_string(), style: *style });
    }

    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.55
    }

    fn draw_legend(
        &mut self,
        _plot: RectF,
        anchor: LegendAnchor,
        entries: &[LegendEntry],
        _text: &TextStyle,
        _background: Rgba,
    ) {
        if entries.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Legend { anchor, entries: entries.to_vec() });
    }
}
