// File: crates/elo-chart-skia/src/text.rs
// Summary: Simple text shaper/renderer using Skia textlayout with sensible defaults.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use elo_chart_core::draw::{TextAlign, TextStyle as ChartTextStyle};

use crate::backend::to_sk_color;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool, italic: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        let font_style = match (bold, italic) {
            (true, true) => skia::FontStyle::bold_italic(),
            (true, false) => skia::FontStyle::bold(),
            (false, true) => skia::FontStyle::italic(),
            (false, false) => skia::FontStyle::normal(),
        };
        ts.set_font_style(font_style);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool, italic: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold, italic);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), false, false);
        // width of the longest line
        p.longest_line()
    }

    /// Draw `text` with its baseline at `y`, anchored at `x` per `style.align`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, style: &ChartTextStyle) {
        if text.is_empty() {
            return;
        }
        let mut p = self.layout(text, style.size, to_sk_color(style.color), style.bold, style.italic);
        let w = p.longest_line();
        let left = match style.align {
            TextAlign::Left => x,
            TextAlign::Center => x - w * 0.5,
            TextAlign::Right => x - w,
        };
        // Paragraph draws from top-left; shift so the first baseline lands on y
        let top = y - p.alphabetic_baseline();
        p.paint(canvas, (left, top));
    }
}
