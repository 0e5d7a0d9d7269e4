// File: crates/elo-chart-skia/src/backend.rs
// Summary: DrawBackend over a Skia CPU raster surface; logical units scaled by dpi.

use anyhow::{anyhow, Context, Result};
use skia_safe as skia;

use elo_chart_core::draw::{DrawBackend, LineStyle, Marker, TextStyle};
use elo_chart_core::geometry::{Point, RectF};
use elo_chart_core::types::{pixel_size, UNITS_PER_INCH};
use elo_chart_core::Rgba;

use crate::text::TextShaper;

pub(crate) fn to_sk_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn fill_paint(color: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_sk_color(color));
    paint
}

fn stroke_paint(color: Rgba, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    paint.set_color(to_sk_color(color));
    paint
}

/// Closed polygon from unit-space vertices scaled by `r` around `c`.
fn polygon(c: Point, r: f32, unit: &[(f32, f32)]) -> skia::Path {
    let mut path = skia::Path::new();
    if let Some(&(x0, y0)) = unit.first() {
        path.move_to((c.x + x0 * r, c.y + y0 * r));
        for &(x, y) in &unit[1..] {
            path.line_to((c.x + x * r, c.y + y * r));
        }
        path.close();
    }
    path
}

fn star_vertices() -> Vec<(f32, f32)> {
    (0..10)
        .map(|i| {
            let radius = if i % 2 == 0 { 1.0 } else { 0.4 };
            let angle = -std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::PI / 5.0;
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

const TRIANGLE: [(f32, f32); 3] = [(0.0, -1.0), (0.9, 0.7), (-0.9, 0.7)];
const DIAMOND: [(f32, f32); 4] = [(0.0, -1.0), (0.75, 0.0), (0.0, 1.0), (-0.75, 0.0)];
const CROWN: [(f32, f32); 7] = [(-1.0, 0.6), (-1.0, -0.5), (-0.5, 0.0), (0.0, -0.8), (0.5, 0.0), (1.0, -0.5), (1.0, 0.6)];

pub struct SkiaBackend {
    surface: skia::Surface,
    width: f32,
    height: f32,
    pixel_width: i32,
    pixel_height: i32,
    text: TextShaper,
    clip_depth: usize,
}

impl SkiaBackend {
    /// Allocate a surface of `width x height` logical units at `dpi` and clear it.
    pub fn new(width: u32, height: u32, dpi: u32, background: Rgba) -> Result<Self> {
        let (pw, ph) = pixel_size(width, height, dpi);
        let mut surface = skia::surfaces::raster_n32_premul((pw, ph))
            .ok_or_else(|| anyhow!("failed to create {pw}x{ph} raster surface"))?;
        let scale = dpi as f32 / UNITS_PER_INCH;
        let canvas = surface.canvas();
        canvas.clear(to_sk_color(background));
        canvas.scale((scale, scale));
        Ok(Self {
            surface,
            width: width as f32,
            height: height as f32,
            pixel_width: pw,
            pixel_height: ph,
            text: TextShaper::new(),
            clip_depth: 0,
        })
    }

    pub fn pixel_size(&self) -> (i32, i32) {
        (self.pixel_width, self.pixel_height)
    }

    /// Unpremultiplied RGBA8 pixels, tightly packed (stride = width * 4).
    pub fn read_rgba8(&mut self) -> Result<Vec<u8>> {
        let (w, h) = (self.pixel_width, self.pixel_height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            anyhow::bail!("reading {w}x{h} pixels from surface failed");
        }
        Ok(px)
    }

    /// Encode the current surface as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let px = self.read_rgba8()?;
        let img = image::RgbaImage::from_raw(self.pixel_width as u32, self.pixel_height as u32, px)
            .ok_or_else(|| anyhow!("pixel buffer does not match surface size"))?;
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .context("encode PNG failed")?;
        Ok(bytes)
    }
}

impl DrawBackend for SkiaBackend {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn draw_line(&mut self, points: &[Point], style: &LineStyle) {
        if points.len() < 2 {
            return;
        }
        let mut path = skia::Path::new();
        path.move_to((points[0].x, points[0].y));
        for p in &points[1..] {
            path.line_to((p.x, p.y));
        }
        let mut paint = stroke_paint(style.color, style.width);
        if let Some((on, off)) = style.dash {
            paint.set_stroke_cap(skia::paint::Cap::Butt);
            paint.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
        }
        self.surface.canvas().draw_path(&path, &paint);
    }

    fn draw_marker(&mut self, at: Point, marker: Marker, size: f32, color: Rgba) {
        let r = size * 0.5;
        let canvas = self.surface.canvas();
        let fill = fill_paint(color);
        match marker {
            Marker::Circle => {
                canvas.draw_circle((at.x, at.y), r, &fill);
            }
            Marker::Ring => {
                canvas.draw_circle((at.x, at.y), r, &stroke_paint(color, (size * 0.12).max(1.0)));
            }
            Marker::Square => {
                canvas.draw_rect(skia::Rect::from_ltrb(at.x - r, at.y - r, at.x + r, at.y + r), &fill);
            }
            Marker::Triangle => {
                canvas.draw_path(&polygon(at, r, &TRIANGLE), &fill);
            }
            Marker::Diamond => {
                canvas.draw_path(&polygon(at, r, &DIAMOND), &fill);
            }
            Marker::Cross => {
                let stroke = stroke_paint(color, (size * 0.2).max(1.0));
                canvas.draw_line((at.x - r, at.y - r), (at.x + r, at.y + r), &stroke);
                canvas.draw_line((at.x - r, at.y + r), (at.x + r, at.y - r), &stroke);
            }
            Marker::Star => {
                canvas.draw_path(&polygon(at, r, &star_vertices()), &fill);
            }
            Marker::Crown => {
                canvas.draw_path(&polygon(at, r, &CROWN), &fill);
            }
        }
    }

    fn draw_rect(&mut self, rect: RectF, fill: Rgba) {
        let rect = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        self.surface.canvas().draw_rect(rect, &fill_paint(fill));
    }

    fn draw_text(&mut self, at: Point, text: &str, style: &TextStyle) {
        let canvas = self.surface.canvas();
        self.text.draw(canvas, text, at.x, at.y, style);
    }

    fn text_width(&self, text: &str, size: f32) -> f32 {
        self.text.measure_width(text, size)
    }

    fn push_clip(&mut self, rect: RectF) {
        let canvas = self.surface.canvas();
        canvas.save();
        canvas.clip_rect(skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom), skia::ClipOp::Intersect, true);
        self.clip_depth += 1;
    }

    fn pop_clip(&mut self) {
        if self.clip_depth == 0 {
            return;
        }
        self.surface.canvas().restore();
        self.clip_depth -= 1;
    }
}
