// File: crates/elo-chart-core/src/heatmap.rs
// Summary: Contribution-grid layout: one row per player, one cell per age bucket, ramp-coloured by rating.

use crate::annotation::{Event, Importance};
use crate::chart::{ChartRenderer, RenderSummary, CALLOUT_SIZE, LABEL_SIZE, LEGEND_SIZE, TICK_SIZE};
use crate::draw::{DrawBackend, LegendAnchor, LegendEntry, Marker, Swatch, TextAlign, TextStyle};
use crate::geometry::{Point, RectF};
use crate::grid::{arange_inclusive, nice_ticks};
use crate::scale::LinearScale;
use crate::types::Insets;

const CELL_GAP: f32 = 1.0;
const LEGEND_WIDTH: f32 = 190.0;
const LEGEND_SWATCHES: usize = 5;

pub(crate) fn draw<B: DrawBackend + ?Sized>(
    r: &ChartRenderer<'_>,
    backend: &mut B,
    canvas: RectF,
    summary: &mut RenderSummary,
) {
    let cfg = r.config;
    let theme = &r.theme;
    let annotate = cfg.show_annotations;
    let rows: Vec<_> = r.visible_entities().collect();

    let name_w = rows
        .iter()
        .map(|(_, e)| backend.text_width(&e.name, LEGEND_SIZE))
        .fold(0.0f32, f32::max);
    let legend_w = if cfg.show_legend { LEGEND_WIDTH } else { 0.0 };
    let plot = RectF::from_ltrb(
        canvas.left + (name_w + 24.0).max(Insets::default().left as f32),
        canvas.top + 70.0,
        canvas.right - 30.0 - legend_w,
        canvas.bottom - 60.0 - r.bottom_reserve(),
    );

    let g = cfg.granularity;
    let (a0, a1) = (r.view.x_min, r.view.x_max);
    let columns = arange_inclusive(a0, a1, g);
    let sx = LinearScale::new(plot.left, plot.right, a0, a0 + columns.len() as f64 * g);
    let cell_w = plot.width() / columns.len() as f32;

    let label_room = if annotate { CALLOUT_SIZE + 8.0 } else { 4.0 };
    let pitch = if rows.is_empty() { 0.0 } else { (plot.height() / rows.len() as f32).min(cell_w + label_room) };
    let cell_h = (pitch - label_room).max(2.0);
    let grid_bottom = plot.top + pitch * rows.len() as f32;

    let name_style = TextStyle::new(LEGEND_SIZE, theme.axis_label).aligned(TextAlign::Right);
    let label_style = TextStyle::new(CALLOUT_SIZE, theme.callout).aligned(TextAlign::Center);
    let mut labels: Vec<(Point, String)> = Vec::new();

    for (row, &(_, entity)) in rows.iter().enumerate() {
        let top = plot.top + row as f32 * pitch + label_room;
        backend.draw_text(
            Point::new(plot.left - 10.0, top + cell_h * 0.5 + LEGEND_SIZE * 0.35),
            &entity.name,
            &name_style,
        );

        let spline = entity.spline();
        let span = entity.age_span();
        let eras = r.dataset.eras_for(&entity.name);
        let mut events: Vec<&Event> = Vec::new();
        for ev in r.dataset.events_for(&entity.name) {
            if ChartRenderer::event_sample(entity, ev.age).is_some() {
                events.push(ev);
            } else {
                tracing::warn!(entity = %entity.name, age = ev.age, "event age has no sample, omitted");
                summary.events_unmatched += 1;
            }
        }

        for &c in &columns {
            let cell = RectF::from_ltwh(sx.to_px(c), top, cell_w, cell_h).inset(CELL_GAP);
            let fill = match (&spline, span) {
                (Some(s), Some((lo, hi))) if c >= lo as f64 && c <= hi as f64 => r.ramp.color_for(s.eval(c)),
                _ => theme.empty_cell,
            };
            backend.draw_rect(cell, fill);
            if !annotate {
                continue;
            }

            let glyph = cell.width().min(cell.height());
            if eras.iter().any(|e| e.covers_age(c.floor() as i32)) {
                let at = Point::new(cell.center().x, cell.top + cell.height() * 0.3);
                backend.draw_marker(at, Marker::Crown, glyph * 0.6, theme.era_marker);
            }
            let in_bucket = |ev: &&&Event| (ev.age as f64) >= c && (ev.age as f64) < c + g;
            for ev in events.iter().filter(in_bucket) {
                backend.draw_marker(cell.center(), Marker::Star, glyph * 0.7, theme.event_marker);
                summary.events_drawn += 1;
                if ev.importance() == Importance::Major {
                    labels.push((Point::new(cell.center().x, cell.top - 3.0), ev.description.clone()));
                }
            }
        }
        summary.entities_drawn += 1;
    }

    for (p, text) in &labels {
        backend.draw_text(*p, text, &label_style);
    }

    // age axis under the grid, ticks at column centres
    let tick_style = TextStyle::new(TICK_SIZE, theme.tick).aligned(TextAlign::Center);
    for v in nice_ticks(a0, a1, 10) {
        let px = sx.to_px(v + g * 0.5);
        backend.draw_text(Point::new(px, grid_bottom + 18.0), &format!("{v:.0}"), &tick_style);
    }
    let label = TextStyle::new(LABEL_SIZE, theme.axis_label).aligned(TextAlign::Center);
    backend.draw_text(Point::new(plot.center().x, grid_bottom + 42.0), &cfg.x_label, &label);

    if cfg.show_legend {
        let mut entries: Vec<LegendEntry> = r
            .ramp
            .swatches(LEGEND_SWATCHES)
            .into_iter()
            .rev()
            .map(|(rating, color)| LegendEntry::new(format!("{rating:.0}"), Swatch::Fill(color)))
            .collect();
        if annotate {
            entries.push(LegendEntry::new(
                "World Champion era",
                Swatch::Glyph { marker: Marker::Crown, color: theme.era_marker },
            ));
            entries.push(LegendEntry::new(
                "Notable event",
                Swatch::Glyph { marker: Marker::Star, color: theme.event_marker },
            ));
        }
        let area = RectF::from_ltrb(plot.right + 10.0, plot.top, canvas.right - 10.0, plot.bottom);
        let text = TextStyle::new(LEGEND_SIZE, theme.axis_label);
        backend.draw_legend(area, LegendAnchor::UpperLeft, &entries, &text, theme.legend_background);
    }
}
