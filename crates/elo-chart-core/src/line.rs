// File: crates/elo-chart-core/src/line.rs
// Summary: Line-chart layout: category bands, grid, one polyline per player, era/event/peak annotations, legend.

use crate::axis::Axis;
use crate::chart::{ChartRenderer, RenderSummary, CALLOUT_SIZE, LABEL_SIZE, LEGEND_SIZE, TICK_SIZE};
use crate::dataset::Dataset;
use crate::draw::{DrawBackend, LegendAnchor, LegendEntry, LineStyle, Marker, Swatch, TextAlign, TextStyle};
use crate::geometry::{Point, RectF};
use crate::grid::nice_ticks;
use crate::scale::LinearScale;
use crate::theme::Theme;
use crate::types::Insets;

const SERIES_WIDTH: f32 = 2.0;
const MARKER_SIZE: f32 = 8.0;
const ERA_RING_SIZE: f32 = 16.0;
const EVENT_STAR_SIZE: f32 = 15.0;

pub(crate) fn draw<B: DrawBackend + ?Sized>(
    r: &ChartRenderer<'_>,
    backend: &mut B,
    canvas: RectF,
    summary: &mut RenderSummary,
) {
    let cfg = r.config;
    let theme = &r.theme;
    let mut x_axis = Axis::new(cfg.x_label.as_str(), 0.0, 1.0);
    let mut y_axis = Axis::new(cfg.y_label.as_str(), 0.0, 1.0);
    r.view.apply_to_axes(&mut x_axis, &mut y_axis);

    let plot = Insets::default().plot_area(canvas, r.bottom_reserve());
    let sx = LinearScale::new(plot.left, plot.right, x_axis.min, x_axis.max);
    let sy = LinearScale::new(plot.bottom, plot.top, y_axis.min, y_axis.max);
    let at = |age: f64, rating: f64| Point::new(sx.to_px(age), sy.to_px(rating));

    draw_category_bands(backend, r.dataset, plot, &sy, theme, cfg.show_annotations);
    draw_grid(backend, plot, &sx, &sy, theme);
    draw_axes(backend, plot, &sx, &sy, &x_axis, &y_axis, theme);

    let annotate = cfg.show_annotations;
    let mut callouts: Vec<(Point, String, TextStyle)> = Vec::new();
    let peak_style = TextStyle::new(CALLOUT_SIZE, theme.callout).aligned(TextAlign::Center);
    let event_style = TextStyle::new(CALLOUT_SIZE, theme.callout);

    backend.push_clip(plot);
    for (i, entity) in r.visible_entities() {
        let color = theme.series_color(i);
        let marker = Marker::for_series(i);

        let path: Vec<Point> = match cfg.interpolation {
            Some(step) => entity
                .interpolate(step)
                .unwrap_or_default()
                .into_iter()
                .map(|(age, rating)| at(age, rating))
                .collect(),
            None => entity.samples.iter().map(|s| at(s.age as f64, s.rating as f64)).collect(),
        };
        backend.draw_line(&path, &LineStyle::solid(color, SERIES_WIDTH));
        for s in &entity.samples {
            backend.draw_marker(at(s.age as f64, s.rating as f64), marker, MARKER_SIZE, color);
        }

        let eras = r.dataset.eras_for(&entity.name);
        for ev in r.dataset.events_for(&entity.name) {
            let Some(s) = ChartRenderer::event_sample(entity, ev.age) else {
                tracing::warn!(entity = %entity.name, age = ev.age, "event age has no sample, omitted");
                summary.events_unmatched += 1;
                continue;
            };
            if !annotate {
                continue;
            }
            let p = at(s.age as f64, s.rating as f64);
            backend.draw_marker(p, Marker::Star, EVENT_STAR_SIZE, theme.event_marker);
            callouts.push((p.offset(8.0, 18.0), ev.description.clone(), event_style));
            summary.events_drawn += 1;
        }

        if annotate {
            for s in entity.samples.iter().filter(|s| eras.iter().any(|e| e.covers_age(s.age))) {
                backend.draw_marker(at(s.age as f64, s.rating as f64), Marker::Ring, ERA_RING_SIZE, theme.era_marker);
            }
            if let Some(peak) = entity.peak() {
                if sx.contains(peak.age as f64) && sy.contains(peak.rating as f64) {
                    let p = at(peak.age as f64, peak.rating as f64);
                    callouts.push((p.offset(0.0, -10.0), peak.rating.to_string(), peak_style));
                }
            }
        }
        summary.entities_drawn += 1;
    }
    backend.pop_clip();

    for (p, text, style) in &callouts {
        backend.draw_text(*p, text, style);
    }

    if cfg.show_legend {
        draw_legends(r, backend, plot, &sy);
    }
}

fn draw_category_bands<B: DrawBackend + ?Sized>(
    backend: &mut B,
    dataset: &Dataset,
    plot: RectF,
    sy: &LinearScale,
    theme: &Theme,
    labels: bool,
) {
    let (lo, hi) = (sy.vmin, sy.vmax);
    let style = TextStyle::new(CALLOUT_SIZE, theme.tick).aligned(TextAlign::Right).italic();
    for c in &dataset.categories {
        let b0 = (c.min_rating as f64).max(lo);
        let b1 = (c.max_rating as f64).min(hi);
        if b0 >= b1 {
            continue;
        }
        let band = RectF::from_ltrb(plot.left, sy.to_px(b1), plot.right, sy.to_px(b0));
        backend.draw_rect(band, c.color);
        if labels && band.height() >= CALLOUT_SIZE + 4.0 {
            let baseline = band.center().y + CALLOUT_SIZE * 0.35;
            backend.draw_text(Point::new(plot.right - 6.0, baseline), &c.name, &style);
        }
    }
}

fn draw_grid<B: DrawBackend + ?Sized>(backend: &mut B, plot: RectF, sx: &LinearScale, sy: &LinearScale, theme: &Theme) {
    let style = LineStyle::dashed(theme.grid, 1.0, 4.0, 3.0);
    // verticals
    for x in nice_ticks(sx.vmin, sx.vmax, 10) {
        let px = sx.to_px(x);
        backend.draw_line(&[Point::new(px, plot.top), Point::new(px, plot.bottom)], &style);
    }
    // horizontals
    for y in nice_ticks(sy.vmin, sy.vmax, 8) {
        let py = sy.to_px(y);
        backend.draw_line(&[Point::new(plot.left, py), Point::new(plot.right, py)], &style);
    }
}

fn draw_axes<B: DrawBackend + ?Sized>(
    backend: &mut B,
    plot: RectF,
    sx: &LinearScale,
    sy: &LinearScale,
    x: &Axis,
    y: &Axis,
    theme: &Theme,
) {
    let axis_style = LineStyle::solid(theme.axis_line, 1.5);
    backend.draw_line(&[Point::new(plot.left, plot.bottom), Point::new(plot.right, plot.bottom)], &axis_style);
    backend.draw_line(&[Point::new(plot.left, plot.top), Point::new(plot.left, plot.bottom)], &axis_style);

    let tick_line = LineStyle::solid(theme.tick, 1.0);
    let x_tick = TextStyle::new(TICK_SIZE, theme.tick).aligned(TextAlign::Center);
    for v in nice_ticks(sx.vmin, sx.vmax, 10) {
        let px = sx.to_px(v);
        backend.draw_line(&[Point::new(px, plot.bottom), Point::new(px, plot.bottom + 5.0)], &tick_line);
        backend.draw_text(Point::new(px, plot.bottom + 19.0), &format!("{v:.0}"), &x_tick);
    }
    let y_tick = TextStyle::new(TICK_SIZE, theme.tick).aligned(TextAlign::Right);
    for v in nice_ticks(sy.vmin, sy.vmax, 8) {
        let py = sy.to_px(v);
        backend.draw_line(&[Point::new(plot.left - 5.0, py), Point::new(plot.left, py)], &tick_line);
        backend.draw_text(Point::new(plot.left - 8.0, py + TICK_SIZE * 0.35), &format!("{v:.0}"), &y_tick);
    }

    let label = TextStyle::new(LABEL_SIZE, theme.axis_label);
    backend.draw_text(
        Point::new(plot.center().x, plot.bottom + 44.0),
        &x.label,
        &label.aligned(TextAlign::Center),
    );
    backend.draw_text(Point::new(plot.left - 80.0, plot.top - 12.0), &y.label, &label);
}

fn draw_legends<B: DrawBackend + ?Sized>(r: &ChartRenderer<'_>, backend: &mut B, plot: RectF, sy: &LinearScale) {
    let theme = &r.theme;
    let text = TextStyle::new(LEGEND_SIZE, theme.axis_label);

    let mut entries: Vec<LegendEntry> = r
        .visible_entities()
        .map(|(i, e)| {
            let swatch = Swatch::Line { color: theme.series_color(i), marker: Some(Marker::for_series(i)) };
            LegendEntry::new(e.name.as_str(), swatch)
        })
        .collect();
    if r.config.show_annotations {
        entries.push(LegendEntry::new(
            "World Champion era",
            Swatch::Glyph { marker: Marker::Ring, color: theme.era_marker },
        ));
        entries.push(LegendEntry::new(
            "Notable event",
            Swatch::Glyph { marker: Marker::Star, color: theme.event_marker },
        ));
    }
    backend.draw_legend(plot, LegendAnchor::LowerRight, &entries, &text, theme.legend_background);

    // Highest band first, like the chart reads top to bottom.
    let bands: Vec<LegendEntry> = r
        .dataset
        .categories
        .iter()
        .rev()
        .filter(|c| (c.max_rating as f64) > sy.vmin && (c.min_rating as f64) < sy.vmax)
        .map(|c| LegendEntry::new(format!("{} ({}-{})", c.name, c.min_rating, c.max_rating), Swatch::Fill(c.color)))
        .collect();
    backend.draw_legend(plot, LegendAnchor::UpperLeft, &bands, &text, theme.legend_background);
}
