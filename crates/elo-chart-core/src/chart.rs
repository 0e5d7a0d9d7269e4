// File: crates/elo-chart-core/src/chart.rs
// Summary: ChartRenderer: validates inputs once, then lays out the line or grid chart on a DrawBackend.

use crate::colormap::ColorRamp;
use crate::config::{ChartMode, RenderConfig};
use crate::dataset::Dataset;
use crate::draw::{DrawBackend, TextAlign, TextStyle};
use crate::error::ChartError;
use crate::geometry::{Point, RectF};
use crate::grid::checked_grid_len;
use crate::series::{Entity, Sample};
use crate::theme::Theme;
use crate::view::ViewState;
use crate::{heatmap, line, timeline};

/// Height reserved under the plot for the timeline strip.
pub(crate) const TIMELINE_HEIGHT: f32 = 56.0;
/// Height reserved at the very bottom for the footnote.
pub(crate) const FOOTNOTE_HEIGHT: f32 = 26.0;
pub(crate) const TITLE_SIZE: f32 = 20.0;
pub(crate) const LABEL_SIZE: f32 = 14.0;
pub(crate) const TICK_SIZE: f32 = 11.0;
pub(crate) const CALLOUT_SIZE: f32 = 9.0;
pub(crate) const LEGEND_SIZE: f32 = 11.0;

/// What a render drew and what it had to leave out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub entities_drawn: usize,
    /// Entities with no samples.
    pub entities_skipped: usize,
    pub events_drawn: usize,
    /// Events whose age has no matching sample.
    pub events_unmatched: usize,
}

pub struct ChartRenderer<'a> {
    pub(crate) dataset: &'a Dataset,
    pub(crate) config: &'a RenderConfig,
    pub(crate) theme: Theme,
    pub(crate) ramp: ColorRamp,
    pub(crate) view: ViewState,
}

impl<'a> ChartRenderer<'a> {
    /// Validate config and data; fails before anything is drawn.
    pub fn new(dataset: &'a Dataset, config: &'a RenderConfig) -> Result<Self, ChartError> {
        config.validate()?;
        dataset.validate()?;
        let view = ViewState::from_config(config, dataset);
        // point budgets depend on the data when autoscaling or densifying
        match config.chart_mode {
            ChartMode::Grid => {
                checked_grid_len(view.x_min, view.x_max, config.granularity)?;
            }
            ChartMode::Line => {
                if let Some(step) = config.interpolation {
                    for (lo, hi) in dataset.entities.iter().filter_map(|e| e.age_span()) {
                        checked_grid_len(lo as f64, hi as f64, step)?;
                    }
                }
            }
        }
        Ok(Self {
            dataset,
            config,
            theme: config.theme(),
            ramp: config.color_ramp()?,
            view,
        })
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn ramp(&self) -> &ColorRamp {
        &self.ramp
    }

    /// Draw the configured chart. Output depends only on dataset, config and
    /// the backend's text metrics.
    pub fn render<B: DrawBackend + ?Sized>(&self, backend: &mut B) -> RenderSummary {
        let (w, h) = backend.size();
        let canvas = RectF::from_ltwh(0.0, 0.0, w, h);
        backend.draw_rect(canvas, self.theme.background);

        let mut summary = RenderSummary::default();
        for e in &self.dataset.entities {
            if e.is_empty() {
                tracing::warn!(entity = %e.name, "entity has no samples, skipping");
                summary.entities_skipped += 1;
            }
        }

        let timeline_rect = self.timeline_rect(canvas);
        match self.config.chart_mode {
            ChartMode::Line => line::draw(self, backend, canvas, &mut summary),
            ChartMode::Grid => heatmap::draw(self, backend, canvas, &mut summary),
        }
        if let Some(rect) = timeline_rect {
            timeline::draw(backend, rect, &self.dataset.timeline, &self.theme);
        }
        self.draw_frame_text(backend, canvas);

        tracing::debug!(
            mode = ?self.config.chart_mode,
            drawn = summary.entities_drawn,
            skipped = summary.entities_skipped,
            events = summary.events_drawn,
            unmatched = summary.events_unmatched,
            "chart laid out"
        );
        summary
    }

    /// Non-empty entities with their dataset index (palette/marker slot).
    pub(crate) fn visible_entities(&self) -> impl Iterator<Item = (usize, &'a Entity)> + 'a {
        self.dataset.entities.iter().enumerate().filter(|(_, e)| !e.is_empty())
    }

    /// Space kept free below the plot for tick labels, axis label, timeline and footnote.
    pub(crate) fn bottom_reserve(&self) -> f32 {
        let mut r = 0.0;
        if self.show_timeline() {
            r += TIMELINE_HEIGHT;
        }
        if self.config.footnote.is_some() {
            r += FOOTNOTE_HEIGHT;
        }
        r
    }

    fn show_timeline(&self) -> bool {
        self.config.show_annotations && !self.dataset.timeline.is_empty()
    }

    fn timeline_rect(&self, canvas: RectF) -> Option<RectF> {
        if !self.show_timeline() {
            return None;
        }
        let foot = if self.config.footnote.is_some() { FOOTNOTE_HEIGHT } else { 0.0 };
        let bottom = canvas.bottom - foot - 4.0;
        Some(RectF::from_ltrb(canvas.left + 90.0, bottom - TIMELINE_HEIGHT + 8.0, canvas.right - 40.0, bottom))
    }

    fn draw_frame_text<B: DrawBackend + ?Sized>(&self, backend: &mut B, canvas: RectF) {
        let cx = canvas.center().x;
        if !self.config.title.is_empty() {
            let style = TextStyle::new(TITLE_SIZE, self.theme.title).aligned(TextAlign::Center).bold();
            backend.draw_text(Point::new(cx, canvas.top + 38.0), &self.config.title, &style);
        }
        if let Some(note) = &self.config.footnote {
            let style = TextStyle::new(LEGEND_SIZE, self.theme.tick).aligned(TextAlign::Center).italic();
            backend.draw_text(Point::new(cx, canvas.bottom - 9.0), note, &style);
        }
    }

    /// Sample an event lands on: exact age equality with a recorded sample.
    pub(crate) fn event_sample(entity: &Entity, age: i32) -> Option<Sample> {
        entity.sample_at(age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordingBackend;

    #[test]
    fn invalid_config_fails_before_drawing() {
        let ds = Dataset::grandmasters();
        let cfg = RenderConfig { rating_domain: (2500, 2500), ..Default::default() };
        assert!(matches!(ChartRenderer::new(&ds, &cfg), Err(ChartError::InvalidDomain { .. })));
    }

    #[test]
    fn oversized_grids_fail_before_drawing() {
        let ds = Dataset::grandmasters();
        let cfg = RenderConfig { autoscale: true, granularity: 1e-9, ..RenderConfig::grid() };
        assert!(matches!(ChartRenderer::new(&ds, &cfg), Err(ChartError::TooManyPoints { .. })));
        let cfg = RenderConfig { interpolation: Some(1e-300), ..Default::default() };
        assert!(matches!(ChartRenderer::new(&ds, &cfg), Err(ChartError::TooManyPoints { .. })));
    }

    #[test]
    fn first_command_is_background() {
        let ds = Dataset::grandmasters();
        let cfg = RenderConfig::default();
        let r = ChartRenderer::new(&ds, &cfg).unwrap();
        let mut b = RecordingBackend::new(1200.0, 800.0);
        r.render(&mut b);
        assert_eq!(
            b.commands.first(),
            Some(&crate::record::DrawCommand::Rect {
                rect: RectF::from_ltwh(0.0, 0.0, 1200.0, 800.0),
                fill: cfg.theme().background,
            })
        );
    }
}
