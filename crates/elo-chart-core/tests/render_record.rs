// File: crates/elo-chart-core/tests/render_record.rs
// Purpose: Layout behaviour observed through the recording backend (no rasteriser needed).

use elo_chart_core::{
    ChartMode, ChartRenderer, Dataset, DrawCommand, Entity, Event, Marker, RecordingBackend, RenderConfig,
    RenderSummary, Swatch,
};

fn render(ds: &Dataset, cfg: &RenderConfig) -> (RecordingBackend, RenderSummary) {
    let renderer = ChartRenderer::new(ds, cfg).expect("valid inputs");
    let mut b = RecordingBackend::new(cfg.width as f32, cfg.height as f32);
    let summary = renderer.render(&mut b);
    (b, summary)
}

fn grid_config() -> RenderConfig {
    RenderConfig { chart_mode: ChartMode::Grid, ..RenderConfig::grid() }
}

#[test]
fn empty_entity_is_skipped() {
    let mut ds = Dataset::new();
    ds.add_entity(Entity::new("ghost", []));
    ds.add_entity(Entity::new("A", [(10, 2000), (20, 2500), (30, 2400)]));
    for cfg in [RenderConfig::default(), grid_config()] {
        let (b, summary) = render(&ds, &cfg);
        assert_eq!(summary.entities_drawn, 1);
        assert_eq!(summary.entities_skipped, 1);
        assert!(!b.texts().any(|t| t == "ghost"));
    }
}

#[test]
fn empty_entity_list_still_renders_frame() {
    let ds = Dataset::new();
    for cfg in [RenderConfig::default(), grid_config()] {
        let (b, summary) = render(&ds, &cfg);
        assert_eq!(summary, RenderSummary::default());
        assert!(b.texts().any(|t| t == cfg.title));
    }
}

#[test]
fn event_without_sample_is_omitted_quietly() {
    let mut ds = Dataset::new();
    ds.add_entity(Entity::new("A", [(10, 2000), (20, 2500), (60, 2400)]));
    ds.events.insert("A".into(), vec![Event::new(99, "Far future"), Event::new(20, "Peak season")]);
    for cfg in [RenderConfig::default(), grid_config()] {
        let (b, summary) = render(&ds, &cfg);
        assert_eq!(summary.events_unmatched, 1);
        assert_eq!(summary.events_drawn, 1);
        assert_eq!(b.markers(Marker::Star).count(), 1);
        assert!(!b.texts().any(|t| t == "Far future"));
    }
}

#[test]
fn line_chart_annotates_peaks() {
    let ds = Dataset::grandmasters();
    let (b, summary) = render(&ds, &RenderConfig::default());
    assert_eq!(summary.entities_drawn, 6);
    let texts: Vec<&str> = b.texts().collect();
    for peak in ["2851", "2882", "2785", "2750", "2810", "2730"] {
        assert!(texts.contains(&peak), "missing peak callout {peak}");
    }
}

#[test]
fn peak_callout_sits_above_first_maximum() {
    let mut ds = Dataset::new();
    ds.add_entity(Entity::new("K", [(20, 2700), (30, 2777), (40, 2777)]));
    let (b, _) = render(&ds, &RenderConfig::default());
    let marker_x: Vec<f32> = b
        .markers(Marker::for_series(0))
        .filter_map(|c| match c {
            DrawCommand::Marker { at, .. } => Some(at.x),
            _ => None,
        })
        .collect();
    let callout = b
        .commands
        .iter()
        .find_map(|c| match c {
            DrawCommand::Text { at, text, .. } if text == "2777" => Some(*at),
            _ => None,
        })
        .expect("peak callout present");
    assert_eq!(callout.x, marker_x[1]);
}

#[test]
fn era_matching_compares_age_with_calendar_year() {
    // Built-in eras are calendar years, so no sample age ever falls inside one.
    let ds = Dataset::grandmasters();
    let (b, _) = render(&ds, &RenderConfig::default());
    assert_eq!(b.markers(Marker::Ring).filter(|c| matches!(c, DrawCommand::Marker { size, .. } if *size > 10.0)).count(), 0);

    let mut ds = Dataset::new();
    ds.add_entity(Entity::new("A", [(20, 2500), (24, 2600), (28, 2650)]));
    ds.eras.insert("A".into(), vec![elo_chart_core::Era::new(22, 28)]);
    let (b, _) = render(&ds, &RenderConfig::default());
    assert_eq!(b.markers(Marker::Ring).count(), 2);
    let (g, _) = render(&ds, &grid_config());
    assert_eq!(g.markers(Marker::Crown).count(), 7);
}

#[test]
fn grid_has_one_cell_per_column_and_row() {
    let ds = Dataset::grandmasters();
    let cfg = RenderConfig { show_legend: false, show_annotations: false, footnote: None, ..grid_config() };
    let (b, _) = render(&ds, &cfg);
    let cells = b
        .commands
        .iter()
        .skip(1) // background
        .filter(|c| matches!(c, DrawCommand::Rect { .. }))
        .count();
    assert_eq!(cells, 6 * 51);
}

#[test]
fn grid_cells_use_the_colour_ramp() {
    let mut ds = Dataset::new();
    ds.add_entity(Entity::new("A", [(10, 2000), (12, 2900)]));
    let cfg = RenderConfig {
        age_range: (10, 12),
        show_legend: false,
        show_annotations: false,
        footnote: None,
        ..grid_config()
    };
    let renderer = ChartRenderer::new(&ds, &cfg).unwrap();
    let ramp = renderer.ramp().clone();
    let mut b = RecordingBackend::new(1200.0, 560.0);
    renderer.render(&mut b);
    let fills: Vec<_> = b
        .commands
        .iter()
        .skip(1)
        .filter_map(|c| match c {
            DrawCommand::Rect { fill, .. } => Some(*fill),
            _ => None,
        })
        .collect();
    assert_eq!(fills, vec![ramp.color_for(2000.0), ramp.color_for(2450.0), ramp.color_for(2900.0)]);
}

#[test]
fn grid_labels_only_major_events() {
    let mut ds = Dataset::new();
    ds.add_entity(Entity::new("A", [(10, 2000), (20, 2500), (30, 2400)]));
    ds.events.insert(
        "A".into(),
        vec![Event::new(10, "Won club title"), Event::new(20, "Became World Champion")],
    );
    let (b, summary) = render(&ds, &grid_config());
    assert_eq!(summary.events_drawn, 2);
    let texts: Vec<&str> = b.texts().collect();
    assert!(texts.contains(&"Became World Champion"));
    assert!(!texts.contains(&"Won club title"));
}

#[test]
fn grid_legend_swatches_follow_the_ramp() {
    let ds = Dataset::grandmasters();
    let cfg = grid_config();
    let renderer = ChartRenderer::new(&ds, &cfg).unwrap();
    let mut b = RecordingBackend::new(1200.0, 560.0);
    renderer.render(&mut b);
    let legend = b.legends().next().expect("legend drawn");
    let top = &legend[0];
    assert_eq!(top.label, "2900");
    assert_eq!(top.swatch, Swatch::Fill(renderer.ramp().color_for(2900.0)));
}

#[test]
fn legend_and_annotations_can_be_disabled() {
    let ds = Dataset::grandmasters();
    let cfg = RenderConfig { show_legend: false, show_annotations: false, ..Default::default() };
    let (b, summary) = render(&ds, &cfg);
    assert_eq!(b.legends().count(), 0);
    let event_color = cfg.theme().event_marker;
    let event_stars = b
        .markers(Marker::Star)
        .filter(|c| matches!(c, DrawCommand::Marker { color, .. } if *color == event_color))
        .count();
    assert_eq!(event_stars, 0);
    assert_eq!(summary.events_drawn, 0);
}

#[test]
fn rendering_is_deterministic() {
    let ds = Dataset::grandmasters();
    for cfg in [
        RenderConfig::default(),
        RenderConfig { interpolation: Some(0.25), ..Default::default() },
        grid_config(),
    ] {
        let (a, sa) = render(&ds, &cfg);
        let (b, sb) = render(&ds, &cfg);
        assert_eq!(sa, sb);
        assert_eq!(a.commands, b.commands);
    }
}

#[test]
fn interpolated_lines_are_denser() {
    let ds = Dataset::grandmasters();
    let longest = |cfg: &RenderConfig| {
        let (b, _) = render(&ds, cfg);
        b.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { points, .. } => Some(points.len()),
                _ => None,
            })
            .max()
            .unwrap_or(0)
    };
    let plain = longest(&RenderConfig::default());
    let smooth = longest(&RenderConfig { interpolation: Some(0.5), ..Default::default() });
    assert_eq!(plain, 12);
    assert_eq!(smooth, 89);
}

#[test]
fn interpolated_line_reaches_last_sample() {
    let mut ds = Dataset::new();
    ds.add_entity(Entity::new("A", [(10, 2200), (20, 2500), (30, 2400)]));
    // 3-year steps do not divide the 20-year span
    let cfg = RenderConfig { interpolation: Some(3.0), ..Default::default() };
    let (b, _) = render(&ds, &cfg);
    let path = b
        .commands
        .iter()
        .find_map(|c| match c {
            DrawCommand::Line { points, .. } if points.len() > 2 => Some(points.clone()),
            _ => None,
        })
        .expect("series polyline");
    let markers: Vec<_> = b
        .markers(Marker::for_series(0))
        .filter_map(|c| match c {
            DrawCommand::Marker { at, .. } => Some(*at),
            _ => None,
        })
        .collect();
    assert_eq!(path.first(), markers.first());
    assert_eq!(path.last(), markers.last());
}
