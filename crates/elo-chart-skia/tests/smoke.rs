// File: crates/elo-chart-skia/tests/smoke.rs
// Purpose: End-to-end rasterisation of the built-in dataset in both chart modes.

use elo_chart_core::{ChartError, Dataset, Entity, RenderConfig};
use elo_chart_skia::{render_to_png, render_to_png_bytes, render_to_rgba8};

const PNG_MAGIC: [u8; 4] = [137, 80, 78, 71];

fn low_dpi(mut cfg: RenderConfig) -> RenderConfig {
    cfg.dpi = 50;
    cfg
}

#[test]
fn line_and_grid_write_png_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ds = Dataset::grandmasters();
    for (name, cfg) in [("line.png", RenderConfig::default()), ("grid.png", RenderConfig::grid())] {
        let mut cfg = low_dpi(cfg);
        cfg.output_path = dir.path().join("nested").join(name);
        let summary = render_to_png(&ds, &cfg).expect("render should succeed");
        assert_eq!(summary.entities_drawn, 6);
        let bytes = std::fs::read(&cfg.output_path).expect("output exists");
        assert!(bytes.starts_with(&PNG_MAGIC), "should be PNG header");
    }
}

#[test]
fn empty_dataset_still_produces_png() {
    let bytes = render_to_png_bytes(&Dataset::new(), &low_dpi(RenderConfig::default())).expect("render bytes");
    assert!(bytes.starts_with(&PNG_MAGIC));
}

#[test]
fn pixel_dimensions_follow_dpi() {
    let cfg = low_dpi(RenderConfig::default());
    let (px, w, h, stride) = render_to_rgba8(&Dataset::grandmasters(), &cfg).expect("rgba");
    // 1200x800 logical units at 50 dpi
    assert_eq!((w, h), (600, 400));
    assert_eq!(stride, w as usize * 4);
    assert_eq!(px.len(), stride * h as usize);

    let decoded = image::load_from_memory(&render_to_png_bytes(&Dataset::grandmasters(), &cfg).expect("png"))
        .expect("decode")
        .to_rgba8();
    assert_eq!(decoded.dimensions(), (w, h));
}

#[test]
fn rendering_is_deterministic() {
    let ds = Dataset::grandmasters();
    for cfg in [RenderConfig::default(), RenderConfig::grid()] {
        let cfg = low_dpi(cfg);
        let (a, ..) = render_to_rgba8(&ds, &cfg).expect("first");
        let (b, ..) = render_to_rgba8(&ds, &cfg).expect("second");
        assert!(a == b, "two renders of the same input differ");
    }
}

#[test]
fn unwritable_output_is_an_io_error() {
    let blocker = tempfile::NamedTempFile::new().expect("temp file");
    let mut cfg = low_dpi(RenderConfig::default());
    // a regular file cannot act as a parent directory
    cfg.output_path = blocker.path().join("child.png");
    let err = render_to_png(&Dataset::grandmasters(), &cfg).expect_err("write must fail");
    assert!(err.downcast_ref::<std::io::Error>().is_some(), "unexpected error: {err:#}");
    assert!(!cfg.output_path.exists());
}

#[test]
fn bad_config_fails_before_any_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = low_dpi(RenderConfig::default());
    cfg.output_path = dir.path().join("never.png");
    cfg.rating_domain = (2900, 2000);
    let err = render_to_png(&Dataset::grandmasters(), &cfg).expect_err("invalid domain");
    assert!(matches!(err.downcast_ref::<ChartError>(), Some(ChartError::InvalidDomain { .. })));
    assert!(!cfg.output_path.exists());
}

#[test]
fn invalid_samples_are_rejected() {
    let mut ds = Dataset::new();
    ds.add_entity(Entity::new("backwards", [(30, 2500), (20, 2400)]));
    let err = render_to_png_bytes(&ds, &low_dpi(RenderConfig::default())).expect_err("unsorted ages");
    assert!(matches!(err.downcast_ref::<ChartError>(), Some(ChartError::InvalidSamples { .. })));
}
