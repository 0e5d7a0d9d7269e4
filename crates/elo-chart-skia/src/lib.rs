// File: crates/elo-chart-skia/src/lib.rs
// Summary: Headless PNG rendering pipeline: ChartRenderer layout onto a Skia CPU raster surface.

use std::path::Path;

use anyhow::{Context, Result};

use elo_chart_core::{ChartRenderer, Dataset, RenderConfig, RenderSummary};

pub mod backend;
pub mod text;

pub use backend::SkiaBackend;
pub use text::TextShaper;

/// Validate, lay out and rasterise; the surface is returned un-encoded.
pub fn rasterize(dataset: &Dataset, config: &RenderConfig) -> Result<(SkiaBackend, RenderSummary)> {
    let renderer = ChartRenderer::new(dataset, config)?;
    let theme = config.theme();
    let mut backend = SkiaBackend::new(config.width, config.height, config.dpi, theme.background)?;
    let summary = renderer.render(&mut backend);
    Ok((backend, summary))
}

/// Render to tightly packed RGBA8 pixels: (pixels, width, height, stride).
pub fn render_to_rgba8(dataset: &Dataset, config: &RenderConfig) -> Result<(Vec<u8>, u32, u32, usize)> {
    let (mut backend, _) = rasterize(dataset, config)?;
    let (w, h) = backend.pixel_size();
    let px = backend.read_rgba8()?;
    Ok((px, w as u32, h as u32, w as usize * 4))
}

/// Render to an in-memory PNG.
pub fn render_to_png_bytes(dataset: &Dataset, config: &RenderConfig) -> Result<Vec<u8>> {
    let (mut backend, _) = rasterize(dataset, config)?;
    backend.encode_png()
}

/// Render to `config.output_path`. The PNG is fully encoded before the file is
/// opened, so a failed render never leaves a partial file behind.
pub fn render_to_png(dataset: &Dataset, config: &RenderConfig) -> Result<RenderSummary> {
    let (mut backend, summary) = rasterize(dataset, config)?;
    let bytes = backend.encode_png()?;
    write_output(&config.output_path, &bytes)?;
    let (w, h) = backend.pixel_size();
    tracing::info!(
        path = %config.output_path.display(),
        width = w,
        height = h,
        bytes = bytes.len(),
        "wrote chart"
    );
    Ok(summary)
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
