// File: crates/elo-chart/src/main.rs
// Summary: Renders the built-in grandmaster dataset as a line chart and a grid heatmap.
// Usage: elo-chart [config.toml]
//   With a config file, renders that single chart. Without, renders both
//   default views into target/out/. RUST_LOG controls verbosity.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use elo_chart_core::{Dataset, RenderConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let configs = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => vec![RenderConfig::load(&path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?],
        None => default_configs(Path::new("target/out")),
    };

    let dataset = Dataset::grandmasters();
    for cfg in &configs {
        let summary = elo_chart_skia::render_to_png(&dataset, cfg)
            .with_context(|| format!("rendering {:?} chart failed", cfg.chart_mode))?;
        tracing::info!(
            mode = ?cfg.chart_mode,
            drawn = summary.entities_drawn,
            skipped = summary.entities_skipped,
            events = summary.events_drawn,
            unmatched = summary.events_unmatched,
            "rendered"
        );
        println!("Saved {}", cfg.output_path.display());
    }
    Ok(())
}

fn default_configs(out_dir: &Path) -> Vec<RenderConfig> {
    [RenderConfig::default(), RenderConfig::grid()]
        .into_iter()
        .map(|mut cfg| {
            cfg.output_path = out_dir.join(&cfg.output_path);
            cfg
        })
        .collect()
}
