// File: crates/elo-chart-core/src/error.rs
// Summary: Error taxonomy for configuration, dataset validation and IO.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid rating domain: lo ({lo}) must be below hi ({hi})")]
    InvalidDomain { lo: i32, hi: i32 },

    #[error("colour ramp needs at least 2 stops, got {0}")]
    TooFewColorStops(usize),

    #[error("invalid colour '{0}': expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    #[error("dpi must be positive")]
    InvalidDpi,

    #[error("grid granularity must be a positive finite number, got {0}")]
    InvalidGranularity(f64),

    #[error("interpolation resolution must be a positive finite number, got {0}")]
    InvalidResolution(f64),

    #[error("step {step} over a span of {span} needs more than {limit} points")]
    TooManyPoints { step: f64, span: f64, limit: usize },

    #[error("chart size must be positive, got {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("rating categories are not contiguous: {0}")]
    InvalidCategories(String),

    #[error("samples of '{entity}' are invalid: {reason}")]
    InvalidSamples { entity: String, reason: String },

    #[error("entity '{0}' appears more than once")]
    DuplicateEntity(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml deserialization error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
