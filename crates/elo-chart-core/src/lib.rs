// File: crates/elo-chart-core/src/lib.rs
// Summary: Core library entry point; exports the data model, derived values and backend-agnostic chart layout.

pub mod annotation;
pub mod axis;
pub mod chart;
pub mod color;
pub mod colormap;
pub mod config;
pub mod dataset;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod interpolate;
pub mod record;
pub mod scale;
pub mod series;
pub mod theme;
pub mod types;
pub mod view;

mod heatmap;
mod line;
mod timeline;

pub use annotation::{Era, Event, Importance, RatingCategory, TimelineEvent};
pub use axis::Axis;
pub use chart::{ChartRenderer, RenderSummary};
pub use color::Rgba;
pub use colormap::{normalize, ColorRamp};
pub use config::{ChartMode, RenderConfig};
pub use dataset::Dataset;
pub use draw::{DrawBackend, LegendAnchor, LegendEntry, LineStyle, Marker, Swatch, TextAlign, TextStyle};
pub use error::ChartError;
pub use geometry::{Point, RectF};
pub use interpolate::CubicSpline;
pub use record::{DrawCommand, RecordingBackend};
pub use series::{Entity, Sample};
pub use theme::Theme;
pub use view::ViewState;
