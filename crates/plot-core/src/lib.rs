// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the chart configuration model and the surface-driving builder.

pub mod builder;
pub mod config;
pub mod error;
pub mod grid;
pub mod recording;
pub mod series;
pub mod style;
pub mod surface;
pub mod toggle;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use builder::{build_plot, ChartBuilder};
pub use config::{
    load_plot_spec, AxisLabels, ChartConfig, Decorations, Limits, PlotSpec, Viewport, WindowGeometry,
};
pub use error::{BuildError, ConfigurationError};
pub use recording::{RecordingSurface, SurfaceCall};
pub use series::{Series, SeriesSet, StyleOverlay};
pub use style::{Color, LegendLoc, LineStyle, Marker, Rgba, DEFAULT_CYCLE};
pub use surface::{FigureHandle, LineDraw, PlotSurface, RefLineStyle};
pub use toggle::{GridOptions, LegendOptions, OriginAxesOptions, Toggle};
