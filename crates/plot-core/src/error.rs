// File: crates/plot-core/src/error.rs
// Summary: Error taxonomy for chart configuration and surface failures.

use thiserror::Error;

/// Malformed chart input. Every variant is raised before the surface sees a call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("figure label must not be empty")]
    MissingFigureLabel,

    #[error("no series to plot")]
    NoSeries,

    #[error("series count mismatch: {x_arrs} x-arrays for {y_arrs} y-arrays")]
    SeriesCountMismatch { x_arrs: usize, y_arrs: usize },

    #[error("overlay `{overlay}` has {got} entries but there are {expected} series")]
    OverlayLength { overlay: &'static str, got: usize, expected: usize },

    #[error("series {index}: x has {x_len} points but y has {y_len}")]
    PointCountMismatch { index: usize, x_len: usize, y_len: usize },

    #[error("malformed `{toggle}` toggle: {reason}")]
    MalformedToggle { toggle: &'static str, reason: String },

    #[error("`{field}` must have exactly {expected} elements, got {got}")]
    WrongArity { field: &'static str, expected: usize, got: usize },

    #[error("{axis} limits must be finite with min <= max, got ({min}, {max})")]
    InvalidLimits { axis: char, min: f64, max: f64 },

    #[error("figure size must be at least 1x1, got {width}x{height}")]
    InvalidFigureSize { width: f64, height: f64 },

    #[error("grid opacity must lie in [0, 1], got {0}")]
    InvalidOpacity(f64),

    #[error("unknown {kind} `{value}`")]
    UnknownStyle { kind: &'static str, value: String },

    #[error("invalid plot spec: {0}")]
    Spec(String),
}

/// Failure of a single `ChartBuilder::render` call.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("plotting surface failed")]
    Surface(#[source] anyhow::Error),
}

impl BuildError {
    pub fn as_configuration(&self) -> Option<&ConfigurationError> {
        match self {
            BuildError::Configuration(e) => Some(e),
            BuildError::Surface(_) => None,
        }
    }
}
