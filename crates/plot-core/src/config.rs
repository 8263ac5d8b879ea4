// File: crates/plot-core/src/config.rs
// Summary: Chart configuration (typed, with defaults) and the flat JSON plot spec it is normalized from.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigurationError;
use crate::series::{Series, SeriesSet, StyleOverlay};
use crate::style::{Color, LineStyle, Marker};
use crate::toggle::{
    grid_from_value, legend_from_value, origin_axes_from_value, GridOptions, LegendOptions,
    OriginAxesOptions, Toggle,
};

/// Default window position (x, y) in pixels.
pub const DEFAULT_FIG_LOC: (i32, i32) = (600, 250);
/// Default window size (width, height) in pixels.
pub const DEFAULT_FIG_SIZE: (u32, u32) = (640, 520);

/// Display window placement, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowGeometry {
    pub position: (i32, i32),
    pub size: (u32, u32),
}

fn check_size(width: f64, height: f64) -> Result<(), ConfigurationError> {
    if !(width >= 1.0 && height >= 1.0) {
        return Err(ConfigurationError::InvalidFigureSize { width, height });
    }
    Ok(())
}

impl WindowGeometry {
    fn check(&self) -> Result<(), ConfigurationError> {
        check_size(f64::from(self.size.0), f64::from(self.size.1))
    }
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self { position: DEFAULT_FIG_LOC, size: DEFAULT_FIG_SIZE }
    }
}

/// An axis range. Contract: finite, `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub min: f64,
    pub max: f64,
}

impl Viewport {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn check(&self, axis: char) -> Result<(), ConfigurationError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ConfigurationError::InvalidLimits { axis, min: self.min, max: self.max });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Limits {
    pub x: Option<Viewport>,
    pub y: Option<Viewport>,
}

/// Empty strings are valid labels and are still applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
    pub title: String,
}

impl AxisLabels {
    pub fn new(x: impl Into<String>, y: impl Into<String>, title: impl Into<String>) -> Self {
        Self { x: x.into(), y: y.into(), title: title.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Decorations {
    pub legend: Toggle<LegendOptions>,
    pub grid: Toggle<GridOptions>,
    pub origin_axes: Toggle<OriginAxesOptions>,
}

/// Everything a single render call needs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartConfig {
    pub figure_label: String,
    pub series: Vec<Series>,
    pub axis_labels: AxisLabels,
    pub decorations: Decorations,
    pub limits: Limits,
    pub geometry: WindowGeometry,
}

impl ChartConfig {
    pub fn new(figure_label: impl Into<String>, series: Vec<Series>) -> Self {
        Self { figure_label: figure_label.into(), series, ..Self::default() }
    }

    /// Build from parallel arrays plus overlays, validating pairing lengths.
    pub fn from_parallel(
        figure_label: impl Into<String>,
        set: SeriesSet,
        overlay: StyleOverlay,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::new(figure_label, set.into_series(overlay)?))
    }

    pub fn with_axis_labels(mut self, labels: AxisLabels) -> Self {
        self.axis_labels = labels;
        self
    }

    pub fn with_decorations(mut self, decorations: Decorations) -> Self {
        self.decorations = decorations;
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_geometry(mut self, geometry: WindowGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Check every invariant up front so a bad config never reaches the surface.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.figure_label.is_empty() {
            return Err(ConfigurationError::MissingFigureLabel);
        }
        if self.series.is_empty() {
            return Err(ConfigurationError::NoSeries);
        }
        for (i, s) in self.series.iter().enumerate() {
            s.check_lengths(i)?;
        }
        if let Some(grid) = self.decorations.grid.as_on() {
            let opacity = grid.opacity();
            if !(0.0..=1.0).contains(&opacity) {
                return Err(ConfigurationError::InvalidOpacity(opacity));
            }
        }
        self.geometry.check()?;
        if let Some(x) = &self.limits.x {
            x.check('x')?;
        }
        if let Some(y) = &self.limits.y {
            y.check('y')?;
        }
        Ok(())
    }
}

fn toggle_off() -> Value {
    Value::Bool(false)
}

/// The flat parameter bag of a plot call, as read from JSON.
///
/// Parallel `x_arrs`/`y_arrs`, optional per-series overlays, and loose
/// `legend`/`grid`/`axes` toggles that are either a boolean or a list whose
/// first element is the boolean.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotSpec {
    pub fig_label: String,
    pub x_arrs: Vec<Vec<f64>>,
    pub y_arrs: Vec<Vec<f64>>,
    #[serde(default)]
    pub plot_labels: Option<Vec<String>>,
    #[serde(default)]
    pub fig_loc: Option<Vec<f64>>,
    #[serde(default)]
    pub fig_size: Option<Vec<f64>>,
    #[serde(default)]
    pub x_label: String,
    #[serde(default)]
    pub y_label: String,
    #[serde(default)]
    pub plot_title: String,
    #[serde(default)]
    pub linestyles: Option<Vec<String>>,
    #[serde(default)]
    pub plot_colors: Option<Vec<String>>,
    #[serde(default)]
    pub plot_markers: Option<Vec<String>>,
    #[serde(default = "toggle_off")]
    pub legend: Value,
    #[serde(default = "toggle_off")]
    pub axes: Value,
    #[serde(default = "toggle_off")]
    pub grid: Value,
    #[serde(default)]
    pub y_lim: Option<Vec<f64>>,
    #[serde(default)]
    pub x_lim: Option<Vec<f64>>,
}

impl PlotSpec {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(s).map_err(|e| ConfigurationError::Spec(e.to_string()))
    }
}

/// Read a JSON plot spec from disk.
pub fn load_plot_spec(path: &Path) -> anyhow::Result<PlotSpec> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading plot spec {}", path.display()))?;
    let spec = PlotSpec::from_json_str(&contents)
        .with_context(|| format!("parsing plot spec {}", path.display()))?;
    Ok(spec)
}

fn pair(field: &'static str, v: &[f64]) -> Result<(f64, f64), ConfigurationError> {
    match v {
        [a, b] => Ok((*a, *b)),
        _ => Err(ConfigurationError::WrongArity { field, expected: 2, got: v.len() }),
    }
}

fn parse_all<T>(
    values: Option<Vec<String>>,
    parse: impl Fn(&str) -> Result<T, ConfigurationError>,
) -> Result<Option<Vec<T>>, ConfigurationError> {
    values.map(|v| v.iter().map(|s| parse(s)).collect::<Result<Vec<T>, _>>()).transpose()
}

fn geometry_from(fig_loc: Option<&[f64]>, fig_size: Option<&[f64]>) -> Result<WindowGeometry, ConfigurationError> {
    let mut geometry = WindowGeometry::default();
    if let Some(loc) = fig_loc {
        let (x, y) = pair("fig_loc", loc)?;
        geometry.position = (x.round() as i32, y.round() as i32);
    }
    if let Some(size) = fig_size {
        let (w, h) = pair("fig_size", size)?;
        check_size(w, h)?;
        geometry.size = (w.round() as u32, h.round() as u32);
    }
    Ok(geometry)
}

impl TryFrom<PlotSpec> for ChartConfig {
    type Error = ConfigurationError;

    fn try_from(spec: PlotSpec) -> Result<Self, Self::Error> {
        let overlay = StyleOverlay {
            labels: spec.plot_labels,
            linestyles: parse_all(spec.linestyles, |s| s.parse::<LineStyle>())?,
            colors: parse_all(spec.plot_colors, |s| s.parse::<Color>())?,
            markers: parse_all(spec.plot_markers, Marker::parse_optional)?,
        };
        let series = SeriesSet::new(spec.x_arrs, spec.y_arrs).into_series(overlay)?;

        let decorations = Decorations {
            legend: legend_from_value(&spec.legend)?,
            grid: grid_from_value(&spec.grid)?,
            origin_axes: origin_axes_from_value(&spec.axes)?,
        };

        let limits = Limits {
            x: spec.x_lim.as_deref().map(|v| pair("x_lim", v)).transpose()?.map(|(a, b)| Viewport::new(a, b)),
            y: spec.y_lim.as_deref().map(|v| pair("y_lim", v)).transpose()?.map(|(a, b)| Viewport::new(a, b)),
        };

        let config = ChartConfig {
            figure_label: spec.fig_label,
            series,
            axis_labels: AxisLabels::new(spec.x_label, spec.y_label, spec.plot_title),
            decorations,
            limits,
            geometry: geometry_from(spec.fig_loc.as_deref(), spec.fig_size.as_deref())?,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ChartConfig {
        ChartConfig::new("fig", vec![Series::new(vec![0.0, 1.0], vec![0.0, 1.0])])
    }

    #[test]
    fn defaults_match_script_helper() {
        let g = WindowGeometry::default();
        assert_eq!(g.position, (600, 250));
        assert_eq!(g.size, (640, 520));
        let c = config();
        assert_eq!(c.axis_labels, AxisLabels::default());
        assert!(!c.decorations.legend.is_on());
        assert!(c.limits.x.is_none() && c.limits.y.is_none());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_inputs() {
        let mut c = config();
        c.figure_label.clear();
        assert_eq!(c.validate(), Err(ConfigurationError::MissingFigureLabel));

        let c = ChartConfig::new("fig", Vec::new());
        assert_eq!(c.validate(), Err(ConfigurationError::NoSeries));

        let c = ChartConfig::new("fig", vec![Series::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0])]);
        assert_eq!(
            c.validate(),
            Err(ConfigurationError::PointCountMismatch { index: 0, x_len: 3, y_len: 2 })
        );

        let c = config().with_limits(Limits { x: Some(Viewport::new(1.0, -1.0)), y: None });
        assert!(matches!(c.validate(), Err(ConfigurationError::InvalidLimits { axis: 'x', .. })));

        let mut c = config();
        c.decorations.grid = Toggle::On(GridOptions { opacity: Some(1.5) });
        assert_eq!(c.validate(), Err(ConfigurationError::InvalidOpacity(1.5)));
    }

    #[test]
    fn geometry_arrays_need_two_elements() {
        let err = geometry_from(Some(&[1.0, 2.0, 3.0][..]), None).unwrap_err();
        assert_eq!(err, ConfigurationError::WrongArity { field: "fig_loc", expected: 2, got: 3 });
        let g = geometry_from(Some(&[10.4, 20.6][..]), Some(&[320.0, 240.0][..])).unwrap();
        assert_eq!(g, WindowGeometry { position: (10, 21), size: (320, 240) });
    }

    #[test]
    fn zero_size_is_rejected_on_both_paths() {
        let c = config().with_geometry(WindowGeometry { position: (0, 0), size: (0, 240) });
        assert_eq!(c.validate(), Err(ConfigurationError::InvalidFigureSize { width: 0.0, height: 240.0 }));
        let err = geometry_from(None, Some(&[0.0, 0.0][..])).unwrap_err();
        assert_eq!(err, ConfigurationError::InvalidFigureSize { width: 0.0, height: 0.0 });
    }
}
