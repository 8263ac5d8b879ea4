// File: crates/plot-render-skia/src/figure.rs
// Summary: Per-figure state accumulated from surface calls until the figure is rendered.

use plot_core::{Color, LegendLoc, LineDraw, LineStyle, Marker, RefLineStyle, Viewport, WindowGeometry};

/// Owned copy of one drawn series.
#[derive(Clone, Debug)]
pub struct Line {
    pub points: Vec<(f64, f64)>,
    pub label: Option<String>,
    pub linestyle: LineStyle,
    pub color: Color,
    pub marker: Option<Marker>,
}

impl Line {
    pub fn from_draw(line: &LineDraw<'_>) -> Self {
        Self {
            points: line.x.iter().copied().zip(line.y.iter().copied()).collect(),
            label: line.label.map(str::to_string),
            linestyle: line.linestyle,
            color: line.color,
            marker: line.marker,
        }
    }

    /// Labels starting with `_` are kept out of the legend.
    pub fn legend_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty() && !l.starts_with('_'))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RefLine {
    pub at: f64,
    pub style: RefLineStyle,
}

#[derive(Clone, Debug)]
pub struct Figure {
    pub label: String,
    pub geometry: WindowGeometry,
    pub lines: Vec<Line>,
    pub xlabel: String,
    pub ylabel: String,
    pub title: String,
    pub legend: Option<LegendLoc>,
    /// Grid alpha when enabled.
    pub grid: Option<f64>,
    pub hlines: Vec<RefLine>,
    pub vlines: Vec<RefLine>,
    pub xlim: Option<Viewport>,
    pub ylim: Option<Viewport>,
}

impl Figure {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            geometry: WindowGeometry::default(),
            lines: Vec::new(),
            xlabel: String::new(),
            ylabel: String::new(),
            title: String::new(),
            legend: None,
            grid: None,
            hlines: Vec::new(),
            vlines: Vec::new(),
            xlim: None,
            ylim: None,
        }
    }

    pub fn width(&self) -> i32 {
        self.geometry.size.0.max(1) as i32
    }

    pub fn height(&self) -> i32 {
        self.geometry.size.1.max(1) as i32
    }

    pub fn legend_entries(&self) -> impl Iterator<Item = (&str, &Line)> {
        self.lines.iter().filter_map(|l| l.legend_label().map(|t| (t, l)))
    }
}
