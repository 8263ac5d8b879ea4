// File: crates/plot-core/src/surface.rs
// Summary: Plotting-surface trait the builder drives, plus the value types passed across it.

use anyhow::Result;

use crate::config::{Viewport, WindowGeometry};
use crate::style::{Color, LegendLoc, LineStyle, Marker};

/// Opaque reference to a figure owned by a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FigureHandle(pub usize);

/// One styled line series, borrowed from the config for the duration of the call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineDraw<'a> {
    pub x: &'a [f64],
    pub y: &'a [f64],
    /// `None` means the series has no legend entry.
    pub label: Option<&'a str>,
    pub linestyle: LineStyle,
    pub color: Color,
    pub marker: Option<Marker>,
}

/// Style of a full-span reference line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RefLineStyle {
    pub linestyle: LineStyle,
    pub color: Color,
}

/// A plotting backend.
///
/// Every drawing call targets the figure returned by `select_figure`. Rendering
/// is only required to become visible after `flush`.
pub trait PlotSurface {
    /// Select the figure named `label`, creating it on first use.
    fn select_figure(&mut self, label: &str) -> Result<FigureHandle>;

    /// Place the figure's window. Surfaces without windows may ignore this.
    fn set_window_geometry(&mut self, fig: FigureHandle, geometry: WindowGeometry) -> Result<()>;

    fn draw_line(&mut self, fig: FigureHandle, line: &LineDraw<'_>) -> Result<()>;

    fn set_xlabel(&mut self, fig: FigureHandle, text: &str) -> Result<()>;
    fn set_ylabel(&mut self, fig: FigureHandle, text: &str) -> Result<()>;
    fn set_title(&mut self, fig: FigureHandle, text: &str) -> Result<()>;

    /// Draw a legend of the labeled series; no labeled series means an empty legend.
    fn legend(&mut self, fig: FigureHandle, loc: LegendLoc) -> Result<()>;

    fn grid(&mut self, fig: FigureHandle, opacity: f64) -> Result<()>;

    /// Horizontal line across the whole x range at `y`.
    fn axhline(&mut self, fig: FigureHandle, y: f64, style: &RefLineStyle) -> Result<()>;
    /// Vertical line across the whole y range at `x`.
    fn axvline(&mut self, fig: FigureHandle, x: f64, style: &RefLineStyle) -> Result<()>;

    fn set_xlim(&mut self, fig: FigureHandle, range: Viewport) -> Result<()>;
    fn set_ylim(&mut self, fig: FigureHandle, range: Viewport) -> Result<()>;

    /// Make every figure visible (window, file, ...). Owned by the caller, not the builder.
    fn flush(&mut self) -> Result<()>;
}
