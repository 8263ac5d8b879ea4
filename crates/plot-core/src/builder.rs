// File: crates/plot-core/src/builder.rs
// Summary: ChartBuilder: turns a validated ChartConfig into the fixed sequence of surface calls.

use tracing::{debug, info};

use crate::config::ChartConfig;
use crate::error::BuildError;
use crate::style::Color;
use crate::surface::{FigureHandle, LineDraw, PlotSurface, RefLineStyle};

/// Drives a [`PlotSurface`]. Holds no state of its own between renders.
pub struct ChartBuilder<'s, S: PlotSurface + ?Sized> {
    surface: &'s mut S,
}

impl<'s, S: PlotSurface + ?Sized> ChartBuilder<'s, S> {
    pub fn new(surface: &'s mut S) -> Self {
        Self { surface }
    }

    pub fn surface(&mut self) -> &mut S {
        self.surface
    }

    /// Render one chart onto its figure and return the figure handle.
    ///
    /// Order: figure → geometry → series → labels → legend → grid → origin axes → limits.
    /// Configuration errors are raised before the surface sees any call.
    pub fn render(&mut self, config: &ChartConfig) -> Result<FigureHandle, BuildError> {
        config.validate()?;
        let s = &mut *self.surface;

        let fig = s.select_figure(&config.figure_label).map_err(BuildError::Surface)?;
        info!(figure = %config.figure_label, series = config.series.len(), "rendering chart");

        s.set_window_geometry(fig, config.geometry).map_err(BuildError::Surface)?;

        for (i, series) in config.series.iter().enumerate() {
            let line = LineDraw {
                x: &series.x,
                y: &series.y,
                label: series.label.as_deref(),
                linestyle: series.linestyle.unwrap_or_default(),
                color: series.color.unwrap_or(Color::Cycle(i)),
                marker: series.marker,
            };
            debug!(index = i, points = series.len(), label = ?line.label, "draw series");
            s.draw_line(fig, &line).map_err(BuildError::Surface)?;
        }

        let labels = &config.axis_labels;
        s.set_xlabel(fig, &labels.x).map_err(BuildError::Surface)?;
        s.set_ylabel(fig, &labels.y).map_err(BuildError::Surface)?;
        s.set_title(fig, &labels.title).map_err(BuildError::Surface)?;

        let deco = &config.decorations;
        if let Some(legend) = deco.legend.as_on() {
            debug!(loc = %legend.loc(), "legend");
            s.legend(fig, legend.loc()).map_err(BuildError::Surface)?;
        }
        if let Some(grid) = deco.grid.as_on() {
            debug!(opacity = grid.opacity(), "grid");
            s.grid(fig, grid.opacity()).map_err(BuildError::Surface)?;
        }
        if let Some(axes) = deco.origin_axes.as_on() {
            let style = RefLineStyle { linestyle: axes.linestyle(), color: axes.color() };
            debug!(linestyle = %style.linestyle, "origin axes");
            s.axhline(fig, 0.0, &style).map_err(BuildError::Surface)?;
            s.axvline(fig, 0.0, &style).map_err(BuildError::Surface)?;
        }

        if let Some(x) = config.limits.x {
            s.set_xlim(fig, x).map_err(BuildError::Surface)?;
        }
        if let Some(y) = config.limits.y {
            s.set_ylim(fig, y).map_err(BuildError::Surface)?;
        }
        Ok(fig)
    }
}

/// One-shot convenience over [`ChartBuilder::render`].
pub fn build_plot<S: PlotSurface + ?Sized>(
    surface: &mut S,
    config: &ChartConfig,
) -> Result<FigureHandle, BuildError> {
    ChartBuilder::new(surface).render(config)
}
