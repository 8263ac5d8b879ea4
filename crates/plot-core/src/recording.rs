// File: crates/plot-core/src/recording.rs
// Summary: In-memory surface that records every call; used for dry runs and tests.

use anyhow::Result;

use crate::config::{Viewport, WindowGeometry};
use crate::style::{Color, LegendLoc, LineStyle, Marker};
use crate::surface::{FigureHandle, LineDraw, PlotSurface, RefLineStyle};

/// Owned copy of a surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    SelectFigure { label: String, fig: FigureHandle },
    WindowGeometry { fig: FigureHandle, geometry: WindowGeometry },
    DrawLine {
        fig: FigureHandle,
        x: Vec<f64>,
        y: Vec<f64>,
        label: Option<String>,
        linestyle: LineStyle,
        color: Color,
        marker: Option<Marker>,
    },
    XLabel { fig: FigureHandle, text: String },
    YLabel { fig: FigureHandle, text: String },
    Title { fig: FigureHandle, text: String },
    Legend { fig: FigureHandle, loc: LegendLoc },
    Grid { fig: FigureHandle, opacity: f64 },
    AxHLine { fig: FigureHandle, y: f64, style: RefLineStyle },
    AxVLine { fig: FigureHandle, x: f64, style: RefLineStyle },
    XLim { fig: FigureHandle, range: Viewport },
    YLim { fig: FigureHandle, range: Viewport },
    Flush,
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    figures: Vec<String>,
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Labels of every figure created so far, in creation order.
    pub fn figures(&self) -> &[String] {
        &self.figures
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Recorded draw calls, in order.
    pub fn draw_calls(&self) -> impl Iterator<Item = &SurfaceCall> {
        self.calls.iter().filter(|c| matches!(c, SurfaceCall::DrawLine { .. }))
    }

    pub fn count(&self, pred: impl Fn(&SurfaceCall) -> bool) -> usize {
        self.calls.iter().filter(|&c| pred(c)).count()
    }

    fn push(&mut self, call: SurfaceCall) -> Result<()> {
        self.calls.push(call);
        Ok(())
    }

    fn check(&self, fig: FigureHandle) -> Result<()> {
        if fig.0 >= self.figures.len() {
            anyhow::bail!("unknown figure handle {}", fig.0);
        }
        Ok(())
    }
}

impl PlotSurface for RecordingSurface {
    fn select_figure(&mut self, label: &str) -> Result<FigureHandle> {
        let idx = match self.figures.iter().position(|f| f == label) {
            Some(i) => i,
            None => {
                self.figures.push(label.to_string());
                self.figures.len() - 1
            }
        };
        let fig = FigureHandle(idx);
        self.push(SurfaceCall::SelectFigure { label: label.to_string(), fig })?;
        Ok(fig)
    }

    fn set_window_geometry(&mut self, fig: FigureHandle, geometry: WindowGeometry) -> Result<()> {
        self.check(fig)?;
        self.push(SurfaceCall::WindowGeometry { fig, geometry })
    }

    fn draw_line(&mut self, fig: FigureHandle, line: &LineDraw<'_>) -> Result<()> {
        self.check(fig)?;
        if line.x.len() != line.y.len() {
            anyhow::bail!("x and y must have the same length, got {} and {}", line.x.len(), line.y.len());
        }
        self.push(SurfaceCall::DrawLine {
            fig,
            x: line.x.to_vec(),
            y: line.y.to_vec(),
            label: line.label.map(str::to_string),
            linestyle: line.linestyle,
            color: line.color,
            marker: line.marker,
        })
    }

    fn set_xlabel(&mut self, fig: FigureHandle, text: &str) -> Result<()> {
        self.check(fig)?;
        self.push(SurfaceCall::XLabel { fig, text: text.to_string() })
    }

    fn set_ylabel(&mut self, fig: FigureHandle, text: &str) -> Result<()> {
        self.check(fig)?;
        self.push(SurfaceCall::YLabel { fig, text: text.to_string() })
    }

    fn set_title(&mut self, fig: FigureHandle, text: &str) -> Result<()> {
        self.check(fig)?;
        self.push(SurfaceCall::Title { fig, text: text.to_string() })
    }

    fn legend(&mut self, fig: FigureHandle, loc: LegendLoc) -> Result<()> {
        self.check(fig)?;
        self.push(SurfaceCall::Legend { fig, loc })
    }

    fn grid(&mut self, fig: FigureHandle, opacity: f64) -> Result<()> {
        self.check(fig)?;
        self.push(SurfaceCall::Grid { fig, opacity })
    }

    fn axhline(&mut self, fig: FigureHandle, y: f64, style: &RefLineStyle) -> Result<()> {
        self.check(fig)?;
        self.push(SurfaceCall::AxHLine { fig, y, style: *style })
    }

    fn axvline(&mut self, fig: FigureHandle, x: f64, style: &RefLineStyle) -> Result<()> {
        self.check(fig)?;
        self.push(SurfaceCall::AxVLine { fig, x, style: *style })
    }

    fn set_xlim(&mut self, fig: FigureHandle, range: Viewport) -> Result<()> {
        self.check(fig)?;
        self.push(SurfaceCall::XLim { fig, range })
    }

    fn set_ylim(&mut self, fig: FigureHandle, range: Viewport) -> Result<()> {
        self.check(fig)?;
        self.push(SurfaceCall::YLim { fig, range })
    }

    fn flush(&mut self) -> Result<()> {
        self.push(SurfaceCall::Flush)
    }
}
