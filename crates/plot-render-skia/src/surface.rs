// File: crates/plot-render-skia/src/surface.rs
// Summary: SkiaSurface, a headless PlotSurface that keeps a figure registry and writes PNGs on flush.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use plot_core::{FigureHandle, LegendLoc, LineDraw, PlotSurface, RefLineStyle, Viewport, WindowGeometry};

use crate::figure::{Figure, Line, RefLine};
use crate::render::{self, RenderOptions};
use crate::text::TextShaper;

#[derive(Default)]
pub struct SkiaOptions {
    pub render: RenderOptions,
    /// Directory `flush` writes into; `None` makes `flush` a no-op.
    pub output_dir: Option<PathBuf>,
}

impl SkiaOptions {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }
}

pub struct SkiaSurface {
    opts: SkiaOptions,
    figures: Vec<Figure>,
    text: TextShaper,
    written: Vec<PathBuf>,
}

impl SkiaSurface {
    pub fn new(opts: SkiaOptions) -> Self {
        Self { opts, figures: Vec::new(), text: TextShaper::new(), written: Vec::new() }
    }

    /// Surface without an output directory; figures are only reachable via the render methods.
    pub fn headless() -> Self {
        Self::new(SkiaOptions::default())
    }

    pub fn options(&self) -> &SkiaOptions {
        &self.opts
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn figure(&self, fig: FigureHandle) -> Result<&Figure> {
        self.figures.get(fig.0).with_context(|| format!("unknown figure handle {}", fig.0))
    }

    fn figure_mut(&mut self, fig: FigureHandle) -> Result<&mut Figure> {
        self.figures.get_mut(fig.0).with_context(|| format!("unknown figure handle {}", fig.0))
    }

    pub fn figure_by_label(&self, label: &str) -> Option<FigureHandle> {
        self.figures.iter().position(|f| f.label == label).map(FigureHandle)
    }

    /// Paths written by previous `flush` calls, oldest first.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn render_png_bytes(&self, fig: FigureHandle) -> Result<Vec<u8>> {
        render::render_png_bytes(self.figure(fig)?, &self.opts.render, &self.text)
    }

    /// Unpremultiplied RGBA8 pixels plus (width, height, stride).
    pub fn render_rgba8(&self, fig: FigureHandle) -> Result<(Vec<u8>, i32, i32, usize)> {
        render::render_rgba8(self.figure(fig)?, &self.opts.render, &self.text)
    }

    /// Render the figure to a PNG at `path`, creating parent directories.
    pub fn render_to_png(&self, fig: FigureHandle, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.render_png_bytes(fig)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

/// File stem for a figure label: anything outside `[A-Za-z0-9_-]` becomes `_`.
pub fn sanitize_label(label: &str) -> String {
    let s: String = label
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if s.is_empty() { "figure".to_string() } else { s }
}

impl PlotSurface for SkiaSurface {
    fn select_figure(&mut self, label: &str) -> Result<FigureHandle> {
        if let Some(fig) = self.figure_by_label(label) {
            debug!(label, handle = fig.0, "reselect figure");
            return Ok(fig);
        }
        self.figures.push(Figure::new(label));
        let fig = FigureHandle(self.figures.len() - 1);
        debug!(label, handle = fig.0, "new figure");
        Ok(fig)
    }

    fn set_window_geometry(&mut self, fig: FigureHandle, geometry: WindowGeometry) -> Result<()> {
        if geometry.size.0 == 0 || geometry.size.1 == 0 {
            bail!("figure size must be non-zero, got {}x{}", geometry.size.0, geometry.size.1);
        }
        debug!(
            x = geometry.position.0,
            y = geometry.position.1,
            "headless surface ignores window position"
        );
        self.figure_mut(fig)?.geometry = geometry;
        Ok(())
    }

    fn draw_line(&mut self, fig: FigureHandle, line: &LineDraw<'_>) -> Result<()> {
        if line.x.len() != line.y.len() {
            bail!("x and y must have the same length, got {} and {}", line.x.len(), line.y.len());
        }
        debug!(points = line.x.len(), label = line.label, "draw_line");
        self.figure_mut(fig)?.lines.push(Line::from_draw(line));
        Ok(())
    }

    fn set_xlabel(&mut self, fig: FigureHandle, text: &str) -> Result<()> {
        self.figure_mut(fig)?.xlabel = text.to_string();
        Ok(())
    }

    fn set_ylabel(&mut self, fig: FigureHandle, text: &str) -> Result<()> {
        self.figure_mut(fig)?.ylabel = text.to_string();
        Ok(())
    }

    fn set_title(&mut self, fig: FigureHandle, text: &str) -> Result<()> {
        self.figure_mut(fig)?.title = text.to_string();
        Ok(())
    }

    fn legend(&mut self, fig: FigureHandle, loc: LegendLoc) -> Result<()> {
        self.figure_mut(fig)?.legend = Some(loc);
        Ok(())
    }

    fn grid(&mut self, fig: FigureHandle, opacity: f64) -> Result<()> {
        self.figure_mut(fig)?.grid = Some(opacity);
        Ok(())
    }

    fn axhline(&mut self, fig: FigureHandle, y: f64, style: &RefLineStyle) -> Result<()> {
        self.figure_mut(fig)?.hlines.push(RefLine { at: y, style: *style });
        Ok(())
    }

    fn axvline(&mut self, fig: FigureHandle, x: f64, style: &RefLineStyle) -> Result<()> {
        self.figure_mut(fig)?.vlines.push(RefLine { at: x, style: *style });
        Ok(())
    }

    fn set_xlim(&mut self, fig: FigureHandle, range: Viewport) -> Result<()> {
        self.figure_mut(fig)?.xlim = Some(range);
        Ok(())
    }

    fn set_ylim(&mut self, fig: FigureHandle, range: Viewport) -> Result<()> {
        self.figure_mut(fig)?.ylim = Some(range);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let Some(dir) = self.opts.output_dir.clone() else {
            debug!(figures = self.figures.len(), "flush without output dir");
            return Ok(());
        };
        let mut taken = HashSet::new();
        for idx in 0..self.figures.len() {
            let stem = sanitize_label(&self.figures[idx].label);
            let mut name = stem.clone();
            let mut n = 2;
            while !taken.insert(name.clone()) {
                name = format!("{stem}-{n}");
                n += 1;
            }
            let path = dir.join(format!("{name}.png"));
            self.render_to_png(FigureHandle(idx), &path)?;
            info!(figure = %self.figures[idx].label, path = %path.display(), "figure written");
            self.written.push(path);
        }
        Ok(())
    }
}
