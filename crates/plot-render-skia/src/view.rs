// File: crates/plot-render-skia/src/view.rs
// Summary: Visible data ranges (autoscale + explicit limits) and the data-to-pixel mapping of the plot area.

use crate::figure::Figure;

/// Fraction of the data span added on each side when autoscaling.
pub const MARGIN: f64 = 0.05;

/// Screen margins around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 36, 56)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

fn pad(min: f64, max: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if (max - min).abs() < 1e-12 {
        let half = (min.abs() * 0.05).max(0.5);
        return (min - half, max + half);
    }
    // Halved so spans near f64::MAX do not overflow to infinity.
    let m = (max * 0.5 - min * 0.5) * (2.0 * MARGIN);
    ((min - m).max(f64::MIN), (max + m).min(f64::MAX))
}

/// Position of `v` within `[lo, hi]` as a fraction, finite for any finite inputs.
#[inline]
fn fraction(v: f64, lo: f64, hi: f64) -> f64 {
    (v * 0.5 - lo * 0.5) / (hi * 0.5 - lo * 0.5)
}

impl ViewState {
    /// Data extents of every line and reference line, padded, then overridden by explicit limits.
    pub fn from_figure(fig: &Figure) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for line in &fig.lines {
            for &(x, y) in &line.points {
                if !x.is_finite() || !y.is_finite() { continue; }
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        for h in &fig.hlines { y_min = y_min.min(h.at); y_max = y_max.max(h.at); }
        for v in &fig.vlines { x_min = x_min.min(v.at); x_max = x_max.max(v.at); }

        let (mut x_min, mut x_max) = pad(x_min, x_max);
        let (mut y_min, mut y_max) = pad(y_min, y_max);
        if let Some(l) = fig.xlim { x_min = l.min; x_max = l.max; }
        if let Some(l) = fig.ylim { y_min = l.min; y_max = l.max; }
        if (x_max - x_min).abs() < 1e-12 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-12 { y_max = y_min + 1.0; }
        Self { x_min, x_max, y_min, y_max }
    }
}

/// Plot rectangle in pixels plus the view it displays.
#[derive(Clone, Copy, Debug)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub view: ViewState,
}

impl PlotArea {
    pub fn new(width: i32, height: i32, insets: &Insets, view: ViewState) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width as f32 - insets.right as f32).max(left + 1.0);
        let bottom = (height as f32 - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom, view }
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    #[inline]
    pub fn sx(&self, x: f64) -> f32 {
        self.left + fraction(x, self.view.x_min, self.view.x_max) as f32 * self.width()
    }

    #[inline]
    pub fn sy(&self, y: f64) -> f32 {
        self.bottom - fraction(y, self.view.y_min, self.view.y_max) as f32 * self.height()
    }
}
