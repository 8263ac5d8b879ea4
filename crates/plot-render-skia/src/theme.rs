// File: crates/plot-render-skia/src/theme.rs
// Summary: Light/Dark theming for figure chrome (background, frame, text, grid, legend).

use plot_core::{Rgba, DEFAULT_CYCLE};
use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub frame: skia::Color,
    pub text: skia::Color,
    pub tick: skia::Color,
    pub grid: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    /// Palette that `C<n>` colors index into.
    pub cycle: [Rgba; 10],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            frame: skia::Color::from_argb(255, 0, 0, 0),
            text: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 40, 40, 40),
            grid: skia::Color::from_argb(255, 176, 176, 176),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            cycle: DEFAULT_CYCLE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 24, 24, 28),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            text: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            grid: skia::Color::from_argb(255, 90, 90, 100),
            legend_background: skia::Color::from_argb(220, 30, 30, 36),
            legend_border: skia::Color::from_argb(255, 80, 80, 90),
            cycle: DEFAULT_CYCLE,
        }
    }

    /// Resolve a plot color against this theme's cycle.
    pub fn color(&self, c: plot_core::Color) -> skia::Color {
        to_skia(c.resolve(&self.cycle))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

pub fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
