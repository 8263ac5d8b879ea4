// File: crates/plot-render-skia/src/lib.rs
// Summary: Headless Skia plotting surface; figures accumulate draw calls and render to PNG on demand or flush.

pub mod figure;
pub mod render;
pub mod surface;
pub mod text;
pub mod theme;
pub mod view;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use figure::{Figure, Line, RefLine};
pub use render::RenderOptions;
pub use surface::{sanitize_label, SkiaOptions, SkiaSurface};
pub use theme::Theme;
pub use view::{Insets, PlotArea, ViewState};
