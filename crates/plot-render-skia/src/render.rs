// File: crates/plot-render-skia/src/render.rs
// Summary: Draws one accumulated figure onto a Skia CPU raster surface and encodes it (PNG / RGBA8).

use anyhow::{anyhow, Result};
use skia_safe as skia;

use plot_core::grid::nice_ticks;
use plot_core::{LegendLoc, LineStyle, Marker};

use crate::figure::{Figure, Line};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::view::{Insets, PlotArea, ViewState};

const LABEL_SIZE: f32 = 14.0;
const TICK_SIZE: f32 = 11.0;
const TITLE_SIZE: f32 = 16.0;
const LEGEND_SIZE: f32 = 12.0;
const LINE_WIDTH: f32 = 1.5;
const MARKER_RADIUS: f32 = 3.5;

pub struct RenderOptions {
    pub theme: Theme,
    pub insets: Insets,
    /// Text is skipped entirely when false (keeps snapshots font-independent).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::default(), insets: Insets::default(), draw_labels: true }
    }
}

/// Render `fig` into a fresh raster surface sized by its geometry.
pub fn render_surface(fig: &Figure, opts: &RenderOptions, text: &TextShaper) -> Result<skia::Surface> {
    let (w, h) = (fig.width(), fig.height());
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
    let canvas = surface.canvas();
    let theme = &opts.theme;

    canvas.clear(theme.background);
    let area = PlotArea::new(w, h, &opts.insets, ViewState::from_figure(fig));
    let plot_rect = skia::Rect::from_ltrb(area.left, area.top, area.right, area.bottom);

    let mut bg = skia::Paint::default();
    bg.set_color(theme.plot_background);
    canvas.draw_rect(plot_rect, &bg);

    let xticks = nice_ticks(area.view.x_min, area.view.x_max, 6);
    let yticks = nice_ticks(area.view.y_min, area.view.y_max, 5);
    if let Some(opacity) = fig.grid {
        draw_grid(canvas, &area, &xticks, &yticks, theme, opacity);
    }

    canvas.save();
    canvas.clip_rect(plot_rect, None, Some(true));
    for line in &fig.lines {
        draw_line_series(canvas, &area, line, theme);
    }
    for h in &fig.hlines {
        let y = area.sy(h.at);
        let paint = stroke_paint(theme.color(h.style.color), h.style.linestyle, 1.0);
        if let Some(paint) = paint {
            canvas.draw_line((area.left, y), (area.right, y), &paint);
        }
    }
    for v in &fig.vlines {
        let x = area.sx(v.at);
        let paint = stroke_paint(theme.color(v.style.color), v.style.linestyle, 1.0);
        if let Some(paint) = paint {
            canvas.draw_line((x, area.top), (x, area.bottom), &paint);
        }
    }
    canvas.restore();

    draw_axes(canvas, &area, &xticks, &yticks, theme, opts.draw_labels.then_some(text));
    if opts.draw_labels {
        draw_titles(canvas, fig, &area, theme, text);
    }
    if let Some(loc) = fig.legend {
        draw_legend(canvas, fig, &area, loc, theme, opts.draw_labels.then_some(text));
    }
    Ok(surface)
}

pub fn render_png_bytes(fig: &Figure, opts: &RenderOptions, text: &TextShaper) -> Result<Vec<u8>> {
    let mut surface = render_surface(fig, opts, text)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Unpremultiplied RGBA8 pixels plus (width, height, stride).
pub fn render_rgba8(fig: &Figure, opts: &RenderOptions, text: &TextShaper) -> Result<(Vec<u8>, i32, i32, usize)> {
    let mut surface = render_surface(fig, opts, text)?;
    let (w, h) = (fig.width(), fig.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut px = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
        return Err(anyhow!("reading back {w}x{h} pixels failed"));
    }
    Ok((px, w, h, stride))
}

// ---- helpers ----------------------------------------------------------------

fn dash_intervals(style: LineStyle, width: f32) -> Option<Vec<f32>> {
    let w = width.max(1.0);
    match style {
        LineStyle::Solid | LineStyle::None => None,
        LineStyle::Dashed => Some(vec![3.7 * w, 1.6 * w]),
        LineStyle::DashDot => Some(vec![6.4 * w, 1.6 * w, w, 1.6 * w]),
        LineStyle::Dotted => Some(vec![w, 1.65 * w]),
    }
}

/// `None` when the style draws nothing.
fn stroke_paint(color: skia::Color, style: LineStyle, width: f32) -> Option<skia::Paint> {
    if style == LineStyle::None {
        return None;
    }
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    if let Some(intervals) = dash_intervals(style, width) {
        paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }
    Some(paint)
}

fn draw_grid(canvas: &skia::Canvas, area: &PlotArea, xticks: &[f64], yticks: &[f64], theme: &Theme, opacity: f64) {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid.with_a(alpha));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for &x in xticks {
        let px = area.sx(x);
        canvas.draw_line((px, area.top), (px, area.bottom), &paint);
    }
    for &y in yticks {
        let py = area.sy(y);
        canvas.draw_line((area.left, py), (area.right, py), &paint);
    }
}

/// Decimal places needed to print every multiple of `step` exactly.
fn tick_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let mut d = 0;
    let mut scaled = step;
    while d < 10 && (scaled - scaled.round()).abs() > 1e-9 * scaled.abs().max(1.0) {
        scaled *= 10.0;
        d += 1;
    }
    d
}

fn format_tick(v: f64, decimals: usize) -> String {
    let s = format!("{v:.decimals$}");
    // Avoid "-0" / "-0.0".
    if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        s.trim_start_matches('-').to_string()
    } else {
        s
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    area: &PlotArea,
    xticks: &[f64],
    yticks: &[f64],
    theme: &Theme,
    text: Option<&TextShaper>,
) {
    let mut frame = skia::Paint::default();
    frame.set_color(theme.frame);
    frame.set_anti_alias(true);
    frame.set_style(skia::paint::Style::Stroke);
    frame.set_stroke_width(1.0);
    canvas.draw_rect(skia::Rect::from_ltrb(area.left, area.top, area.right, area.bottom), &frame);

    let mut tick = skia::Paint::default();
    tick.set_color(theme.tick);
    tick.set_anti_alias(true);
    tick.set_stroke_width(1.0);

    let xdec = tick_decimals(xticks.windows(2).next().map_or(1.0, |w| w[1] - w[0]));
    let ydec = tick_decimals(yticks.windows(2).next().map_or(1.0, |w| w[1] - w[0]));

    for &x in xticks {
        let px = area.sx(x);
        canvas.draw_line((px, area.bottom), (px, area.bottom + 4.0), &tick);
        if let Some(t) = text {
            t.draw(canvas, &format_tick(x, xdec), px, area.bottom + 18.0, Anchor::Center, TICK_SIZE, theme.text, true);
        }
    }
    for &y in yticks {
        let py = area.sy(y);
        canvas.draw_line((area.left - 4.0, py), (area.left, py), &tick);
        if let Some(t) = text {
            t.draw(canvas, &format_tick(y, ydec), area.left - 7.0, py + TICK_SIZE * 0.35, Anchor::Right, TICK_SIZE, theme.text, true);
        }
    }
}

fn draw_titles(canvas: &skia::Canvas, fig: &Figure, area: &PlotArea, theme: &Theme, text: &TextShaper) {
    let cx = (area.left + area.right) * 0.5;
    let cy = (area.top + area.bottom) * 0.5;
    text.draw(canvas, &fig.title, cx, area.top - 10.0, Anchor::Center, TITLE_SIZE, theme.text, false);
    text.draw(canvas, &fig.xlabel, cx, area.bottom + 42.0, Anchor::Center, LABEL_SIZE, theme.text, false);
    text.draw_vertical(canvas, &fig.ylabel, LABEL_SIZE, cy, LABEL_SIZE, theme.text);
}

fn draw_line_series(canvas: &skia::Canvas, area: &PlotArea, line: &Line, theme: &Theme) {
    let color = theme.color(line.color);
    let pts: Vec<(f32, f32)> = line
        .points
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|&(x, y)| (area.sx(x), area.sy(y)))
        .collect();

    if pts.len() >= 2 {
        if let Some(stroke) = stroke_paint(color, line.linestyle, LINE_WIDTH) {
            let mut path = skia::Path::new();
            path.move_to(pts[0]);
            for &p in &pts[1..] {
                path.line_to(p);
            }
            canvas.draw_path(&path, &stroke);
        }
    }
    if let Some(marker) = line.marker {
        for &(x, y) in &pts {
            draw_marker(canvas, marker, x, y, MARKER_RADIUS, color);
        }
    }
}

fn polygon(cx: f32, cy: f32, r: f32, sides: usize, rotation_deg: f32) -> skia::Path {
    let mut path = skia::Path::new();
    for i in 0..sides {
        let a = (rotation_deg + i as f32 * 360.0 / sides as f32).to_radians();
        let p = (cx + r * a.sin(), cy - r * a.cos());
        if i == 0 { path.move_to(p); } else { path.line_to(p); }
    }
    path.close();
    path
}

fn star(cx: f32, cy: f32, r: f32) -> skia::Path {
    let mut path = skia::Path::new();
    for i in 0..10 {
        let rr = if i % 2 == 0 { r } else { r * 0.45 };
        let a = (i as f32 * 36.0).to_radians();
        let p = (cx + rr * a.sin(), cy - rr * a.cos());
        if i == 0 { path.move_to(p); } else { path.line_to(p); }
    }
    path.close();
    path
}

fn draw_marker(canvas: &skia::Canvas, marker: Marker, x: f32, y: f32, r: f32, color: skia::Color) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(color);

    let mut stroke = fill.clone();
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(LINE_WIDTH);

    match marker {
        Marker::Point => { canvas.draw_circle((x, y), r * 0.5, &fill); }
        Marker::Pixel => { canvas.draw_rect(skia::Rect::from_xywh(x - 0.5, y - 0.5, 1.0, 1.0), &fill); }
        Marker::Circle => { canvas.draw_circle((x, y), r, &fill); }
        Marker::Square => { canvas.draw_rect(skia::Rect::from_ltrb(x - r, y - r, x + r, y + r), &fill); }
        Marker::TriangleUp => { canvas.draw_path(&polygon(x, y, r * 1.2, 3, 0.0), &fill); }
        Marker::TriangleRight => { canvas.draw_path(&polygon(x, y, r * 1.2, 3, 90.0), &fill); }
        Marker::TriangleDown => { canvas.draw_path(&polygon(x, y, r * 1.2, 3, 180.0), &fill); }
        Marker::TriangleLeft => { canvas.draw_path(&polygon(x, y, r * 1.2, 3, 270.0), &fill); }
        Marker::Diamond => { canvas.draw_path(&polygon(x, y, r * 1.2, 4, 0.0), &fill); }
        Marker::ThinDiamond => {
            let mut path = skia::Path::new();
            path.move_to((x, y - r * 1.2));
            path.line_to((x + r * 0.6, y));
            path.line_to((x, y + r * 1.2));
            path.line_to((x - r * 0.6, y));
            path.close();
            canvas.draw_path(&path, &fill);
        }
        Marker::Pentagon => { canvas.draw_path(&polygon(x, y, r * 1.1, 5, 0.0), &fill); }
        Marker::Hexagon => { canvas.draw_path(&polygon(x, y, r * 1.1, 6, 0.0), &fill); }
        Marker::Star => { canvas.draw_path(&star(x, y, r * 1.4), &fill); }
        Marker::Plus => {
            canvas.draw_line((x - r, y), (x + r, y), &stroke);
            canvas.draw_line((x, y - r), (x, y + r), &stroke);
        }
        Marker::X => {
            canvas.draw_line((x - r, y - r), (x + r, y + r), &stroke);
            canvas.draw_line((x - r, y + r), (x + r, y - r), &stroke);
        }
    }
}

// ---- legend -----------------------------------------------------------------

const LEGEND_PAD: f32 = 6.0;
const LEGEND_HANDLE: f32 = 24.0;
const LEGEND_ROW: f32 = 18.0;
const LEGEND_OFFSET: f32 = 8.0;

/// Candidate order used by `Best`; ties keep the earlier entry.
const BEST_CANDIDATES: [LegendLoc; 10] = [
    LegendLoc::UpperRight,
    LegendLoc::UpperLeft,
    LegendLoc::LowerLeft,
    LegendLoc::LowerRight,
    LegendLoc::Right,
    LegendLoc::CenterLeft,
    LegendLoc::CenterRight,
    LegendLoc::LowerCenter,
    LegendLoc::UpperCenter,
    LegendLoc::Center,
];

/// Top-left corner of a `w`x`h` legend box placed at `loc`. `Best` is resolved by the caller.
pub(crate) fn legend_origin(area: &PlotArea, loc: LegendLoc, w: f32, h: f32) -> (f32, f32) {
    let left = area.left + LEGEND_OFFSET;
    let right = area.right - LEGEND_OFFSET - w;
    let hcenter = (area.left + area.right - w) * 0.5;
    let top = area.top + LEGEND_OFFSET;
    let bottom = area.bottom - LEGEND_OFFSET - h;
    let vcenter = (area.top + area.bottom - h) * 0.5;
    match loc {
        LegendLoc::Best | LegendLoc::UpperRight => (right, top),
        LegendLoc::UpperLeft => (left, top),
        LegendLoc::LowerLeft => (left, bottom),
        LegendLoc::LowerRight => (right, bottom),
        LegendLoc::Right | LegendLoc::CenterRight => (right, vcenter),
        LegendLoc::CenterLeft => (left, vcenter),
        LegendLoc::LowerCenter => (hcenter, bottom),
        LegendLoc::UpperCenter => (hcenter, top),
        LegendLoc::Center => (hcenter, vcenter),
    }
}

/// Pick the candidate box that covers the fewest data points.
pub(crate) fn resolve_best(fig: &Figure, area: &PlotArea, w: f32, h: f32) -> LegendLoc {
    let mut best = (LegendLoc::UpperRight, usize::MAX);
    for loc in BEST_CANDIDATES {
        let (l, t) = legend_origin(area, loc, w, h);
        let covered = fig
            .lines
            .iter()
            .flat_map(|line| line.points.iter())
            .filter(|(x, y)| {
                let (px, py) = (area.sx(*x), area.sy(*y));
                px >= l && px <= l + w && py >= t && py <= t + h
            })
            .count();
        if covered < best.1 {
            best = (loc, covered);
        }
    }
    best.0
}

fn draw_legend(
    canvas: &skia::Canvas,
    fig: &Figure,
    area: &PlotArea,
    loc: LegendLoc,
    theme: &Theme,
    text: Option<&TextShaper>,
) {
    let entries: Vec<(&str, &Line)> = fig.legend_entries().collect();
    if entries.is_empty() {
        return;
    }
    let label_w = entries
        .iter()
        .map(|(label, _)| match text {
            Some(t) => t.measure_width(label, LEGEND_SIZE, false),
            None => label.chars().count() as f32 * LEGEND_SIZE * 0.55,
        })
        .fold(0.0f32, f32::max);
    let w = LEGEND_PAD * 3.0 + LEGEND_HANDLE + label_w;
    let h = LEGEND_PAD * 2.0 + LEGEND_ROW * entries.len() as f32;
    let loc = if loc == LegendLoc::Best { resolve_best(fig, area, w, h) } else { loc };
    let (l, t) = legend_origin(area, loc, w, h);
    let rect = skia::Rect::from_xywh(l, t, w, h);

    let mut bg = skia::Paint::default();
    bg.set_color(theme.legend_background);
    bg.set_anti_alias(true);
    canvas.draw_round_rect(rect, 3.0, 3.0, &bg);
    let mut border = bg.clone();
    border.set_color(theme.legend_border);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    canvas.draw_round_rect(rect, 3.0, 3.0, &border);

    for (i, (label, line)) in entries.iter().enumerate() {
        let cy = t + LEGEND_PAD + LEGEND_ROW * (i as f32 + 0.5);
        let hx0 = l + LEGEND_PAD;
        let hx1 = hx0 + LEGEND_HANDLE;
        let color = theme.color(line.color);
        if let Some(stroke) = stroke_paint(color, line.linestyle, LINE_WIDTH) {
            canvas.draw_line((hx0, cy), (hx1, cy), &stroke);
        }
        if let Some(marker) = line.marker {
            draw_marker(canvas, marker, (hx0 + hx1) * 0.5, cy, MARKER_RADIUS, color);
        }
        if let Some(t) = text {
            t.draw(canvas, label, hx1 + LEGEND_PAD, cy + LEGEND_SIZE * 0.35, Anchor::Left, LEGEND_SIZE, theme.text, false);
        }
    }
}
