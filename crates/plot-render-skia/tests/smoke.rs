// File: crates/plot-render-skia/tests/smoke.rs
// Purpose: End-to-end builder -> SkiaSurface render smoke tests (PNG bytes, files, RGBA buffer).

use plot_core::{
    build_plot, AxisLabels, ChartConfig, Decorations, FigureHandle, LegendOptions, PlotSurface, Series, Toggle,
    WindowGeometry,
};
use plot_render_skia::{RenderOptions, SkiaOptions, SkiaSurface};

fn opts_no_labels() -> SkiaOptions {
    SkiaOptions {
        render: RenderOptions { draw_labels: false, ..RenderOptions::default() },
        output_dir: None,
    }
}

fn demo_config(label: &str) -> ChartConfig {
    let x: Vec<f64> = (0..=40).map(|i| -2.0 + i as f64 * 0.1).collect();
    let y: Vec<f64> = x.iter().map(|v| v * v).collect();
    let neg: Vec<f64> = y.iter().map(|v| -v).collect();
    ChartConfig::new(
        label,
        vec![
            Series::new(x.clone(), y).with_label("x^2"),
            Series::new(x, neg).with_label("-x^2"),
        ],
    )
    .with_axis_labels(AxisLabels::new("x", "y", "parabolas"))
    .with_decorations(Decorations { legend: Toggle::on(), grid: Toggle::on(), origin_axes: Toggle::on() })
    .with_geometry(WindowGeometry { position: (0, 0), size: (320, 240) })
}

#[test]
fn png_bytes_match_geometry() {
    let mut surface = SkiaSurface::new(opts_no_labels());
    let fig = build_plot(&mut surface, &demo_config("smoke")).expect("build");
    let bytes = surface.render_png_bytes(fig).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (320, 240));
}

#[test]
fn flush_writes_one_file_per_figure() {
    let out = std::path::PathBuf::from("target/test_out/flush");
    let _ = std::fs::remove_dir_all(&out);
    let mut surface = SkiaSurface::new(opts_no_labels().with_output_dir(&out));
    build_plot(&mut surface, &demo_config("first plot")).expect("first");
    build_plot(&mut surface, &demo_config("first/plot")).expect("second");
    surface.flush().expect("flush");

    let written = surface.written().to_vec();
    assert_eq!(written.len(), 2);
    assert_eq!(written[0], out.join("first_plot.png"));
    assert_eq!(written[1], out.join("first_plot-2.png"));
    for p in &written {
        assert!(std::fs::metadata(p).expect("output exists").len() > 0);
    }
}

#[test]
fn flush_without_output_dir_is_noop() {
    let mut surface = SkiaSurface::new(opts_no_labels());
    build_plot(&mut surface, &demo_config("quiet")).expect("build");
    surface.flush().expect("flush");
    assert!(surface.written().is_empty());
}

#[test]
fn rgba_buffer_shape_and_background() {
    let mut surface = SkiaSurface::new(opts_no_labels());
    let fig = build_plot(&mut surface, &demo_config("rgba")).expect("build");
    let (px, w, h, stride) = surface.render_rgba8(fig).expect("rgba render");
    assert_eq!((w, h), (320, 240));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, w as usize * 4);
    // Top-left corner is outside the plot area: opaque white light-theme background.
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn series_pixels_use_cycle_color() {
    let mut surface = SkiaSurface::new(opts_no_labels());
    let config = ChartConfig::new("cycle", vec![Series::new(vec![0.0, 1.0], vec![0.5, 0.5])])
        .with_geometry(WindowGeometry { position: (0, 0), size: (200, 160) });
    let fig = build_plot(&mut surface, &config).expect("build");
    let (px, w, _h, stride) = surface.render_rgba8(fig).expect("rgba render");

    // The horizontal line sits in the vertical middle of the plot area.
    let area = plot_render_skia::PlotArea::new(
        w,
        160,
        &plot_render_skia::Insets::default(),
        plot_render_skia::ViewState::from_figure(surface.figure(fig).expect("figure")),
    );
    let cx = ((area.left + area.right) * 0.5) as usize;
    let cy = area.sy(0.5).round() as usize;
    // Anti-aliased tab:blue (#1f77b4) over white: blue channel well above red.
    let bluish = (cy - 2..=cy + 2).any(|row| {
        let i = row * stride + cx * 4;
        px[i + 2] as i32 - px[i] as i32 > 60
    });
    assert!(bluish, "expected the first cycle color around row {cy}");
}

#[test]
fn mismatched_draw_is_rejected() {
    let mut surface = SkiaSurface::headless();
    let fig = surface.select_figure("bad").expect("select");
    let line = plot_core::LineDraw {
        x: &[0.0, 1.0],
        y: &[0.0],
        label: None,
        linestyle: plot_core::LineStyle::Solid,
        color: plot_core::Color::Cycle(0),
        marker: None,
    };
    assert!(surface.draw_line(fig, &line).is_err());
    assert!(surface.render_png_bytes(FigureHandle(9)).is_err());
}

#[test]
fn legend_without_labels_renders_nothing_extra() {
    let unlabeled = |legend: Toggle<LegendOptions>| {
        ChartConfig::new("bare", vec![Series::new(vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 1.0])])
            .with_decorations(Decorations { legend, ..Decorations::default() })
            .with_geometry(WindowGeometry { position: (0, 0), size: (200, 160) })
    };
    let mut surface = SkiaSurface::new(opts_no_labels());
    let with_legend = build_plot(&mut surface, &unlabeled(Toggle::on())).expect("legend on");
    let with_legend = surface.render_png_bytes(with_legend).expect("render legend on");

    let mut plain = SkiaSurface::new(opts_no_labels());
    let without = build_plot(&mut plain, &unlabeled(Toggle::Off)).expect("legend off");
    let without = plain.render_png_bytes(without).expect("render legend off");

    let a = image::load_from_memory(&with_legend).expect("decode").to_rgba8();
    let b = image::load_from_memory(&without).expect("decode").to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}
