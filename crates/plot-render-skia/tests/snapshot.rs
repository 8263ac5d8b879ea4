// File: crates/plot-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic figure (no text) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, writes the snapshot so later runs compare against it.
// - Always checks size, background and that both series left colored pixels.

use plot_core::{
    build_plot, ChartConfig, Color, Decorations, GridOptions, LegendLoc, LegendOptions, LineStyle, Marker,
    OriginAxesOptions, Series, Toggle, WindowGeometry,
};
use plot_render_skia::{RenderOptions, SkiaOptions, SkiaSurface};

fn render_bytes() -> Vec<u8> {
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let config = ChartConfig::new(
        "golden",
        vec![
            Series::new(x.clone(), vec![0.0, 1.0, 0.0, 1.5, 1.0]).with_label("a").with_marker(Marker::Circle),
            Series::new(x, vec![-1.0, -0.5, 0.5, 0.0, -1.0])
                .with_label("b")
                .with_linestyle(LineStyle::Dashed)
                .with_color(Color::Cycle(3)),
        ],
    )
    .with_decorations(Decorations {
        legend: Toggle::On(LegendOptions { loc: Some(LegendLoc::LowerRight) }),
        grid: Toggle::On(GridOptions { opacity: Some(0.5) }),
        origin_axes: Toggle::On(OriginAxesOptions::default()),
    })
    .with_geometry(WindowGeometry { position: (0, 0), size: (240, 180) });

    let mut surface = SkiaSurface::new(SkiaOptions {
        render: RenderOptions { draw_labels: false, ..RenderOptions::default() },
        output_dir: None,
    });
    let fig = build_plot(&mut surface, &config).expect("build");
    surface.render_png_bytes(fig).expect("render")
}

#[test]
fn golden_basic_figure() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_figure.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
    assert_eq!((got_img.width(), got_img.height()), (240, 180));
    assert_eq!(got_img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    // tab:blue (series a) and tab:red (C3, series b) both reach the raster.
    let bluish = got_img.pixels().filter(|p| p.0[2] as i32 - p.0[0] as i32 > 60).count();
    let reddish = got_img.pixels().filter(|p| p.0[0] as i32 - p.0[2] as i32 > 60).count();
    assert!(bluish > 20, "series a barely visible ({bluish} px)");
    assert!(reddish > 20, "series b barely visible ({reddish} px)");

    if update || !snap_path.exists() {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Wrote {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    let want = std::fs::read(&snap_path).expect("read snapshot");
    let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
    assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(render_bytes(), render_bytes());
}
