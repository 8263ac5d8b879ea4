use plot_core::{build_plot, ChartConfig, Decorations, Series, Toggle, WindowGeometry};
use plot_render_skia::{RenderOptions, SkiaOptions, SkiaSurface};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn sine_config(n: usize) -> ChartConfig {
    let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.01).collect();
    let series = (0..3)
        .map(|k| {
            let y = x.iter().map(|v| (v + k as f64).sin()).collect();
            Series::new(x.clone(), y).with_label(format!("s{k}"))
        })
        .collect();
    ChartConfig::new("bench", series)
        .with_decorations(Decorations { legend: Toggle::on(), grid: Toggle::on(), origin_axes: Toggle::on() })
        .with_geometry(WindowGeometry { position: (0, 0), size: (800, 600) })
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("skia_render_png");
    for &n in &[1_000usize, 100_000usize] {
        let mut surface = SkiaSurface::new(SkiaOptions {
            render: RenderOptions { draw_labels: false, ..RenderOptions::default() },
            output_dir: None,
        });
        let fig = build_plot(&mut surface, &sine_config(n)).expect("build");
        group.bench_function(format!("n{n}"), |b| {
            b.iter(|| {
                let bytes = surface.render_png_bytes(fig).expect("render");
                black_box(bytes.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
