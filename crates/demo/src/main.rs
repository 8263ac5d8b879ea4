// File: crates/demo/src/main.rs
// Summary: Script template: housekeeping banners around a replica job and one chart rendered to PNG.

mod source;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use plot_core::{build_plot, PlotSurface, RecordingSurface};
use plot_render_skia::{theme, RenderOptions, SkiaOptions, SkiaSurface};
use script_logistics::{
    logging, replica_job, Housekeeping, InitialOptions, ReplicaOptions, ScriptInfo, VersionBlock,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "plot-demo", version, about = "Render a line chart to PNG between housekeeping banners")]
struct Args {
    /// JSON plot spec (fig_label, x_arrs, y_arrs, ...)
    #[arg(long, conflicts_with = "csv")]
    spec: Option<PathBuf>,

    /// CSV whose first column is x and remaining columns are y series
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Figure label for the built-in and CSV charts
    #[arg(long, default_value = "demo")]
    label: String,

    /// Directory PNGs are written into
    #[arg(short, long, default_value = "target/plots")]
    out: PathBuf,

    /// Replica job steps (100 ms each)
    #[arg(long, default_value_t = 10)]
    steps: usize,

    /// Show replica job progress
    #[arg(long)]
    progress: bool,

    /// Record surface calls instead of rendering
    #[arg(long)]
    dry_run: bool,

    /// Theme preset: light or dark
    #[arg(long, default_value = "light")]
    theme: String,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log: String,

    /// Only log errors
    #[arg(long)]
    ignore_warnings: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if !args.ignore_warnings {
        logging::init(&args.log);
    }

    let hk = Housekeeping::initial_stdout(&InitialOptions {
        ignore_warnings: args.ignore_warnings,
        script: ScriptInfo::current_exe().unwrap_or_default(),
        versions: Some(VersionBlock::new([
            ("plot-core", plot_core::VERSION),
            ("plot-render-skia", plot_render_skia::VERSION),
            ("plot-demo", env!("CARGO_PKG_VERSION")),
        ])),
        timestamp: true,
    })?;

    let replica = ReplicaOptions { print_progress: args.progress, print_time: true, ..ReplicaOptions::default() };
    replica_job(args.steps, &replica, &mut io::stdout().lock())?;

    let config = match (&args.spec, &args.csv) {
        (Some(spec), _) => source::from_spec(spec)?,
        (None, Some(csv)) => source::from_csv(csv, &args.label)?,
        (None, None) => source::builtin(&args.label)?,
    };
    info!(figure = %config.figure_label, series = config.series.len(), "chart config ready");

    if args.dry_run {
        let mut surface = RecordingSurface::new();
        build_plot(&mut surface, &config)?;
        surface.flush()?;
        println!("recorded {} surface calls", surface.calls().len());
    } else {
        let mut surface = SkiaSurface::new(SkiaOptions {
            render: RenderOptions { theme: theme::find(&args.theme), ..RenderOptions::default() },
            output_dir: Some(args.out.clone()),
        });
        build_plot(&mut surface, &config)?;
        surface.flush()?;
        for path in surface.written() {
            println!("wrote {}", path.display());
        }
    }

    hk.finish_stdout(true)?;
    Ok(())
}
