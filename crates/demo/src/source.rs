// File: crates/demo/src/source.rs
// Summary: Chart sources for the demo: built-in parabolas, CSV columns, or a JSON plot spec.

use std::path::Path;

use anyhow::{bail, Context, Result};
use plot_core::grid::arange_inclusive;
use plot_core::{
    load_plot_spec, AxisLabels, ChartConfig, Color, Decorations, LegendLoc, LegendOptions, Series, Toggle,
};
use tracing::{info, warn};

/// Two mirrored parabolas with a legend, grid and origin axes.
pub fn builtin(label: &str) -> Result<ChartConfig> {
    let x = arange_inclusive(-2.0, 2.0, 0.1);
    let up: Vec<f64> = x.iter().map(|v| v * v).collect();
    let down: Vec<f64> = up.iter().map(|v| -v).collect();
    let red = "red".parse::<Color>()?;
    let blue = "blue".parse::<Color>()?;
    Ok(ChartConfig::new(
        label,
        vec![
            Series::new(x.clone(), up).with_label("x^2").with_color(red),
            Series::new(x, down).with_label("-x^2").with_color(blue),
        ],
    )
    .with_axis_labels(AxisLabels::new("x", "y", "demo"))
    .with_decorations(Decorations {
        legend: Toggle::On(LegendOptions { loc: Some(LegendLoc::UpperCenter) }),
        grid: Toggle::on(),
        origin_axes: Toggle::on(),
    }))
}

/// First column is x, every further column is one y series labeled by its header.
/// Rows with an unparsable cell are skipped.
pub fn from_csv(path: &Path, label: &str) -> Result<ChartConfig> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if headers.len() < 2 {
        bail!("{} needs an x column and at least one y column, found {:?}", path.display(), headers);
    }

    let mut x = Vec::new();
    let mut ys: Vec<Vec<f64>> = vec![Vec::new(); headers.len() - 1];
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let row: Option<Vec<f64>> = (0..headers.len())
            .map(|i| rec.get(i).and_then(|s| s.parse::<f64>().ok()))
            .collect();
        match row {
            Some(row) => {
                x.push(row[0]);
                for (col, v) in ys.iter_mut().zip(&row[1..]) {
                    col.push(*v);
                }
            }
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, path = %path.display(), "skipped rows with unparsable cells");
    }
    if x.is_empty() {
        bail!("no numeric rows in {}", path.display());
    }
    info!(rows = x.len(), series = ys.len(), "loaded CSV");

    let series = headers[1..]
        .iter()
        .zip(ys)
        .map(|(name, y)| Series::new(x.clone(), y).with_label(name.clone()))
        .collect();
    Ok(ChartConfig::new(label, series)
        .with_axis_labels(AxisLabels::new(headers[0].clone(), "", ""))
        .with_decorations(Decorations { legend: Toggle::on(), grid: Toggle::on(), ..Decorations::default() }))
}

pub fn from_spec(path: &Path) -> Result<ChartConfig> {
    let spec = load_plot_spec(path)?;
    ChartConfig::try_from(spec).with_context(|| format!("normalizing plot spec {}", path.display()))
}
