// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a sample data set as grouped and stacked SVG bar charts.
//!
//! Usage: `barchart_demo [DATA.json] [OUT_DIR]`. Without arguments the built-in sample is used
//! and files are written to the current directory. Set `RUST_LOG=barchart_layout=trace` to see
//! every bar.

mod svg;

use std::error::Error;
use std::path::PathBuf;

use barchart_layout::{
    BarChartSpec, BarDiff, BarMode, ChartLayout, Margin, PaintOptions, Series, Value, diff_bars,
    paint,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

const SAMPLE: &str = r#"[
  { "id": "hot dog", "data": [
      { "x": "AD", "y": 72 }, { "x": "AE", "y": 35 }, { "x": "AF", "y": 118 },
      { "x": "AG", "y": 64 }, { "x": "AI", "y": 23 } ] },
  { "id": "burger", "data": [
      { "x": "AD", "y": 40 }, { "x": "AE", "y": "88" }, { "x": "AF", "y": 51 },
      { "x": "AG", "y": 97 } ] },
  { "id": "kebab", "data": [
      { "x": "AD", "y": 19 }, { "x": "AE", "y": 63 }, { "x": "AF", "y": 26 },
      { "x": "AG", "y": 45 }, { "x": "AI", "y": 80 } ] }
]"#;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let json = match args.next() {
        Some(path) => std::fs::read_to_string(&path)?,
        None => SAMPLE.to_owned(),
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".into()));

    let series: Vec<Series> = serde_json::from_str(&json)?;
    info!(series = series.len(), "loaded data");

    let base = BarChartSpec::new(640.0, 400.0).with_margin(Margin {
        top: 20.0,
        right: 20.0,
        bottom: 40.0,
        left: 50.0,
    });

    let mut layouts = Vec::new();
    for (mode, name) in [
        (BarMode::Grouped, "barchart_grouped.svg"),
        (BarMode::Stacked, "barchart_stacked.svg"),
    ] {
        let chart = base.clone().with_mode(mode).layout(&series)?;
        let path = out_dir.join(name);
        std::fs::write(&path, render_svg(&chart))?;
        info!(?mode, bars = chart.bars.bars.len(), path = %path.display(), "wrote chart");
        layouts.push((mode, chart));
    }

    // Re-run the stacked layout with scaled values: keys must pair up one-to-one.
    let scaled = scale_values(&series, 1.5);
    let next = base.clone().layout(&scaled)?;
    if let Some((_, prev)) = layouts.iter().find(|(m, _)| *m == BarMode::Stacked) {
        log_diff(prev, &next);
    }
    Ok(())
}

fn render_svg(chart: &ChartLayout) -> String {
    let mut surface = svg::SvgSurface::new(chart.view, chart.plot);
    paint(&chart.bars, &mut surface, &PaintOptions::default());
    surface.to_svg_string()
}

fn scale_values(series: &[Series], factor: f64) -> Vec<Series> {
    series
        .iter()
        .map(|s| {
            let mut s = s.clone();
            for point in &mut s.data {
                if let Value::Number(v) = point.y {
                    point.y = Value::Number(v * factor);
                }
            }
            s
        })
        .collect()
}

fn log_diff(prev: &ChartLayout, next: &ChartLayout) {
    let (mut enter, mut update, mut exit) = (0, 0, 0);
    for d in diff_bars(&prev.bars.bars, &next.bars.bars) {
        match d {
            BarDiff::Enter { .. } => enter += 1,
            BarDiff::Update { .. } => update += 1,
            BarDiff::Exit { .. } => exit += 1,
        }
    }
    info!(enter, update, exit, "relayout diff");
    if enter + exit > 0 {
        warn!("value-only change moved bar keys");
    }
}
