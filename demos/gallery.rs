//! Shows each chart type in turn. Close a window (or press Q) to see the next.
//!
//! Run with `RUST_LOG=allgraph=debug` to see what each builder draws. An
//! optional argument sets the window's pixels per inch (default 100).

use allgraph::{
    BarOptions, Bins, Charts, HistogramOptions, LineOptions, MarkerSize, PieOptions, ScatterColor,
    ScatterOptions, Window,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut window = Window::new();
    if let Some(arg) = std::env::args().nth(1) {
        window = window.with_pixels_per_inch(arg.parse()?);
    }
    let mut charts = Charts::new(window);

    let x: Vec<f64> = (0..8).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|v| v * v).collect();

    charts.bar_graph(
        &x,
        &y,
        &BarOptions {
            legend: true,
            color: "tab:orange".to_string(),
            ..BarOptions::default()
        },
    )?;

    charts.line_graph(
        &x,
        &y,
        &LineOptions {
            linestyle: "--".to_string(),
            marker: "s".to_string(),
            ..LineOptions::default()
        },
    )?;

    // Deterministic, roughly bell-shaped sample.
    let samples: Vec<f64> = (0..500)
        .map(|i| {
            let u = (i as f64 * 0.618_033_988_75).fract();
            let v = (i as f64 * 0.754_877_666_25).fract();
            (u + v + (u * v).sqrt()) * 2.0
        })
        .collect();
    charts.histogram(
        &samples,
        &HistogramOptions {
            bins: Bins::Count(25),
            ..HistogramOptions::default()
        },
    )?;

    charts.pie_chart(
        &["Rust", "C", "Go", "Zig"],
        &[45.0, 25.0, 20.0, 10.0],
        &PieOptions {
            explode: Some(vec![0.1, 0.0, 0.0, 0.0]),
            shadow: true,
            startangle: 90.0,
            ..PieOptions::default()
        },
    )?;

    let px: Vec<f64> = (0..60).map(|i| (i as f64 * 0.37).sin() * 10.0).collect();
    let py: Vec<f64> = (0..60).map(|i| (i as f64 * 0.23).cos() * 10.0).collect();
    let c: Vec<f64> = px.iter().zip(&py).map(|(a, b)| a.hypot(*b)).collect();
    let s: Vec<f64> = c.iter().map(|r| 10.0 + r * 8.0).collect();
    charts.scatter_plot(
        &px,
        &py,
        &ScatterOptions {
            color: ScatterColor::Values(c),
            s: Some(MarkerSize::PerPoint(s)),
            cmap: Some("plasma".to_string()),
            edgecolors: "black".to_string(),
            alpha: 0.8,
            ..ScatterOptions::default()
        },
    )?;

    Ok(())
}
