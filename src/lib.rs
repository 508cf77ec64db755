//! allgraph - one-call charts in a native window
//!
//! Five builders, one per chart type: [`make_bar_graph`], [`make_line_graph`],
//! [`make_histogram`], [`make_pie_chart`] and [`make_scatter_plot`]. Each takes
//! the data and an options struct whose `Default` holds the standard styling,
//! draws a single 10x6 inch figure and blocks until its window is closed.
//!
//! ```no_run
//! use allgraph::{make_bar_graph, BarOptions};
//!
//! make_bar_graph(&[1.0, 2.0, 3.0], &[10.0, 20.0, 30.0], &BarOptions::default())?;
//! # Ok::<(), allgraph::ChartError>(())
//! ```
//!
//! [`Charts`] runs the same builders against any [`Backend`]; the
//! [`Recorder`] backend keeps figures in memory instead of showing them.
//!
//! Paired x/y inputs of different lengths fail with
//! [`ChartError::LengthMismatch`] before anything is drawn. Every other
//! problem (unknown color, bad bins, negative pie sizes, ...) is reported as
//! the [`PlotError`] raised while drawing.
//!
//! # Threading
//!
//! The window backend runs a process-wide event loop, on most platforms only
//! from the main thread. Builders must be called one after another; nothing in
//! the crate serializes concurrent calls.

pub mod backend;
pub mod charts;
pub mod config;
pub mod error;
pub mod figure;
pub mod stats;
pub mod style;

mod gui;

pub use backend::{Backend, Recorder, Window};
pub use charts::{
    make_bar_graph, make_histogram, make_line_graph, make_pie_chart, make_scatter_plot, Charts,
};
pub use config::{
    BarAlign, BarOptions, BinRule, Bins, HistAlign, HistType, HistogramOptions, LineOptions,
    MarkerSize, Normalize, Orientation, PieOptions, ScatterColor, ScatterOptions, TextProps,
    WedgeProps,
};
pub use error::{ChartError, PlotError, Result};
pub use figure::{Figure, FigureSize, DEFAULT_FIGSIZE};
