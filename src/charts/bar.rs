//! Bar graph builder.

use tracing::debug;

use super::{check_paired, Charts};
use crate::backend::Backend;
use crate::config::BarOptions;
use crate::error::Result;
use crate::figure::{Surface, DEFAULT_FIGSIZE};

impl<B: Backend> Charts<B> {
    /// Draw one bar per (x, y) pair.
    ///
    /// With `options.legend` each bar gets a legend entry "Bar 1", "Bar 2", ...
    pub fn bar_graph(&mut self, x: &[f64], y: &[f64], options: &BarOptions) -> Result<()> {
        check_paired(x, y)?;
        debug!(bars = x.len(), legend = options.legend, "building bar graph");

        let mut surface = Surface::open(&mut self.backend, DEFAULT_FIGSIZE);
        let handles = surface.bar(x, y, options)?;
        surface.title(&options.title, options.fontsize);
        surface.xlabel(&options.xlabel, options.fontsize);
        surface.ylabel(&options.ylabel, options.fontsize);
        if options.legend {
            let labels = (1..=handles.len()).map(|i| format!("Bar {}", i));
            surface.legend(&handles, labels, options.fontsize);
        }
        surface.grid(true);
        surface.show()?;
        Ok(())
    }
}

/// Show a bar graph in a window and wait for it to be closed.
pub fn make_bar_graph(x: &[f64], y: &[f64], options: &BarOptions) -> Result<()> {
    Charts::window().bar_graph(x, y, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Recorder;
    use crate::error::{ChartError, PlotError};
    use crate::style::parse_color;

    #[test]
    fn test_bar_graph_defaults() {
        let mut charts = Charts::new(Recorder::new());
        charts
            .bar_graph(&[1.0, 2.0, 3.0], &[10.0, 20.0, 30.0], &BarOptions::default())
            .unwrap();

        let figure = charts.backend().last().unwrap();
        assert_eq!(figure.size, DEFAULT_FIGSIZE);
        assert_eq!(figure.title.as_ref().unwrap().content, "Bar Graph");
        assert_eq!(figure.x_label.as_ref().unwrap().content, "X-axis");
        assert_eq!(figure.y_label.as_ref().unwrap().font_size, 12.0);
        assert!(figure.grid);
        assert!(figure.legend.is_none());

        let bars = figure.bars().next().unwrap();
        assert_eq!(bars.patches.len(), 3);
        assert_eq!(bars.fill, parse_color("blue").unwrap());
        assert_eq!(bars.edge, parse_color("black").unwrap());
        assert_eq!(bars.patches[2].height, 30.0);
    }

    #[test]
    fn test_bar_legend_labels() {
        let mut charts = Charts::new(Recorder::new());
        let options = BarOptions {
            legend: true,
            ..BarOptions::default()
        };
        charts.bar_graph(&[1.0, 2.0], &[5.0, 6.0], &options).unwrap();

        let legend = charts.backend().last().unwrap().legend.as_ref().unwrap();
        let labels: Vec<_> = legend.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Bar 1", "Bar 2"]);
    }

    #[test]
    fn test_length_mismatch_opens_nothing() {
        let mut charts = Charts::new(Recorder::new());
        let err = charts
            .bar_graph(&[1.0, 2.0], &[1.0], &BarOptions::default())
            .unwrap_err();
        assert!(matches!(err, ChartError::LengthMismatch { x_len: 2, y_len: 1 }));
        assert!(charts.backend().opened().is_empty());
    }

    #[test]
    fn test_bad_color_discards_figure() {
        let mut charts = Charts::new(Recorder::new());
        let options = BarOptions {
            color: "not-a-color".to_string(),
            ..BarOptions::default()
        };
        let err = charts.bar_graph(&[1.0], &[1.0], &options).unwrap_err();
        assert!(matches!(err, ChartError::Plot(PlotError::UnknownColor(_))));
        assert_eq!(charts.backend().opened().len(), 1);
        assert_eq!(charts.backend().discarded(), 1);
        assert!(charts.backend().figures().is_empty());
    }
}
