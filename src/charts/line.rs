//! Line graph builder.

use tracing::debug;

use super::{check_paired, Charts};
use crate::backend::Backend;
use crate::config::LineOptions;
use crate::error::Result;
use crate::figure::{Surface, DEFAULT_FIGSIZE};

impl<B: Backend> Charts<B> {
    /// Draw a line through the (x, y) pairs, with markers at each point.
    pub fn line_graph(&mut self, x: &[f64], y: &[f64], options: &LineOptions) -> Result<()> {
        check_paired(x, y)?;
        debug!(
            points = x.len(),
            linestyle = %options.linestyle,
            marker = %options.marker,
            "building line graph"
        );

        let mut surface = Surface::open(&mut self.backend, DEFAULT_FIGSIZE);
        surface.plot(x, y, options)?;
        surface.title(&options.title, options.fontsize);
        surface.xlabel(&options.xlabel, options.fontsize);
        surface.ylabel(&options.ylabel, options.fontsize);
        surface.grid(true);
        surface.show()?;
        Ok(())
    }
}

/// Show a line graph in a window and wait for it to be closed.
pub fn make_line_graph(x: &[f64], y: &[f64], options: &LineOptions) -> Result<()> {
    Charts::window().line_graph(x, y, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Recorder;
    use crate::error::{ChartError, PlotError};
    use crate::style::{parse_color, LineStyle, Marker, Rgba};

    #[test]
    fn test_line_graph_defaults() {
        let mut charts = Charts::new(Recorder::new());
        charts
            .line_graph(&[0.0, 1.0, 2.0], &[1.0, 4.0, 9.0], &LineOptions::default())
            .unwrap();

        let figure = charts.backend().last().unwrap();
        assert_eq!(figure.title.as_ref().unwrap().content, "Line Graph");
        assert!(figure.grid);

        let line = figure.lines().next().unwrap();
        assert_eq!(line.points, vec![[0.0, 1.0], [1.0, 4.0], [2.0, 9.0]]);
        assert_eq!(line.style, LineStyle::Solid);
        assert_eq!(line.color, parse_color("blue").unwrap());
        let marker = line.marker.unwrap();
        assert_eq!(marker.shape, Marker::Circle);
        assert_eq!(marker.size, 6.0);
        assert_eq!(marker.edge, Rgba::BLACK);
    }

    #[test]
    fn test_unknown_line_style() {
        let mut charts = Charts::new(Recorder::new());
        let options = LineOptions {
            linestyle: "~".to_string(),
            ..LineOptions::default()
        };
        let err = charts.line_graph(&[1.0], &[1.0], &options).unwrap_err();
        assert!(matches!(err, ChartError::Plot(PlotError::UnknownLineStyle(_))));
    }

    #[test]
    fn test_length_mismatch() {
        let mut charts = Charts::new(Recorder::new());
        let result = charts.line_graph(&[1.0, 2.0, 3.0], &[1.0, 2.0], &LineOptions::default());
        assert!(matches!(result, Err(ChartError::LengthMismatch { .. })));
        assert!(charts.backend().opened().is_empty());
    }
}
