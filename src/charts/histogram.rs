//! Histogram builder.

use tracing::debug;

use super::Charts;
use crate::backend::Backend;
use crate::config::HistogramOptions;
use crate::error::Result;
use crate::figure::{Surface, DEFAULT_FIGSIZE};

impl<B: Backend> Charts<B> {
    /// Bin `data` and draw the bin heights.
    ///
    /// The data is not checked here; bad bins or ranges are reported by the
    /// plotting layer.
    pub fn histogram(&mut self, data: &[f64], options: &HistogramOptions) -> Result<()> {
        debug!(
            values = data.len(),
            bins = ?options.bins,
            histtype = ?options.histtype,
            "building histogram"
        );

        let mut surface = Surface::open(&mut self.backend, DEFAULT_FIGSIZE);
        surface.hist(data, options)?;
        surface.title(&options.title, options.fontsize);
        surface.xlabel(&options.xlabel, options.fontsize);
        surface.ylabel(&options.ylabel, options.fontsize);
        surface.grid(true);
        surface.show()?;
        Ok(())
    }
}

/// Show a histogram in a window and wait for it to be closed.
pub fn make_histogram(data: &[f64], options: &HistogramOptions) -> Result<()> {
    Charts::window().histogram(data, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Recorder;
    use crate::config::{Bins, HistType};
    use crate::error::{ChartError, PlotError};
    use crate::figure::Artist;

    #[test]
    fn test_histogram_defaults() {
        let data: Vec<f64> = (0..100).map(|i| f64::from(i) / 10.0).collect();
        let mut charts = Charts::new(Recorder::new());
        charts.histogram(&data, &HistogramOptions::default()).unwrap();

        let figure = charts.backend().last().unwrap();
        assert_eq!(figure.title.as_ref().unwrap().content, "Histogram");
        assert_eq!(figure.y_label.as_ref().unwrap().content, "Frequency");
        assert!(figure.grid);

        let bars = figure.bars().next().unwrap();
        assert_eq!(bars.patches.len(), 10);
        let total: f64 = bars.patches.iter().map(|p| p.height).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_step_histogram() {
        let mut charts = Charts::new(Recorder::new());
        let options = HistogramOptions {
            bins: Bins::Edges(vec![0.0, 1.0, 2.0]),
            histtype: HistType::StepFilled,
            ..HistogramOptions::default()
        };
        charts.histogram(&[0.5, 1.5, 1.6], &options).unwrap();

        let figure = charts.backend().last().unwrap();
        let step = figure
            .artists
            .iter()
            .find_map(|a| match a {
                Artist::Step(step) => Some(step),
                _ => None,
            })
            .unwrap();
        assert!(step.filled);
        assert_eq!(step.outline.len(), 6);
        assert_eq!(step.outline[3], [1.0, 2.0]);
    }

    #[test]
    fn test_empty_data_is_drawn() {
        let mut charts = Charts::new(Recorder::new());
        charts.histogram(&[], &HistogramOptions::default()).unwrap();
        let figure = charts.backend().last().unwrap();
        assert!(figure.bars().next().unwrap().patches.iter().all(|p| p.height == 0.0));
    }

    #[test]
    fn test_invalid_bins_propagate() {
        let mut charts = Charts::new(Recorder::new());
        let options = HistogramOptions {
            bins: Bins::Count(0),
            ..HistogramOptions::default()
        };
        let err = charts.histogram(&[1.0, 2.0], &options).unwrap_err();
        assert!(matches!(err, ChartError::Plot(PlotError::InvalidBins(_))));
        assert_eq!(charts.backend().discarded(), 1);
    }
}
