//! Pie chart builder.

use tracing::debug;

use super::Charts;
use crate::backend::Backend;
use crate::config::PieOptions;
use crate::error::Result;
use crate::figure::{Surface, DEFAULT_FIGSIZE};

impl<B: Backend> Charts<B> {
    /// Draw one wedge per size, labelled with the matching label.
    ///
    /// Labels and sizes are not length-checked here; a mismatch is reported
    /// by the plotting layer. The pie has no axis labels and no grid.
    pub fn pie_chart<S: AsRef<str>>(
        &mut self,
        labels: &[S],
        sizes: &[f64],
        options: &PieOptions,
    ) -> Result<()> {
        debug!(wedges = sizes.len(), labels = labels.len(), "building pie chart");

        let mut surface = Surface::open(&mut self.backend, DEFAULT_FIGSIZE);
        surface.pie(sizes, labels, options)?;
        surface.title(&options.title, options.fontsize);
        surface.show()?;
        Ok(())
    }
}

/// Show a pie chart in a window and wait for it to be closed.
pub fn make_pie_chart<S: AsRef<str>>(labels: &[S], sizes: &[f64], options: &PieOptions) -> Result<()> {
    Charts::window().pie_chart(labels, sizes, options)
}
