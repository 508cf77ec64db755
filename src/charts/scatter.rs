//! Scatter plot builder.

use tracing::debug;

use super::{check_paired, Charts};
use crate::backend::Backend;
use crate::config::ScatterOptions;
use crate::error::Result;
use crate::figure::{Surface, DEFAULT_FIGSIZE};

impl<B: Backend> Charts<B> {
    /// Draw a marker at each (x, y) pair. A colorbar is always attached.
    pub fn scatter_plot(&mut self, x: &[f64], y: &[f64], options: &ScatterOptions) -> Result<()> {
        check_paired(x, y)?;
        debug!(
            points = x.len(),
            cmap = options.cmap.as_deref().unwrap_or("default"),
            "building scatter plot"
        );

        let mut surface = Surface::open(&mut self.backend, DEFAULT_FIGSIZE);
        let mapping = surface.scatter(x, y, options)?;
        surface.colorbar(mapping);
        surface.title(&options.title, options.fontsize);
        surface.xlabel(&options.xlabel, options.fontsize);
        surface.ylabel(&options.ylabel, options.fontsize);
        surface.grid(true);
        surface.show()?;
        Ok(())
    }
}

/// Show a scatter plot in a window and wait for it to be closed.
pub fn make_scatter_plot(x: &[f64], y: &[f64], options: &ScatterOptions) -> Result<()> {
    Charts::window().scatter_plot(x, y, options)
}
