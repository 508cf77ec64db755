//! Charts module - one-call chart builders
//!
//! Each builder checks the inputs it is responsible for, opens a fresh
//! 10x6 inch figure, draws one primitive with the given options, applies the
//! title, axis labels and grid, and shows the figure. With the default
//! [`Window`] backend the call blocks until the window is closed.
//!
//! Builders must be called one at a time: the window backend drives a
//! process-wide event loop and does no locking of its own.

mod bar;
mod histogram;
mod line;
mod pie;
mod scatter;

pub use bar::make_bar_graph;
pub use histogram::make_histogram;
pub use line::make_line_graph;
pub use pie::make_pie_chart;
pub use scatter::make_scatter_plot;

use crate::backend::{Backend, Window};
use crate::error::{ChartError, Result};

/// Chart builders bound to a display backend.
#[derive(Debug, Default)]
pub struct Charts<B = Window> {
    backend: B,
}

impl Charts<Window> {
    /// Builders that show each chart in a native window.
    pub fn window() -> Self {
        Self::default()
    }
}

impl<B: Backend> Charts<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

/// Paired series must have equal lengths; checked before any figure is opened.
fn check_paired(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(ChartError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    Ok(())
}
