//! Native window backend.

use tracing::debug;

use super::Backend;
use crate::error::PlotError;
use crate::figure::Figure;
use crate::gui;

/// Screen pixels per figure inch.
pub const DEFAULT_PIXELS_PER_INCH: f32 = 100.0;

/// Shows each figure in its own native window and blocks until it is closed.
///
/// Only one window can run at a time, and on most platforms it must run on
/// the main thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pixels_per_inch: f32,
}

impl Window {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scale the window: a 10 inch wide figure opens `10 * pixels_per_inch` pixels wide.
    pub fn with_pixels_per_inch(mut self, pixels_per_inch: f32) -> Self {
        self.pixels_per_inch = pixels_per_inch;
        self
    }

    pub fn pixels_per_inch(&self) -> f32 {
        self.pixels_per_inch
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            pixels_per_inch: DEFAULT_PIXELS_PER_INCH,
        }
    }
}

impl Backend for Window {
    fn show(&mut self, figure: Figure) -> Result<(), PlotError> {
        debug!(
            width = figure.size.width,
            height = figure.size.height,
            "opening viewer window"
        );
        gui::run_viewer(figure, self.pixels_per_inch)
            .map_err(|e| PlotError::Window(e.to_string()))?;
        debug!("viewer window closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_density() {
        assert_eq!(Window::new().pixels_per_inch(), DEFAULT_PIXELS_PER_INCH);
        let window = Window::new().with_pixels_per_inch(72.0);
        assert_eq!(window.pixels_per_inch(), 72.0);
        assert_eq!(window, Window::default().with_pixels_per_inch(72.0));
    }
}
