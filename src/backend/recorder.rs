//! In-memory backend.

use tracing::debug;

use super::Backend;
use crate::error::PlotError;
use crate::figure::{Figure, FigureSize};

/// Keeps every shown figure instead of displaying it.
#[derive(Debug, Default)]
pub struct Recorder {
    opened: Vec<FigureSize>,
    figures: Vec<Figure>,
    discarded: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sizes of all figures opened so far, shown or not.
    pub fn opened(&self) -> &[FigureSize] {
        &self.opened
    }

    /// Shown figures, oldest first.
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// The most recently shown figure.
    pub fn last(&self) -> Option<&Figure> {
        self.figures.last()
    }

    /// Number of figures opened and then abandoned.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    pub fn clear(&mut self) {
        self.opened.clear();
        self.figures.clear();
        self.discarded = 0;
    }
}

impl Backend for Recorder {
    fn open(&mut self, size: FigureSize) {
        self.opened.push(size);
    }

    fn show(&mut self, figure: Figure) -> Result<(), PlotError> {
        debug!(artists = figure.artists.len(), "recorded figure");
        self.figures.push(figure);
        Ok(())
    }

    fn discard(&mut self) {
        self.discarded += 1;
    }
}
