//! Backend module - where finished figures are displayed
//!
//! A backend receives each figure once it is complete. [`Window`] shows it in
//! a native window and blocks until the window is closed; [`Recorder`] keeps it
//! in memory so it can be inspected.

mod recorder;
mod window;

pub use recorder::Recorder;
pub use window::Window;

use crate::error::PlotError;
use crate::figure::{Figure, FigureSize};

/// Display target for figures.
pub trait Backend {
    /// A new figure of `size` is being built.
    fn open(&mut self, _size: FigureSize) {}

    /// Display a finished figure. May block until the user dismisses it.
    fn show(&mut self, figure: Figure) -> Result<(), PlotError>;

    /// The figure being built was abandoned before it was shown.
    fn discard(&mut self) {}
}

impl<B: Backend + ?Sized> Backend for &mut B {
    fn open(&mut self, size: FigureSize) {
        (**self).open(size)
    }

    fn show(&mut self, figure: Figure) -> Result<(), PlotError> {
        (**self).show(figure)
    }

    fn discard(&mut self) {
        (**self).discard()
    }
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn open(&mut self, size: FigureSize) {
        (**self).open(size)
    }

    fn show(&mut self, figure: Figure) -> Result<(), PlotError> {
        (**self).show(figure)
    }

    fn discard(&mut self) {
        (**self).discard()
    }
}
