//! Error types for allgraph.
//!
//! `ChartError` is what the chart builders return. Anything the builders do not
//! check themselves comes out of the plotting layer as a `PlotError` and is
//! passed through untouched.

use thiserror::Error;

/// Result type alias for chart builder calls.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors returned by the chart builders.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Paired x/y series of different lengths.
    #[error("data_x and data_y must be of the same length (got {x_len} and {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// Failure raised while drawing or displaying the figure.
    #[error(transparent)]
    Plot(#[from] PlotError),
}

/// Errors raised by the plotting layer.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Color string that is not a name, hex code, grayscale level or cycle reference.
    #[error("invalid color value: {0:?}")]
    UnknownColor(String),

    /// An explicit color list with no entries.
    #[error("color list must not be empty")]
    EmptyColors,

    /// Unrecognized line style code.
    #[error("unrecognized line style: {0:?}")]
    UnknownLineStyle(String),

    /// Unrecognized marker code.
    #[error("unrecognized marker style: {0:?}")]
    UnknownMarker(String),

    /// Alpha outside `0.0..=1.0`.
    #[error("alpha ({0}) is outside 0-1 range")]
    InvalidAlpha(f32),

    /// Colormap name that is not registered.
    #[error("{0:?} is not a valid colormap name")]
    UnknownColormap(String),

    /// Bad bin count, bin edges or binning rule.
    #[error("invalid bins: {0}")]
    InvalidBins(String),

    /// Histogram range that is inverted or not finite.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Negative wedge sizes, or sizes summing to zero.
    #[error("wedge sizes must be non-negative with a positive sum")]
    InvalidWedgeSizes,

    /// An auxiliary sequence whose length does not match the data.
    #[error("'{what}' must be of length {expected}, got {found}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// printf-style label format that cannot be applied to a single number.
    #[error("invalid format string {format:?}: {reason}")]
    InvalidFormat { format: String, reason: &'static str },

    /// A normalization given together with explicit vmin/vmax.
    #[error("passing a normalization simultaneously with vmin/vmax is not supported")]
    NormConflict,

    /// Normalization bounds with vmin above vmax.
    #[error("invalid normalization: vmin ({vmin}) must not exceed vmax ({vmax})")]
    InvalidNorm { vmin: f64, vmax: f64 },

    /// The viewer window could not be created or run.
    #[error("viewer window failed: {0}")]
    Window(String),
}

impl PlotError {
    /// Create a LengthMismatch error.
    pub fn length_mismatch(what: &'static str, expected: usize, found: usize) -> Self {
        Self::LengthMismatch {
            what,
            expected,
            found,
        }
    }

    /// Create an InvalidFormat error.
    pub fn invalid_format(format: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidFormat {
            format: format.into(),
            reason,
        }
    }
}
