//! Stats module - histogram binning

mod binning;

pub use binning::{BinCalculator, Histogram, MAX_BINS};
