//! Style module - colors, colormaps, line and marker codes, label formats

mod color;
mod colormap;
mod format;
mod line;

pub use color::{check_alpha, cycle_color, parse_color, parse_color_alpha, Rgba, CYCLE};
pub use colormap::{Colormap, DEFAULT_COLORMAP};
pub use format::format_number;
pub use line::{LineStyle, Marker};
