//! Figure Module
//! The drawn-figure model handed to a backend, and the drawing surface that builds it.
//!
//! A [`Figure`] is plain data: one set of axes with a title, axis labels, an
//! optional legend and colorbar, and the artists drawn on it. Coordinates are
//! data units; sizes of text, lines and markers are points.

mod pie;
mod surface;

pub(crate) use surface::Surface;

use crate::style::{Colormap, LineStyle, Marker, Rgba};

/// Figure size in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    pub width: f32,
    pub height: f32,
}

/// Size of every figure opened by the chart builders.
pub const DEFAULT_FIGSIZE: FigureSize = FigureSize {
    width: 10.0,
    height: 6.0,
};

impl Default for FigureSize {
    fn default() -> Self {
        DEFAULT_FIGSIZE
    }
}

/// A piece of text and its font size in points.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub font_size: f32,
}

/// A complete figure ready to be displayed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    pub size: FigureSize,
    pub title: Option<Text>,
    pub x_label: Option<Text>,
    pub y_label: Option<Text>,
    pub grid: bool,
    /// Axis lines and ticks are drawn.
    pub frame: bool,
    /// One data unit has the same length on both axes.
    pub equal_aspect: bool,
    pub artists: Vec<Artist>,
    pub legend: Option<Legend>,
    pub colorbar: Option<Colorbar>,
}

impl Figure {
    pub fn new(size: FigureSize) -> Self {
        Self {
            size,
            frame: true,
            ..Self::default()
        }
    }

    pub fn bars(&self) -> impl Iterator<Item = &Bars> {
        self.artists.iter().filter_map(|a| match a {
            Artist::Bars(bars) => Some(bars),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.artists.iter().filter_map(|a| match a {
            Artist::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn pies(&self) -> impl Iterator<Item = &Pie> {
        self.artists.iter().filter_map(|a| match a {
            Artist::Pie(pie) => Some(pie),
            _ => None,
        })
    }

    pub fn scatters(&self) -> impl Iterator<Item = &Scatter> {
        self.artists.iter().filter_map(|a| match a {
            Artist::Scatter(scatter) => Some(scatter),
            _ => None,
        })
    }
}

/// Something drawn inside the axes.
#[derive(Debug, Clone, PartialEq)]
pub enum Artist {
    Bars(Bars),
    Line(Line),
    Step(Step),
    Pie(Pie),
    Scatter(Scatter),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Bars rise from the x-axis.
    #[default]
    Vertical,
    /// Bars extend from the y-axis.
    Horizontal,
}

/// A set of rectangles sharing one style.
#[derive(Debug, Clone, PartialEq)]
pub struct Bars {
    pub patches: Vec<BarPatch>,
    pub direction: Direction,
    pub fill: Rgba,
    pub edge: Rgba,
    pub line_width: f32,
}

/// One bar: its center along the category axis, its thickness and its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPatch {
    pub center: f64,
    pub width: f64,
    pub height: f64,
}

/// A polyline with optional markers at its vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub points: Vec<[f64; 2]>,
    pub color: Rgba,
    pub style: LineStyle,
    pub width: f32,
    pub marker: Option<MarkerStyle>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub shape: Marker,
    /// Diameter in points.
    pub size: f32,
    pub face: Rgba,
    pub edge: Rgba,
    pub edge_width: f32,
}

/// A histogram outline, optionally filled.
///
/// The outline starts and ends on the baseline and visits both top corners of
/// every bin in order, so bin `i` spans `outline[2 * i + 1]..=outline[2 * i + 2]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub outline: Vec<[f64; 2]>,
    pub direction: Direction,
    pub filled: bool,
    pub color: Rgba,
}

/// Pie wedges with their labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Pie {
    pub wedges: Vec<Wedge>,
    pub shadow: bool,
}

/// A circular sector spanning `theta1..theta2` degrees, counter-clockwise from the x-axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub center: [f64; 2],
    pub radius: f64,
    pub theta1: f64,
    pub theta2: f64,
    pub face: Rgba,
    pub edge: Rgba,
    pub line_width: f32,
    pub label: Option<PlacedText>,
    pub percent: Option<PlacedText>,
}

impl Wedge {
    /// Angular extent in degrees.
    pub fn sweep(&self) -> f64 {
        self.theta2 - self.theta1
    }
}

/// Text anchored at a data position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub position: [f64; 2],
    pub anchor: Anchor,
    pub font_size: f32,
    pub color: Rgba,
    pub bold: bool,
}

/// Which side of the text sits on its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
    Right,
}

/// Individually sized and colored markers.
#[derive(Debug, Clone, PartialEq)]
pub struct Scatter {
    pub points: Vec<[f64; 2]>,
    /// Marker area per point in points squared.
    pub sizes: Vec<f32>,
    pub faces: Vec<Rgba>,
    /// Edge color per point; transparent means no edge.
    pub edges: Vec<Rgba>,
    pub edge_width: f32,
    pub shape: Marker,
}

/// Legend entries, drawn in the upper right corner of the axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    pub font_size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub handle: Handle,
}

/// Swatch style of something that can appear in a legend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub fill: Rgba,
    pub edge: Rgba,
}

/// Scalar-to-color mapping shown beside the axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Colorbar {
    pub colormap: Colormap,
    pub vmin: f64,
    pub vmax: f64,
}
