//! Line styles and marker shapes, parsed from short format codes.

use std::str::FromStr;

use crate::error::PlotError;

/// Line dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    DashDot,
    Dotted,
    /// No line is drawn.
    None,
}

impl FromStr for LineStyle {
    type Err = PlotError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "-" | "solid" => Ok(LineStyle::Solid),
            "--" | "dashed" => Ok(LineStyle::Dashed),
            "-." | "dashdot" => Ok(LineStyle::DashDot),
            ":" | "dotted" => Ok(LineStyle::Dotted),
            "None" | "none" | " " | "" => Ok(LineStyle::None),
            _ => Err(PlotError::UnknownLineStyle(code.to_string())),
        }
    }
}

/// Marker shapes for data points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// No marker
    None,
    /// Small dot
    Point,
    /// Single pixel
    Pixel,
    Circle,
    Square,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
    Diamond,
    ThinDiamond,
    Plus,
    Cross,
    Star,
    Pentagon,
    Hexagon,
    VLine,
    HLine,
}

impl Marker {
    pub fn is_visible(&self) -> bool {
        *self != Marker::None
    }

    /// Scale applied to the nominal marker size for shapes drawn smaller than it.
    pub fn size_factor(&self) -> f32 {
        match self {
            Marker::Point => 0.5,
            Marker::Pixel => 0.2,
            _ => 1.0,
        }
    }
}

impl FromStr for Marker {
    type Err = PlotError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let marker = match code {
            "None" | "none" | " " | "" => Marker::None,
            "." => Marker::Point,
            "," => Marker::Pixel,
            "o" => Marker::Circle,
            "s" => Marker::Square,
            "^" => Marker::TriangleUp,
            "v" => Marker::TriangleDown,
            "<" => Marker::TriangleLeft,
            ">" => Marker::TriangleRight,
            "D" => Marker::Diamond,
            "d" => Marker::ThinDiamond,
            "+" | "P" => Marker::Plus,
            "x" | "X" => Marker::Cross,
            "*" => Marker::Star,
            "p" => Marker::Pentagon,
            "h" | "H" => Marker::Hexagon,
            "|" => Marker::VLine,
            "_" => Marker::HLine,
            _ => return Err(PlotError::UnknownMarker(code.to_string())),
        };
        Ok(marker)
    }
}
