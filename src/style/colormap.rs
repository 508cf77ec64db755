//! Colormaps for mapping scalar data to colors.
//!
//! Each map is a list of evenly spaced color stops sampled with piecewise
//! linear interpolation. Appending `_r` to a name reverses the map.

use super::color::Rgba;
use crate::error::PlotError;

/// Colormap used when none is requested.
pub const DEFAULT_COLORMAP: &str = "viridis";

const VIRIDIS: &[[u8; 3]] = &[
    [0x44, 0x01, 0x54],
    [0x48, 0x28, 0x78],
    [0x3e, 0x49, 0x89],
    [0x31, 0x68, 0x8e],
    [0x26, 0x82, 0x8e],
    [0x1f, 0x9e, 0x89],
    [0x35, 0xb7, 0x79],
    [0x6e, 0xce, 0x58],
    [0xb5, 0xde, 0x2b],
    [0xfd, 0xe7, 0x25],
];

const PLASMA: &[[u8; 3]] = &[
    [0x0d, 0x08, 0x87],
    [0x46, 0x03, 0x9f],
    [0x72, 0x01, 0xa8],
    [0x9c, 0x17, 0x9e],
    [0xbd, 0x37, 0x86],
    [0xd8, 0x57, 0x6b],
    [0xed, 0x79, 0x53],
    [0xfb, 0x9f, 0x3a],
    [0xfd, 0xca, 0x26],
    [0xf0, 0xf9, 0x21],
];

const INFERNO: &[[u8; 3]] = &[
    [0x00, 0x00, 0x04],
    [0x1b, 0x0c, 0x41],
    [0x4a, 0x0c, 0x6b],
    [0x78, 0x1c, 0x6d],
    [0xa5, 0x2c, 0x60],
    [0xcf, 0x44, 0x46],
    [0xed, 0x69, 0x25],
    [0xfb, 0x9b, 0x06],
    [0xf7, 0xd1, 0x3d],
    [0xfc, 0xff, 0xa4],
];

const MAGMA: &[[u8; 3]] = &[
    [0x00, 0x00, 0x04],
    [0x18, 0x0f, 0x3d],
    [0x44, 0x0f, 0x76],
    [0x72, 0x1f, 0x81],
    [0x9e, 0x2f, 0x7f],
    [0xcd, 0x40, 0x71],
    [0xf1, 0x60, 0x5d],
    [0xfd, 0x96, 0x68],
    [0xfe, 0xca, 0x8d],
    [0xfc, 0xfd, 0xbf],
];

const CIVIDIS: &[[u8; 3]] = &[
    [0x00, 0x22, 0x4e],
    [0x12, 0x35, 0x70],
    [0x3b, 0x49, 0x6c],
    [0x57, 0x5d, 0x6d],
    [0x70, 0x71, 0x73],
    [0x8a, 0x86, 0x78],
    [0xa5, 0x9c, 0x74],
    [0xc3, 0xb3, 0x69],
    [0xe1, 0xcc, 0x55],
    [0xfe, 0xe8, 0x38],
];

const GRAY: &[[u8; 3]] = &[[0x00, 0x00, 0x00], [0xff, 0xff, 0xff]];

const COOLWARM: &[[u8; 3]] = &[
    [0x3b, 0x4c, 0xc0],
    [0x6f, 0x92, 0xf3],
    [0xaa, 0xc7, 0xfd],
    [0xdd, 0xdd, 0xdd],
    [0xf7, 0xb8, 0x9c],
    [0xe7, 0x74, 0x5b],
    [0xb4, 0x04, 0x26],
];

const JET: &[[u8; 3]] = &[
    [0x00, 0x00, 0x7f],
    [0x00, 0x00, 0xff],
    [0x00, 0x7f, 0xff],
    [0x00, 0xff, 0xff],
    [0x7f, 0xff, 0x7f],
    [0xff, 0xff, 0x00],
    [0xff, 0x7f, 0x00],
    [0xff, 0x00, 0x00],
    [0x7f, 0x00, 0x00],
];

const HOT: &[[u8; 3]] = &[
    [0x0a, 0x00, 0x00],
    [0xff, 0x00, 0x00],
    [0xff, 0xff, 0x00],
    [0xff, 0xff, 0xff],
];

/// A named colormap.
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    name: String,
    stops: &'static [[u8; 3]],
    reversed: bool,
}

impl Colormap {
    /// Look up a colormap by name, e.g. `"viridis"` or `"plasma_r"`.
    pub fn from_name(name: &str) -> Result<Self, PlotError> {
        let (base, reversed) = match name.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (name, false),
        };

        let stops = match base {
            "viridis" => VIRIDIS,
            "plasma" => PLASMA,
            "inferno" => INFERNO,
            "magma" => MAGMA,
            "cividis" => CIVIDIS,
            "gray" | "grey" | "Greys" => GRAY,
            "coolwarm" => COOLWARM,
            "jet" => JET,
            "hot" => HOT,
            _ => return Err(PlotError::UnknownColormap(name.to_string())),
        };

        Ok(Self {
            name: name.to_string(),
            stops,
            reversed,
        })
    }

    /// The colormap used when none is requested.
    pub fn default_map() -> Self {
        Self {
            name: DEFAULT_COLORMAP.to_string(),
            stops: VIRIDIS,
            reversed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Map a normalized value (0.0 to 1.0) to a color. Out-of-range values clamp.
    pub fn sample(&self, t: f64) -> Rgba {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let t = if self.reversed { 1.0 - t } else { t };

        let segments = self.stops.len() - 1;
        let position = t * segments as f64;
        let index = (position.floor() as usize).min(segments.saturating_sub(1));
        let frac = (position - index as f64) as f32;

        let [r0, g0, b0] = self.stops[index];
        let [r1, g1, b1] = self.stops[(index + 1).min(segments)];
        Rgba::from_rgb8(r0, g0, b0).lerp(Rgba::from_rgb8(r1, g1, b1), frac)
    }
}

impl Default for Colormap {
    fn default() -> Self {
        Self::default_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let viridis = Colormap::from_name("viridis").unwrap();
        assert_eq!(viridis.sample(0.0).to_rgba8(), [0x44, 0x01, 0x54, 0xff]);
        assert_eq!(viridis.sample(1.0).to_rgba8(), [0xfd, 0xe7, 0x25, 0xff]);
        assert_eq!(viridis.sample(-3.0), viridis.sample(0.0));
        assert_eq!(viridis.sample(7.0), viridis.sample(1.0));
    }

    #[test]
    fn test_reversed() {
        let gray = Colormap::from_name("gray").unwrap();
        let gray_r = Colormap::from_name("gray_r").unwrap();
        assert_eq!(gray.sample(0.0).to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(gray_r.sample(0.0).to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(gray.sample(0.5).to_rgba8(), [128, 128, 128, 255]);
        assert_eq!(gray_r.name(), "gray_r");
    }

    #[test]
    fn test_unknown_name() {
        assert!(matches!(
            Colormap::from_name("rainbowish"),
            Err(PlotError::UnknownColormap(name)) if name == "rainbowish"
        ));
    }

    #[test]
    fn test_default_is_viridis() {
        assert_eq!(Colormap::default(), Colormap::from_name("viridis").unwrap());
    }
}
