//! Color definitions and parsing.
//!
//! Understands the color vocabulary used in chart options: single-letter base
//! colors, CSS names, `tab:` palette names, `C0`..`C9` cycle references,
//! grayscale levels such as `"0.5"`, hex codes and `"none"`.

use crate::error::PlotError;

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Default property cycle (tab10), used when no color is given.
pub const CYCLE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            1.0,
        )
    }

    /// Parse a hex string (`#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| f32::from(v) / 255.0);
        let short = |i: usize| channel(&digits[i..=i].repeat(2));
        let long = |i: usize| channel(&digits[2 * i..2 * i + 2]);

        match digits.len() {
            3 => Some(Self::new(short(0)?, short(1)?, short(2)?, 1.0)),
            4 => Some(Self::new(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Self::new(long(0)?, long(1)?, long(2)?, 1.0)),
            8 => Some(Self::new(long(0)?, long(1)?, long(2)?, long(3)?)),
            _ => None,
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    /// Darken by scaling the color channels.
    pub fn darken(self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a,
        }
    }

    /// Linear interpolation between two colors.
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(self.r), byte(self.g), byte(self.b), byte(self.a)]
    }
}

/// Parse a color specification.
pub fn parse_color(spec: &str) -> Result<Rgba, PlotError> {
    let trimmed = spec.trim();
    let unknown = || PlotError::UnknownColor(spec.to_string());

    if trimmed.eq_ignore_ascii_case("none") {
        return Ok(Rgba::TRANSPARENT);
    }

    if trimmed.starts_with('#') {
        return Rgba::from_hex(trimmed).ok_or_else(unknown);
    }

    // Cycle references are case-sensitive: "c" alone is cyan.
    if let Some(index) = trimmed.strip_prefix('C') {
        if let Ok(index) = index.parse::<usize>() {
            return Ok(cycle_color(index));
        }
    }

    // Grayscale level as a string, "0" is black and "1" is white.
    if let Ok(level) = trimmed.parse::<f32>() {
        if (0.0..=1.0).contains(&level) {
            return Ok(Rgba::new(level, level, level, 1.0));
        }
        return Err(unknown());
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(hex) = named_color(&lower) {
        return Rgba::from_hex(hex).ok_or_else(unknown);
    }

    Err(unknown())
}

/// Parse a color and override its alpha. `"none"` stays transparent.
pub fn parse_color_alpha(spec: &str, alpha: Option<f32>) -> Result<Rgba, PlotError> {
    let alpha = alpha.map(check_alpha).transpose()?;
    let color = parse_color(spec)?;
    match alpha {
        Some(alpha) if !spec.trim().eq_ignore_ascii_case("none") => Ok(color.with_alpha(alpha)),
        _ => Ok(color),
    }
}

/// Alpha values must lie in `0.0..=1.0`.
pub fn check_alpha(alpha: f32) -> Result<f32, PlotError> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(alpha)
    } else {
        Err(PlotError::InvalidAlpha(alpha))
    }
}

/// Get a color from the default color cycle by index.
pub fn cycle_color(index: usize) -> Rgba {
    Rgba::from_hex(CYCLE[index % CYCLE.len()]).unwrap_or(Rgba::BLACK)
}

/// Resolve a lower-case color name to its hex value.
fn named_color(name: &str) -> Option<&'static str> {
    let hex = match name {
        // Single-letter base colors
        "b" => "#0000ff",
        "g" => "#008000",
        "r" => "#ff0000",
        "c" => "#00bfbf",
        "m" => "#bf00bf",
        "y" => "#bfbf00",
        "k" => "#000000",
        "w" => "#ffffff",

        // Tableau palette
        "tab:blue" => "#1f77b4",
        "tab:orange" => "#ff7f0e",
        "tab:green" => "#2ca02c",
        "tab:red" => "#d62728",
        "tab:purple" => "#9467bd",
        "tab:brown" => "#8c564b",
        "tab:pink" => "#e377c2",
        "tab:gray" | "tab:grey" => "#7f7f7f",
        "tab:olive" => "#bcbd22",
        "tab:cyan" => "#17becf",

        // CSS names
        "black" => "#000000",
        "white" => "#ffffff",
        "red" => "#ff0000",
        "green" => "#008000",
        "blue" => "#0000ff",
        "yellow" => "#ffff00",
        "cyan" | "aqua" => "#00ffff",
        "magenta" | "fuchsia" => "#ff00ff",
        "orange" => "#ffa500",
        "purple" => "#800080",
        "gray" | "grey" => "#808080",
        "lightgray" | "lightgrey" => "#d3d3d3",
        "darkgray" | "darkgrey" => "#a9a9a9",
        "dimgray" | "dimgrey" => "#696969",
        "silver" => "#c0c0c0",
        "gainsboro" => "#dcdcdc",
        "whitesmoke" => "#f5f5f5",
        "ivory" => "#fffff0",
        "beige" => "#f5f5dc",
        "pink" => "#ffc0cb",
        "hotpink" => "#ff69b4",
        "deeppink" => "#ff1493",
        "brown" => "#a52a2a",
        "maroon" => "#800000",
        "firebrick" => "#b22222",
        "crimson" => "#dc143c",
        "darkred" => "#8b0000",
        "salmon" => "#fa8072",
        "coral" => "#ff7f50",
        "tomato" => "#ff6347",
        "orangered" => "#ff4500",
        "darkorange" => "#ff8c00",
        "gold" => "#ffd700",
        "goldenrod" => "#daa520",
        "khaki" => "#f0e68c",
        "tan" => "#d2b48c",
        "chocolate" => "#d2691e",
        "sienna" => "#a0522d",
        "olive" => "#808000",
        "lime" => "#00ff00",
        "limegreen" => "#32cd32",
        "lightgreen" => "#90ee90",
        "darkgreen" => "#006400",
        "forestgreen" => "#228b22",
        "seagreen" => "#2e8b57",
        "teal" => "#008080",
        "turquoise" => "#40e0d0",
        "skyblue" => "#87ceeb",
        "lightblue" => "#add8e6",
        "deepskyblue" => "#00bfff",
        "dodgerblue" => "#1e90ff",
        "cornflowerblue" => "#6495ed",
        "steelblue" => "#4682b4",
        "royalblue" => "#4169e1",
        "darkblue" => "#00008b",
        "navy" => "#000080",
        "midnightblue" => "#191970",
        "slategray" | "slategrey" => "#708090",
        "darkslategray" | "darkslategrey" => "#2f4f4f",
        "indigo" => "#4b0082",
        "violet" => "#ee82ee",
        "orchid" => "#da70d6",
        "plum" => "#dda0dd",
        "lavender" => "#e6e6fa",
        "mediumpurple" => "#9370db",
        _ => return None,
    };
    Some(hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Rgba, b: Rgba) -> bool {
        (a.r - b.r).abs() < 1e-3
            && (a.g - b.g).abs() < 1e-3
            && (a.b - b.b).abs() < 1e-3
            && (a.a - b.a).abs() < 1e-3
    }

    #[test]
    fn test_names_and_letters() {
        assert!(approx(parse_color("blue").unwrap(), Rgba::new(0.0, 0.0, 1.0, 1.0)));
        assert!(approx(parse_color("Black").unwrap(), Rgba::BLACK));
        assert!(approx(parse_color("k").unwrap(), Rgba::BLACK));
        assert!(approx(parse_color("g").unwrap(), Rgba::from_rgb8(0, 128, 0)));
    }

    #[test]
    fn test_hex_forms() {
        assert!(approx(parse_color("#f00").unwrap(), Rgba::new(1.0, 0.0, 0.0, 1.0)));
        assert!(approx(parse_color("#00ff0080").unwrap().with_alpha(0.5), Rgba::new(0.0, 1.0, 0.0, 0.5)));
        assert!(approx(parse_color("#1f77b4").unwrap(), Rgba::from_rgb8(0x1f, 0x77, 0xb4)));
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#gggggg").is_err());
    }

    #[test]
    fn test_cycle_and_grayscale() {
        assert!(approx(parse_color("C1").unwrap(), Rgba::from_rgb8(0xff, 0x7f, 0x0e)));
        assert!(approx(parse_color("C10").unwrap(), cycle_color(0)));
        assert!(approx(parse_color("0.5").unwrap(), Rgba::new(0.5, 0.5, 0.5, 1.0)));
        assert!(parse_color("1.5").is_err());
    }

    #[test]
    fn test_none_is_transparent() {
        assert!(parse_color("none").unwrap().is_transparent());
        assert!(parse_color_alpha("None", Some(0.7)).unwrap().is_transparent());
    }

    #[test]
    fn test_alpha_override() {
        let clear = parse_color_alpha("#00000000", Some(0.5)).unwrap();
        assert_eq!(clear.a, 0.5);
        assert_eq!(parse_color_alpha("#ff000080", None).unwrap(), parse_color("#ff000080").unwrap());
        assert_eq!(parse_color_alpha("red", Some(1.0)).unwrap().a, 1.0);

        assert!(matches!(
            parse_color_alpha("red", Some(1.5)),
            Err(PlotError::InvalidAlpha(a)) if a == 1.5
        ));
        assert!(parse_color_alpha("none", Some(-0.1)).is_err());
        assert!(check_alpha(f32::NAN).is_err());
        assert_eq!(check_alpha(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_unknown_color() {
        match parse_color("notacolor") {
            Err(PlotError::UnknownColor(name)) => assert_eq!(name, "notacolor"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle_color(0), cycle_color(CYCLE.len()));
        assert_ne!(cycle_color(0), cycle_color(1));
    }
}
