//! Chart Options Module
//! One options struct per chart type, each field with a fixed literal default.
//!
//! All structs deserialize with `#[serde(default)]`, so a partial document only
//! has to name the fields it overrides. Color, line style, marker, colormap and
//! label format values stay plain strings; they are interpreted when the chart
//! is drawn and rejected there if invalid.

use serde::{Deserialize, Serialize};

/// Default font size for titles, axis labels and legends.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Options for [`Charts::bar_graph`](crate::Charts::bar_graph).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarOptions {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    /// Bar fill color.
    pub color: String,
    /// Transparency applied to fill and edge.
    pub alpha: f32,
    pub edgecolor: String,
    pub fontsize: f32,
    /// Show a legend labelling the bars "Bar 1" ... "Bar N".
    pub legend: bool,
    /// Bar width in data units.
    pub width: f64,
    pub align: BarAlign,
    /// Edge line width in points.
    pub linewidth: f32,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            title: "Bar Graph".to_string(),
            xlabel: "X-axis".to_string(),
            ylabel: "Y-axis".to_string(),
            color: "blue".to_string(),
            alpha: 1.0,
            edgecolor: "black".to_string(),
            fontsize: DEFAULT_FONT_SIZE,
            legend: false,
            width: 0.8,
            align: BarAlign::Center,
            linewidth: 1.0,
        }
    }
}

/// Where a bar sits relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarAlign {
    /// Centered on x.
    #[default]
    Center,
    /// Left edge at x.
    Edge,
}

/// Options for [`Charts::line_graph`](crate::Charts::line_graph).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineOptions {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub color: String,
    /// Line style code: "-", "--", "-.", ":" or "None".
    pub linestyle: String,
    /// Marker code such as "o", "s" or "^"; "None" hides markers.
    pub marker: String,
    pub linewidth: f32,
    pub alpha: f32,
    /// Marker diameter in points.
    pub markersize: f32,
    pub markeredgecolor: String,
    pub markeredgewidth: f32,
    pub markerfacecolor: String,
    pub fontsize: f32,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            title: "Line Graph".to_string(),
            xlabel: "X-axis".to_string(),
            ylabel: "Y-axis".to_string(),
            color: "blue".to_string(),
            linestyle: "-".to_string(),
            marker: "o".to_string(),
            linewidth: 1.0,
            alpha: 1.0,
            markersize: 6.0,
            markeredgecolor: "black".to_string(),
            markeredgewidth: 1.0,
            markerfacecolor: "blue".to_string(),
            fontsize: DEFAULT_FONT_SIZE,
        }
    }
}

/// Options for [`Charts::histogram`](crate::Charts::histogram).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramOptions {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub color: String,
    pub bins: Bins,
    /// Lower and upper bin range; defaults to the data's min and max.
    pub range: Option<(f64, f64)>,
    /// Normalize counts to a probability density.
    pub density: bool,
    /// Each bin also counts every bin before it.
    pub cumulative: bool,
    pub histtype: HistType,
    pub align: HistAlign,
    pub orientation: Orientation,
    /// Bar width as a fraction of the bin width.
    pub rwidth: Option<f64>,
    pub fontsize: f32,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            title: "Histogram".to_string(),
            xlabel: "X-axis".to_string(),
            ylabel: "Frequency".to_string(),
            color: "blue".to_string(),
            bins: Bins::Count(10),
            range: None,
            density: false,
            cumulative: false,
            histtype: HistType::Bar,
            align: HistAlign::Mid,
            orientation: Orientation::Vertical,
            rwidth: None,
            fontsize: DEFAULT_FONT_SIZE,
        }
    }
}

/// How histogram bins are chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bins {
    /// Number of equal-width bins.
    Count(usize),
    /// Explicit bin edges, monotonically increasing.
    Edges(Vec<f64>),
    /// Bin width estimated from the data.
    Rule(BinRule),
}

impl Default for Bins {
    fn default() -> Self {
        Bins::Count(10)
    }
}

impl From<usize> for Bins {
    fn from(count: usize) -> Self {
        Bins::Count(count)
    }
}

impl From<Vec<f64>> for Bins {
    fn from(edges: Vec<f64>) -> Self {
        Bins::Edges(edges)
    }
}

impl From<BinRule> for Bins {
    fn from(rule: BinRule) -> Self {
        Bins::Rule(rule)
    }
}

/// Bin width estimators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinRule {
    /// The smaller of the Freedman-Diaconis and Sturges widths.
    Auto,
    Sturges,
    Sqrt,
    Rice,
    Scott,
    /// Freedman-Diaconis.
    Fd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistType {
    #[default]
    Bar,
    BarStacked,
    Step,
    StepFilled,
}

/// Bar placement relative to the bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistAlign {
    Left,
    #[default]
    Mid,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Options for [`Charts::pie_chart`](crate::Charts::pie_chart).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieOptions {
    pub title: String,
    /// Wedge colors, cycled when shorter than the data. `None` uses the default cycle.
    pub colors: Option<Vec<String>>,
    /// Angle in degrees, counter-clockwise from the x-axis, where the first wedge starts.
    pub startangle: f64,
    /// Per-wedge offset from the center, as a fraction of the radius.
    pub explode: Option<Vec<f64>>,
    pub shadow: bool,
    /// printf-style format for the percentage labels; `None` hides them.
    pub autopct: Option<String>,
    pub pctdistance: f64,
    pub labeldistance: f64,
    pub radius: f64,
    pub counterclock: bool,
    pub wedgeprops: Option<WedgeProps>,
    pub textprops: Option<TextProps>,
    pub fontsize: f32,
}

impl Default for PieOptions {
    fn default() -> Self {
        Self {
            title: "Pie Chart".to_string(),
            colors: None,
            startangle: 0.0,
            explode: None,
            shadow: false,
            autopct: Some("%1.1f%%".to_string()),
            pctdistance: 0.6,
            labeldistance: 1.1,
            radius: 1.0,
            counterclock: true,
            wedgeprops: None,
            textprops: None,
            fontsize: DEFAULT_FONT_SIZE,
        }
    }
}

/// Style overrides applied to every pie wedge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WedgeProps {
    pub edgecolor: Option<String>,
    pub linewidth: Option<f32>,
    pub alpha: Option<f32>,
}

/// Style overrides applied to pie labels and percentage texts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextProps {
    pub fontsize: Option<f32>,
    pub color: Option<String>,
    pub bold: bool,
}

/// Options for [`Charts::scatter_plot`](crate::Charts::scatter_plot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterOptions {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub color: ScatterColor,
    pub marker: String,
    /// Marker area in points squared; `None` means 36.
    pub s: Option<MarkerSize>,
    pub alpha: f32,
    /// Marker edge color; "none" draws no edge, "face" matches the fill.
    pub edgecolors: String,
    pub linewidths: f32,
    pub cmap: Option<String>,
    pub norm: Option<Normalize>,
    pub vmin: Option<f64>,
    pub vmax: Option<f64>,
    pub fontsize: f32,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self {
            title: "Scatter Plot".to_string(),
            xlabel: "X-axis".to_string(),
            ylabel: "Y-axis".to_string(),
            color: ScatterColor::default(),
            marker: "o".to_string(),
            s: None,
            alpha: 1.0,
            edgecolors: "none".to_string(),
            linewidths: 1.0,
            cmap: None,
            norm: None,
            vmin: None,
            vmax: None,
            fontsize: DEFAULT_FONT_SIZE,
        }
    }
}

/// Scatter marker fill: one color for every point, or one scalar per point
/// mapped through the colormap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScatterColor {
    Single(String),
    Values(Vec<f64>),
}

impl Default for ScatterColor {
    fn default() -> Self {
        ScatterColor::Single("blue".to_string())
    }
}

impl From<&str> for ScatterColor {
    fn from(color: &str) -> Self {
        ScatterColor::Single(color.to_string())
    }
}

impl From<Vec<f64>> for ScatterColor {
    fn from(values: Vec<f64>) -> Self {
        ScatterColor::Values(values)
    }
}

/// Scatter marker area, shared or per point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkerSize {
    Uniform(f64),
    PerPoint(Vec<f64>),
}

impl From<f64> for MarkerSize {
    fn from(size: f64) -> Self {
        MarkerSize::Uniform(size)
    }
}

impl From<Vec<f64>> for MarkerSize {
    fn from(sizes: Vec<f64>) -> Self {
        MarkerSize::PerPoint(sizes)
    }
}

/// Linear normalization bounds for colormapped values. Unset bounds come from the data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Normalize {
    pub vmin: Option<f64>,
    pub vmax: Option<f64>,
}

impl Normalize {
    pub fn new(vmin: f64, vmax: f64) -> Self {
        Self {
            vmin: Some(vmin),
            vmax: Some(vmax),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_titles() {
        assert_eq!(BarOptions::default().title, "Bar Graph");
        assert_eq!(LineOptions::default().title, "Line Graph");
        assert_eq!(HistogramOptions::default().title, "Histogram");
        assert_eq!(PieOptions::default().title, "Pie Chart");
        assert_eq!(ScatterOptions::default().title, "Scatter Plot");
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let opts: BarOptions =
            serde_json::from_str(r#"{"title": "Sales", "legend": true}"#).unwrap();
        assert_eq!(opts.title, "Sales");
        assert!(opts.legend);
        assert_eq!(opts.color, "blue");
        assert_eq!(opts.edgecolor, "black");
        assert_eq!(opts.width, 0.8);
    }

    #[test]
    fn test_untagged_bins() {
        let opts: HistogramOptions = serde_json::from_str(r#"{"bins": 20}"#).unwrap();
        assert_eq!(opts.bins, Bins::Count(20));

        let opts: HistogramOptions = serde_json::from_str(r#"{"bins": [0, 1, 5]}"#).unwrap();
        assert_eq!(opts.bins, Bins::Edges(vec![0.0, 1.0, 5.0]));

        let opts: HistogramOptions =
            serde_json::from_str(r#"{"bins": "sturges", "histtype": "stepfilled"}"#).unwrap();
        assert_eq!(opts.bins, Bins::Rule(BinRule::Sturges));
        assert_eq!(opts.histtype, HistType::StepFilled);
    }

    #[test]
    fn test_scatter_color_forms() {
        let opts: ScatterOptions =
            serde_json::from_str(r#"{"color": "red", "s": [10, 20]}"#).unwrap();
        assert_eq!(opts.color, ScatterColor::Single("red".to_string()));
        assert_eq!(opts.s, Some(MarkerSize::PerPoint(vec![10.0, 20.0])));

        let opts: ScatterOptions =
            serde_json::from_str(r#"{"color": [0.1, 0.9], "cmap": "plasma"}"#).unwrap();
        assert_eq!(opts.color, ScatterColor::Values(vec![0.1, 0.9]));
        assert_eq!(opts.cmap.as_deref(), Some("plasma"));
    }

    #[test]
    fn test_pie_autopct_can_be_disabled() {
        let opts: PieOptions = serde_json::from_str(r#"{"autopct": null}"#).unwrap();
        assert_eq!(opts.autopct, None);
        assert_eq!(PieOptions::default().autopct.as_deref(), Some("%1.1f%%"));
    }
}
