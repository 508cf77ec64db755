//! Figure artists drawn as egui_plot items.

use egui::{Align2, Color32, RichText, Stroke};
use egui_plot::{
    Bar, BarChart, Line, LineStyle as PlotLineStyle, MarkerShape, PlotPoint, PlotUi, Points,
    Polygon, Text,
};

use super::{color32, Scale};
use crate::figure::{
    Anchor, Artist, Bars, Direction, Line as FigureLine, Pie, PlacedText, Scatter, Step, Wedge,
};
use crate::style::{LineStyle, Marker, Rgba};

/// Pie shadow offset as a fraction of the radius.
const SHADOW_OFFSET: f64 = 0.02;
/// Arc resolution in degrees.
const ARC_STEP: f64 = 2.0;
/// Largest sector filled as one polygon; fills must stay convex.
const MAX_SECTOR: f64 = 90.0;

pub(crate) fn draw(plot_ui: &mut PlotUi, artist: &Artist, scale: Scale) {
    match artist {
        Artist::Bars(bars) => draw_bars(plot_ui, bars, scale),
        Artist::Line(line) => draw_line(plot_ui, line, scale),
        Artist::Step(step) => draw_step(plot_ui, step),
        Artist::Pie(pie) => draw_pie(plot_ui, pie, scale),
        Artist::Scatter(scatter) => draw_scatter(plot_ui, scatter, scale),
    }
}

fn stroke(width: f32, color: Rgba, scale: Scale) -> Stroke {
    if color.is_transparent() || width <= 0.0 {
        Stroke::NONE
    } else {
        Stroke::new(scale.px(width), color32(color))
    }
}

fn draw_bars(plot_ui: &mut PlotUi, bars: &Bars, scale: Scale) {
    let edge = stroke(bars.line_width, bars.edge, scale);
    let elements = bars
        .patches
        .iter()
        .map(|patch| {
            Bar::new(patch.center, patch.height)
                .width(patch.width)
                .fill(color32(bars.fill))
                .stroke(edge)
        })
        .collect();

    let chart = BarChart::new(elements).color(color32(bars.fill));
    let chart = match bars.direction {
        Direction::Vertical => chart,
        Direction::Horizontal => chart.horizontal(),
    };
    plot_ui.bar_chart(chart);
}

fn draw_line(plot_ui: &mut PlotUi, line: &FigureLine, scale: Scale) {
    let style = match line.style {
        LineStyle::Solid => Some(PlotLineStyle::Solid),
        LineStyle::Dashed | LineStyle::DashDot => Some(PlotLineStyle::Dashed {
            length: scale.px(3.7 * line.width.max(1.0)),
        }),
        LineStyle::Dotted => Some(PlotLineStyle::Dotted {
            spacing: scale.px(1.65 * line.width.max(1.0)),
        }),
        LineStyle::None => None,
    };

    if let Some(style) = style {
        plot_ui.line(
            Line::new(line.points.clone())
                .color(color32(line.color))
                .width(scale.px(line.width))
                .style(style),
        );
    }

    let Some(marker) = &line.marker else {
        return;
    };
    let Some(shape) = marker_shape(marker.shape) else {
        return;
    };
    let radius = scale.px(marker.size * marker.shape.size_factor()) / 2.0;

    if !marker.face.is_transparent() {
        plot_ui.points(
            Points::new(line.points.clone())
                .shape(shape)
                .radius(radius)
                .color(color32(marker.face))
                .filled(true),
        );
    }
    if !marker.edge.is_transparent() && marker.edge_width > 0.0 {
        plot_ui.points(
            Points::new(line.points.clone())
                .shape(shape)
                .radius(radius)
                .color(color32(marker.edge))
                .filled(false),
        );
    }
}

fn draw_step(plot_ui: &mut PlotUi, step: &Step) {
    let color = color32(step.color);

    if step.filled {
        // One rectangle per bin; the whole outline is usually concave.
        let bins = step.outline.len().saturating_sub(2) / 2;
        for i in 0..bins {
            let [a, b] = [step.outline[2 * i + 1], step.outline[2 * i + 2]];
            let corners = match step.direction {
                Direction::Vertical => vec![[a[0], 0.0], a, b, [b[0], 0.0]],
                Direction::Horizontal => vec![[0.0, a[1]], a, b, [0.0, b[1]]],
            };
            plot_ui.polygon(Polygon::new(corners).fill_color(color).stroke(Stroke::NONE));
        }
    }

    plot_ui.line(Line::new(step.outline.clone()).color(color).width(1.5));
}

fn draw_pie(plot_ui: &mut PlotUi, pie: &Pie, scale: Scale) {
    if pie.shadow {
        for wedge in pie.wedges.iter().filter(|w| !w.face.is_transparent()) {
            let offset = SHADOW_OFFSET * wedge.radius;
            let shade = wedge.face.darken(0.3).with_alpha(0.5);
            fill_wedge(plot_ui, wedge, [offset, -offset], color32(shade));
        }
    }

    for wedge in &pie.wedges {
        fill_wedge(plot_ui, wedge, [0.0, 0.0], color32(wedge.face));
        let edge = stroke(wedge.line_width, wedge.edge, scale);
        if edge != Stroke::NONE {
            let mut outline = vec![wedge.center];
            outline.extend(arc(wedge, wedge.theta1, wedge.theta2, [0.0, 0.0]));
            outline.push(wedge.center);
            plot_ui.line(Line::new(outline).color(edge.color).width(edge.width));
        }
    }

    for wedge in &pie.wedges {
        for text in wedge.label.iter().chain(&wedge.percent) {
            draw_text(plot_ui, text, scale);
        }
    }
}

fn fill_wedge(plot_ui: &mut PlotUi, wedge: &Wedge, offset: [f64; 2], color: Color32) {
    for (start, end) in sectors(wedge.theta1, wedge.theta2) {
        let mut sector = vec![[wedge.center[0] + offset[0], wedge.center[1] + offset[1]]];
        sector.extend(arc(wedge, start, end, offset));
        plot_ui.polygon(Polygon::new(sector).fill_color(color).stroke(Stroke::NONE));
    }
}

/// Split `theta1..theta2` degrees into pieces no wider than `MAX_SECTOR`.
fn sectors(theta1: f64, theta2: f64) -> Vec<(f64, f64)> {
    let mut pieces = Vec::new();
    let mut start = theta1;
    while start < theta2 {
        let end = (start + MAX_SECTOR).min(theta2);
        // Angles too large to step through.
        if end <= start {
            break;
        }
        pieces.push((start, end));
        start = end;
    }
    pieces
}

/// Points along the wedge's rim from `from` to `to` degrees.
fn arc(wedge: &Wedge, from: f64, to: f64, offset: [f64; 2]) -> Vec<[f64; 2]> {
    let steps = ((to - from) / ARC_STEP).ceil().max(1.0) as usize;
    (0..=steps)
        .map(|i| {
            let theta = (from + (to - from) * i as f64 / steps as f64).to_radians();
            [
                wedge.center[0] + offset[0] + wedge.radius * theta.cos(),
                wedge.center[1] + offset[1] + wedge.radius * theta.sin(),
            ]
        })
        .collect()
}

fn draw_text(plot_ui: &mut PlotUi, text: &PlacedText, scale: Scale) {
    let mut rich = RichText::new(&text.text)
        .size(scale.px(text.font_size))
        .color(color32(text.color));
    if text.bold {
        rich = rich.strong();
    }
    let anchor = match text.anchor {
        Anchor::Left => Align2::LEFT_CENTER,
        Anchor::Center => Align2::CENTER_CENTER,
        Anchor::Right => Align2::RIGHT_CENTER,
    };
    let position = PlotPoint::new(text.position[0], text.position[1]);
    plot_ui.text(Text::new(position, rich).anchor(anchor));
}

fn draw_scatter(plot_ui: &mut PlotUi, scatter: &Scatter, scale: Scale) {
    let Some(shape) = marker_shape(scatter.shape) else {
        return;
    };

    for (i, point) in scatter.points.iter().enumerate() {
        // Sizes are areas, so the diameter is the square root.
        let size = scatter.sizes.get(i).copied().unwrap_or_default();
        let radius = scale.px(size.sqrt() * scatter.shape.size_factor()) / 2.0;
        let face = scatter.faces.get(i).copied().unwrap_or(Rgba::TRANSPARENT);
        let edge = scatter.edges.get(i).copied().unwrap_or(Rgba::TRANSPARENT);

        if !face.is_transparent() {
            plot_ui.points(
                Points::new(vec![*point])
                    .shape(shape)
                    .radius(radius)
                    .color(color32(face))
                    .filled(true),
            );
        }
        if !edge.is_transparent() && scatter.edge_width > 0.0 {
            plot_ui.points(
                Points::new(vec![*point])
                    .shape(shape)
                    .radius(radius)
                    .color(color32(edge))
                    .filled(false),
            );
        }
    }
}

fn marker_shape(marker: Marker) -> Option<MarkerShape> {
    let shape = match marker {
        Marker::None => return None,
        Marker::Point | Marker::Pixel | Marker::Circle | Marker::Pentagon | Marker::Hexagon => {
            MarkerShape::Circle
        }
        Marker::Square => MarkerShape::Square,
        Marker::TriangleUp => MarkerShape::Up,
        Marker::TriangleDown => MarkerShape::Down,
        Marker::TriangleLeft => MarkerShape::Left,
        Marker::TriangleRight => MarkerShape::Right,
        Marker::Diamond | Marker::ThinDiamond => MarkerShape::Diamond,
        Marker::Plus | Marker::VLine | Marker::HLine => MarkerShape::Plus,
        Marker::Cross => MarkerShape::Cross,
        Marker::Star => MarkerShape::Asterisk,
    };
    Some(shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wedge(theta1: f64, theta2: f64) -> Wedge {
        Wedge {
            center: [0.0, 0.0],
            radius: 1.0,
            theta1,
            theta2,
            face: Rgba::BLACK,
            edge: Rgba::TRANSPARENT,
            line_width: 0.0,
            label: None,
            percent: None,
        }
    }

    #[test]
    fn test_arc_endpoints() {
        let w = wedge(0.0, 90.0);
        let points = arc(&w, w.theta1, w.theta2, [0.0, 0.0]);
        assert_eq!(points.len(), 46);
        let first = points[0];
        let last = points[points.len() - 1];
        assert!((first[0] - 1.0).abs() < 1e-12 && first[1].abs() < 1e-12);
        assert!(last[0].abs() < 1e-12 && (last[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sectors_stay_within_quarter_turns() {
        assert_eq!(sectors(0.0, 100.0), vec![(0.0, 90.0), (90.0, 100.0)]);
        assert_eq!(sectors(-270.0, 0.0).len(), 3);
        assert!(sectors(10.0, 10.0).is_empty());
        assert!(sectors(1e20, 2e20).is_empty());
    }

    #[test]
    fn test_invisible_strokes() {
        let scale = Scale::new(100.0);
        assert_eq!(stroke(1.0, Rgba::TRANSPARENT, scale), Stroke::NONE);
        assert_eq!(stroke(0.0, Rgba::BLACK, scale), Stroke::NONE);
        assert_ne!(stroke(1.0, Rgba::BLACK, scale), Stroke::NONE);
    }

    #[test]
    fn test_marker_shapes() {
        assert_eq!(marker_shape(Marker::None), None);
        assert_eq!(marker_shape(Marker::Circle), Some(MarkerShape::Circle));
        assert_eq!(marker_shape(Marker::Star), Some(MarkerShape::Asterisk));
    }
}
