//! Legend box painted over the upper right corner of the plot area.

use egui::{vec2, Color32, FontId, Painter, Pos2, Rect, Stroke};

use super::{color32, Scale};
use crate::figure::Legend;

const MARGIN: f32 = 10.0;
const PADDING: f32 = 8.0;
const SWATCH_WIDTH: f32 = 28.0;
const SWATCH_GAP: f32 = 8.0;
const ROW_GAP: f32 = 4.0;

pub(crate) fn paint(painter: &Painter, plot_rect: Rect, legend: &Legend, scale: Scale) {
    if legend.entries.is_empty() {
        return;
    }

    let font = FontId::proportional(scale.px(legend.font_size));
    let galleys: Vec<_> = legend
        .entries
        .iter()
        .map(|entry| painter.layout_no_wrap(entry.label.clone(), font.clone(), Color32::BLACK))
        .collect();

    let text_width = galleys.iter().fold(0.0_f32, |w, g| w.max(g.size().x));
    let row_height = galleys.iter().fold(0.0_f32, |h, g| h.max(g.size().y)) + ROW_GAP;
    let inner = vec2(
        SWATCH_WIDTH + SWATCH_GAP + text_width,
        row_height * galleys.len() as f32,
    );

    let rect = Rect::from_min_size(
        Pos2::new(
            plot_rect.right() - MARGIN - inner.x - 2.0 * PADDING,
            plot_rect.top() + MARGIN,
        ),
        inner + vec2(2.0 * PADDING, 2.0 * PADDING),
    );
    painter.rect_filled(rect, 4.0, Color32::from_rgba_unmultiplied(255, 255, 255, 200));
    painter.rect_stroke(rect, 4.0, Stroke::new(1.0, Color32::from_gray(128)));

    for (i, (entry, galley)) in legend.entries.iter().zip(galleys).enumerate() {
        let top = rect.top() + PADDING + i as f32 * row_height;
        let swatch = Rect::from_min_size(
            Pos2::new(rect.left() + PADDING, top + row_height * 0.2),
            vec2(SWATCH_WIDTH, row_height * 0.6),
        );
        painter.rect_filled(swatch, 0.0, color32(entry.handle.fill));
        if !entry.handle.edge.is_transparent() {
            painter.rect_stroke(swatch, 0.0, Stroke::new(1.0, color32(entry.handle.edge)));
        }

        let text_pos = Pos2::new(
            swatch.right() + SWATCH_GAP,
            top + (row_height - galley.size().y) / 2.0,
        );
        painter.galley(text_pos, galley, Color32::BLACK);
    }
}
