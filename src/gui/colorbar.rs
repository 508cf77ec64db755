//! Colorbar painted in the side panel.

use egui::{vec2, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui};

use super::color32;
use crate::figure::Colorbar;

const BAR_WIDTH: f32 = 20.0;
const MARGIN: f32 = 24.0;
const GRADIENT_STEPS: usize = 128;
const TICKS: usize = 5;
const TICK_LENGTH: f32 = 4.0;

pub(crate) fn paint(ui: &mut Ui, colorbar: &Colorbar, font_size: f32) {
    let (rect, _) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
    let painter = ui.painter_at(rect);

    let bar = Rect::from_min_size(
        rect.min + vec2(MARGIN / 2.0, MARGIN),
        vec2(BAR_WIDTH, (rect.height() - 2.0 * MARGIN).max(0.0)),
    );

    // Low values at the bottom.
    let step = bar.height() / GRADIENT_STEPS as f32;
    for i in 0..GRADIENT_STEPS {
        let t = (i as f64 + 0.5) / GRADIENT_STEPS as f64;
        let bottom = bar.bottom() - i as f32 * step;
        let slice = Rect::from_min_max(
            Pos2::new(bar.left(), bottom - step - 0.5),
            Pos2::new(bar.right(), bottom),
        );
        painter.rect_filled(slice, 0.0, color32(colorbar.colormap.sample(t)));
    }
    painter.rect_stroke(bar, 0.0, Stroke::new(1.0, Color32::BLACK));

    let font = FontId::proportional(font_size);
    for (t, value) in ticks(colorbar.vmin, colorbar.vmax) {
        let y = bar.bottom() - t as f32 * bar.height();
        painter.line_segment(
            [Pos2::new(bar.right(), y), Pos2::new(bar.right() + TICK_LENGTH, y)],
            Stroke::new(1.0, Color32::BLACK),
        );
        painter.text(
            Pos2::new(bar.right() + TICK_LENGTH + 2.0, y),
            Align2::LEFT_CENTER,
            format_tick(value),
            font.clone(),
            Color32::BLACK,
        );
    }
}

/// Evenly spaced ticks as (position along the bar, value).
fn ticks(vmin: f64, vmax: f64) -> Vec<(f64, f64)> {
    (0..TICKS)
        .map(|i| {
            let t = i as f64 / (TICKS - 1) as f64;
            (t, vmin + t * (vmax - vmin))
        })
        .collect()
}

fn format_tick(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_span_range() {
        let ticks = ticks(0.0, 10.0);
        assert_eq!(ticks.len(), TICKS);
        assert_eq!(ticks[0], (0.0, 0.0));
        assert_eq!(ticks[TICKS - 1], (1.0, 10.0));
    }

    #[test]
    fn test_tick_labels() {
        assert_eq!(format_tick(0.5), "0.5");
        assert_eq!(format_tick(10.0), "10");
        assert_eq!(format_tick(-0.001), "0");
        assert_eq!(format_tick(0.126), "0.13");
    }
}
