//! GUI module - native viewer for a finished figure

mod artists;
mod colorbar;
mod legend;
mod viewer;

use eframe::egui;
use egui::Color32;

use crate::figure::Figure;
use crate::style::Rgba;
use viewer::FigureViewer;

const APP_NAME: &str = "allgraph";

/// Open a window showing `figure` and block until it is closed.
pub(crate) fn run_viewer(figure: Figure, pixels_per_inch: f32) -> eframe::Result<()> {
    let title = figure
        .title
        .as_ref()
        .map_or_else(|| APP_NAME.to_string(), |t| t.content.clone());
    let size = [
        figure.size.width * pixels_per_inch,
        figure.size.height * pixels_per_inch,
    ];

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size)
            .with_min_inner_size([320.0, 240.0])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(FigureViewer::new(figure, pixels_per_inch)))
        }),
    )
}

/// Convert a figure color for egui.
pub(crate) fn color32(color: Rgba) -> Color32 {
    let [r, g, b, a] = color.to_rgba8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Points to screen pixels at the viewer scale.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scale {
    pixels_per_inch: f32,
}

impl Scale {
    pub(crate) fn new(pixels_per_inch: f32) -> Self {
        Self { pixels_per_inch }
    }

    pub(crate) fn px(&self, points: f32) -> f32 {
        points * self.pixels_per_inch / 72.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion() {
        assert_eq!(color32(Rgba::BLACK), Color32::BLACK);
        assert_eq!(color32(Rgba::TRANSPARENT).a(), 0);
        assert_eq!(color32(Rgba::from_rgb8(255, 0, 0)), Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_point_scale() {
        let scale = Scale::new(144.0);
        assert_eq!(scale.px(12.0), 24.0);
    }
}
