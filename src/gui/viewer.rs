//! Figure Viewer
//! One window showing one figure: title on top, plot in the middle, colorbar on the right.

use egui::{Key, RichText, ViewportCommand};
use egui_plot::Plot;

use super::{artists, colorbar, legend, Scale};
use crate::figure::Figure;

const COLORBAR_PANEL_WIDTH: f32 = 90.0;
/// Colorbar tick labels, in points.
const TICK_FONT_SIZE: f32 = 10.0;
/// Room around a pie so labels outside the rim stay visible.
const PIE_MARGIN: f64 = 1.4;

/// Read-only view of a finished figure. Q or Escape closes the window.
pub(crate) struct FigureViewer {
    figure: Figure,
    scale: Scale,
}

impl FigureViewer {
    pub(crate) fn new(figure: Figure, pixels_per_inch: f32) -> Self {
        Self {
            figure,
            scale: Scale::new(pixels_per_inch),
        }
    }

    fn show_plot(&self, ui: &mut egui::Ui) {
        let figure = &self.figure;
        let scale = self.scale;

        let mut plot = Plot::new("figure")
            .show_grid(figure.grid)
            .show_axes(figure.frame)
            .allow_scroll(false);

        if let Some(label) = &figure.x_label {
            plot = plot.x_axis_label(RichText::new(&label.content).size(scale.px(label.font_size)));
        }
        if let Some(label) = &figure.y_label {
            plot = plot.y_axis_label(RichText::new(&label.content).size(scale.px(label.font_size)));
        }
        if figure.equal_aspect {
            plot = plot.data_aspect(1.0);
        }
        if !figure.frame {
            plot = plot.show_x(false).show_y(false);
        }
        for pie in figure.pies() {
            for wedge in &pie.wedges {
                let reach = PIE_MARGIN * wedge.radius;
                plot = plot
                    .include_x(wedge.center[0] - reach)
                    .include_x(wedge.center[0] + reach)
                    .include_y(wedge.center[1] - reach)
                    .include_y(wedge.center[1] + reach);
            }
        }

        let response = plot.show(ui, |plot_ui| {
            for artist in &figure.artists {
                artists::draw(plot_ui, artist, scale);
            }
        });

        if let Some(entries) = &figure.legend {
            legend::paint(ui.painter(), response.response.rect, entries, scale);
        }
    }
}

impl eframe::App for FigureViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(Key::Q) || i.key_pressed(Key::Escape)) {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        // Top panel - Title
        if let Some(title) = &self.figure.title {
            egui::TopBottomPanel::top("title")
                .show_separator_line(false)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(&title.content)
                                .size(self.scale.px(title.font_size))
                                .strong(),
                        );
                    });
                });
        }

        // Right panel - Colorbar
        if let Some(bar) = &self.figure.colorbar {
            egui::SidePanel::right("colorbar")
                .resizable(false)
                .exact_width(COLORBAR_PANEL_WIDTH)
                .show(ctx, |ui| {
                    colorbar::paint(ui, bar, self.scale.px(TICK_FONT_SIZE));
                });
        }

        // Central panel - Plot
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_plot(ui);
        });
    }
}
