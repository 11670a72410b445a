use eframe::egui;

use crate::color::ColorPreset;

/// A square button filled with a preset colour
pub struct ColorSwatch {
    pub preset: ColorPreset,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(preset: ColorPreset, selected: bool) -> Self {
        Self { preset, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::vec2(24.0, 24.0);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter()
                .rect_filled(rect, 4.0, self.preset.rgb().to_color32());

            let border = if self.selected {
                egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243))
            } else if response.hovered() {
                egui::Stroke::new(1.5, egui::Color32::from_gray(120))
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(60))
            };
            ui.painter().rect_stroke(rect, 4.0, border);
        }

        response.on_hover_text(self.preset.name())
    }
}
