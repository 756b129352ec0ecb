use eframe::egui;

use crate::tools::ToolButtonState;

/// A tool-selector button: icon plus label, highlighted while its tool is active.
pub struct ToolButton {
    pub state: ToolButtonState,
}

impl ToolButton {
    pub fn new(state: ToolButtonState) -> Self {
        Self { state }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(ui.available_width().max(120.0), 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());
        let tool = self.state.tool;
        let selected = self.state.active;

        if ui.is_rect_visible(rect) {
            let bg_color = if selected {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                egui::Color32::from_gray(225)
            } else {
                egui::Color32::from_gray(240)
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if selected {
                egui::Color32::BLACK
            } else {
                egui::Color32::from_gray(60)
            };
            ui.painter().text(
                rect.left_center() + egui::vec2(10.0, 0.0),
                egui::Align2::LEFT_CENTER,
                format!("{}  {}", tool.icon(), tool.label()),
                egui::FontId::proportional(16.0),
                text_color,
            );

            if selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response.on_hover_text(self.state.id())
    }
}
