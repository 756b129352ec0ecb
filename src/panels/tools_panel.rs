use crate::GardenApp;
use crate::components::ToolButton;
use crate::input::InputEvent;

pub fn tools_panel(app: &mut GardenApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let mut clicked = None;
            for button in app.state().toolbar.buttons() {
                if ToolButton::new(*button).show(ui).clicked() {
                    clicked = Some(button.tool);
                }
            }
            if let Some(tool) = clicked {
                log::info!("Tool selected from UI: {tool}");
                app.handle_event(ctx, InputEvent::ToolSelect(tool));
            }

            if app.state().toolbar.options().visible {
                ui.separator();
                ui.strong("Options");
                ui.horizontal(|ui| {
                    ui.label("Sprinkler range (px):");
                    ui.add(
                        egui::TextEdit::singleline(app.state_mut().toolbar.range_input_mut())
                            .desired_width(60.0),
                    );
                });
            }
        });
}
