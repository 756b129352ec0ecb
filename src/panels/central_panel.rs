use crate::GardenApp;
use crate::input::InputEvent;

pub fn central_panel(app: &mut GardenApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let size = app.renderer().style().surface_size;
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
        let surface_rect = response.rect;

        // Handle input before painting so the click shows up in this frame.
        if response.clicked() {
            let event = response
                .interact_pointer_pos()
                .and_then(|pos| InputEvent::surface_click(pos, surface_rect));
            if let Some(event) = event {
                app.handle_event(ctx, event);
            }
        }

        app.paint(&painter, surface_rect);
    });
}
