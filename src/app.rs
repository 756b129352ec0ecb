use crate::input::{InputEvent, route_event};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::GardenState;
use crate::style::GardenStyle;
use crate::surface::EguiSurface;

/// The garden sketcher. Nothing is persisted: the sketch lives as long as the app.
#[derive(Debug)]
pub struct GardenApp {
    state: GardenState,
    renderer: Renderer,
}

impl Default for GardenApp {
    fn default() -> Self {
        Self::with_style(GardenStyle::default())
    }
}

impl GardenApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // The sketch is drawn on white, so match the rest of the UI to it.
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::default()
    }

    pub fn with_style(style: GardenStyle) -> Self {
        Self {
            state: GardenState::new(style.default_range.clone()),
            renderer: Renderer::new(style),
        }
    }

    pub fn state(&self) -> &GardenState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GardenState {
        &mut self.state
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Routes an event into the state and schedules a repaint when the scene changed.
    pub fn handle_event(&mut self, ctx: &egui::Context, event: InputEvent) {
        if route_event(&event, &mut self.state).is_needed() {
            ctx.request_repaint();
        }
    }

    /// Full redraw of the scene into `rect`.
    pub fn paint(&self, painter: &egui::Painter, rect: egui::Rect) {
        let mut surface = EguiSurface::new(painter, rect, self.renderer.style().background);
        self.renderer.render(&self.state.scene, &mut surface);
    }

    fn scene_window(&self, ctx: &egui::Context) {
        egui::Window::new("Scene")
            .default_open(false)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0))
            .show(ctx, |ui| {
                let scene = &self.state.scene;
                ui.label(format!("Active tool: {}", self.state.active_tool()));
                ui.label(format!("Boundary vertices: {}", scene.vertices().len()));
                ui.label(format!("Objects: {}", scene.objects().len()));

                ui.collapsing("Objects as JSON", |ui| {
                    match serde_json::to_string_pretty(scene.objects()) {
                        Ok(json) => {
                            egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                                ui.monospace(json);
                            });
                        }
                        Err(err) => {
                            ui.colored_label(egui::Color32::RED, err.to_string());
                        }
                    }
                });
            });
    }
}

impl eframe::App for GardenApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        self.scene_window(ctx);
        central_panel(self, ctx);
    }
}
