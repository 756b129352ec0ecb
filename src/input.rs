use egui::{Pos2, Rect};

use crate::scene::{GardenObject, SprinklerRange};
use crate::state::GardenState;
use crate::tools::Tool;

/// Input the core reacts to, independent of how the UI shell captures it.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A tool-selector control bound to `Tool` was clicked
    ToolSelect(Tool),
    /// A tool-selector control was clicked, identified by its button id
    ButtonClick(String),
    /// The drawing surface was clicked at a surface-local position
    SurfaceClick(Pos2),
}

impl InputEvent {
    /// Builds a surface click from a screen position, or `None` when the
    /// position lies outside the surface.
    pub fn surface_click(screen_pos: Pos2, surface_rect: Rect) -> Option<Self> {
        surface_rect
            .contains(screen_pos)
            .then(|| Self::SurfaceClick(Pos2::ZERO + (screen_pos - surface_rect.min)))
    }
}

/// Whether handling an event changed the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    Needed,
    NotNeeded,
}

impl Redraw {
    pub fn is_needed(self) -> bool {
        self == Self::Needed
    }
}

/// Applies one input event to the state.
///
/// Tool selection only updates the toolbar. Surface clicks append to the scene
/// according to the active tool and always ask for a redraw.
pub fn route_event(event: &InputEvent, state: &mut GardenState) -> Redraw {
    match event {
        InputEvent::ToolSelect(tool) => {
            state.toolbar.set_active_tool(*tool);
            Redraw::NotNeeded
        }
        InputEvent::ButtonClick(id) => {
            match id.parse::<Tool>() {
                Ok(tool) => state.toolbar.set_active_tool(tool),
                Err(err) => log::warn!("Ignoring click: {err}"),
            }
            Redraw::NotNeeded
        }
        InputEvent::SurfaceClick(pos) => {
            place(*pos, state);
            Redraw::Needed
        }
    }
}

fn place(pos: Pos2, state: &mut GardenState) {
    let tool = state.active_tool();
    log::debug!("Surface click at ({}, {}) with {tool}", pos.x, pos.y);

    match tool {
        Tool::DrawBorder => state.scene.add_vertex(pos),
        Tool::Tree => state.scene.add_object(GardenObject::tree(pos)),
        Tool::Patio => state.scene.add_object(GardenObject::patio(pos)),
        Tool::Sprinkler => {
            let range = SprinklerRange::from_input(state.toolbar.range_input());
            state.scene.add_object(GardenObject::sprinkler(pos, range));
        }
    }
}
