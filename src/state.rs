use crate::scene::Scene;
use crate::tools::{Tool, Toolbar};

/// Everything that changes while sketching: the scene and the tool selection.
///
/// Owned by the app and handed by reference to the dispatcher and the renderer.
#[derive(Debug, Clone, Default)]
pub struct GardenState {
    pub scene: Scene,
    pub toolbar: Toolbar,
}

impl GardenState {
    pub fn new(default_range: impl Into<String>) -> Self {
        Self {
            scene: Scene::new(),
            toolbar: Toolbar::new(default_range),
        }
    }

    pub fn active_tool(&self) -> Tool {
        self.toolbar.active_tool()
    }
}
