use super::Tool;

/// Visual state of one tool-selector button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolButtonState {
    pub tool: Tool,
    pub active: bool,
}

impl ToolButtonState {
    pub fn id(&self) -> &'static str {
        self.tool.button_id()
    }
}

/// The tool options container. Only the sprinkler range lives here for now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsPanel {
    pub visible: bool,
    /// Raw text of the range input, parsed only when a sprinkler is placed
    pub range_input: String,
}

/// Owns the active tool and keeps the selector buttons and options panel in step with it.
#[derive(Debug, Clone)]
pub struct Toolbar {
    active: Tool,
    buttons: [ToolButtonState; 4],
    options: OptionsPanel,
}

impl Toolbar {
    pub fn new(default_range: impl Into<String>) -> Self {
        let mut toolbar = Self {
            active: Tool::default(),
            buttons: Tool::ALL.map(|tool| ToolButtonState { tool, active: false }),
            options: OptionsPanel {
                visible: false,
                range_input: default_range.into(),
            },
        };
        toolbar.set_active_tool(Tool::default());
        toolbar
    }

    /// Switch tools: exactly the matching button is marked active, and the options
    /// panel is shown only for tools that have options.
    pub fn set_active_tool(&mut self, tool: Tool) {
        if self.active != tool {
            log::info!("Active tool: {} -> {}", self.active, tool);
        }
        self.active = tool;
        self.options.visible = tool.has_options();
        for button in &mut self.buttons {
            button.active = button.tool == tool;
        }
    }

    pub fn active_tool(&self) -> Tool {
        self.active
    }

    pub fn buttons(&self) -> &[ToolButtonState] {
        &self.buttons
    }

    pub fn options(&self) -> &OptionsPanel {
        &self.options
    }

    pub fn range_input(&self) -> &str {
        &self.options.range_input
    }

    pub fn range_input_mut(&mut self) -> &mut String {
        &mut self.options.range_input
    }
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new(crate::style::GardenStyle::default().default_range)
    }
}
