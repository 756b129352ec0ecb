use std::fmt;
use std::str::FromStr;

use crate::error::GardenError;

mod toolbar;

pub use toolbar::{OptionsPanel, ToolButtonState, Toolbar};

/// How the next click on the surface is interpreted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    #[default]
    DrawBorder,
    Tree,
    Patio,
    Sprinkler,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::DrawBorder, Tool::Tree, Tool::Patio, Tool::Sprinkler];

    /// Stable identifier of the tool-selector button bound to this tool.
    pub fn button_id(self) -> &'static str {
        match self {
            Self::DrawBorder => "draw-border-tool",
            Self::Tree => "add-tree-tool",
            Self::Patio => "add-patio-tool",
            Self::Sprinkler => "add-sprinkler-tool",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::DrawBorder => "Draw Border",
            Self::Tree => "Add Tree",
            Self::Patio => "Add Patio",
            Self::Sprinkler => "Add Sprinkler",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::DrawBorder => "✏",
            Self::Tree => "🌳",
            Self::Patio => "⬛",
            Self::Sprinkler => "💧",
        }
    }

    /// Whether this tool has settings shown in the options panel.
    pub fn has_options(self) -> bool {
        self == Self::Sprinkler
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DrawBorder => "draw_border",
            Self::Tree => "tree",
            Self::Patio => "patio",
            Self::Sprinkler => "sprinkler",
        };
        f.write_str(name)
    }
}

/// Parses a tool-selector button identifier.
impl FromStr for Tool {
    type Err = GardenError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.button_id() == id)
            .ok_or_else(|| GardenError::UnknownTool(id.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool_is_draw_border() {
        assert_eq!(Tool::default(), Tool::DrawBorder);
    }

    #[test]
    fn test_button_ids_round_trip() {
        for tool in Tool::ALL {
            assert_eq!(tool.button_id().parse::<Tool>(), Ok(tool));
        }
    }

    #[test]
    fn test_unknown_button_id() {
        assert_eq!(
            "erase-tool".parse::<Tool>(),
            Err(GardenError::UnknownTool("erase-tool".to_owned()))
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Tool::DrawBorder.to_string(), "draw_border");
        assert_eq!(Tool::Sprinkler.to_string(), "sprinkler");
    }

    #[test]
    fn test_only_sprinkler_has_options() {
        let with_options: Vec<_> = Tool::ALL.into_iter().filter(|t| t.has_options()).collect();
        assert_eq!(with_options, [Tool::Sprinkler]);
    }
}
