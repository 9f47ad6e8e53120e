//! Drawing tool selection.

use crate::error::PaintError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// Exactly one tool is active at a time. The active tool decides what a press,
/// drag and release do to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Square brush in the foreground color
    Pencil,
    /// Square brush in the background color
    Eraser,
    /// Copies a pixel into the foreground (primary) or background (secondary) color
    ColorPicker,
    /// Random spray inside a circle, foreground color
    Airbrush,
    /// Two-click straight line with a live preview between the clicks
    Line,
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::Pencil,
        Tool::Eraser,
        Tool::ColorPicker,
        Tool::Airbrush,
        Tool::Line,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Pencil => "pencil",
            Tool::Eraser => "eraser",
            Tool::ColorPicker => "color-picker",
            Tool::Airbrush => "airbrush",
            Tool::Line => "line",
        }
    }

    /// Whether the tool size affects this tool.
    pub fn uses_size(self) -> bool {
        !matches!(self, Tool::ColorPicker)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        let wanted = if wanted == "picker" {
            "color-picker".to_string()
        } else {
            wanted
        };
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == wanted)
            .ok_or_else(|| PaintError::invalid(format!("unknown tool '{}'", s.trim())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for tool in Tool::ALL {
            assert_eq!(tool.name().parse::<Tool>().unwrap(), tool);
        }
        assert_eq!("Color_Picker".parse::<Tool>().unwrap(), Tool::ColorPicker);
        assert_eq!("picker".parse::<Tool>().unwrap(), Tool::ColorPicker);
    }

    #[test]
    fn unknown_tool_is_invalid_argument() {
        assert!(matches!(
            "bucket".parse::<Tool>(),
            Err(PaintError::InvalidArgument(_))
        ));
    }
}
