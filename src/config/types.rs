//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Initial image settings.
///
/// Used for the blank image the paint core starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Image width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Image height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Fill color of a new image; also the initial eraser color
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background_color: default_background_color(),
        }
    }
}

/// Drawing tool defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ToolsConfig {
    /// Tool selected at startup (pencil, eraser, color-picker, airbrush, line)
    #[serde(default = "default_tool")]
    pub default_tool: Tool,

    /// Initial tool size in pixels (valid range: 0 - max_size)
    #[serde(default = "default_size")]
    pub default_size: u32,

    /// Upper bound of the size control (valid range: 1 - 512)
    #[serde(default = "default_max_size")]
    pub max_size: u32,

    /// Initial paint color
    #[serde(default = "default_foreground_color")]
    pub foreground_color: ColorSpec,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            default_size: default_size(),
            max_size: default_max_size(),
            foreground_color: default_foreground_color(),
        }
    }
}

/// Airbrush behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AirbrushConfig {
    /// Chance that each pixel inside the spray circle is painted per event
    /// (valid range: 0.0 - 1.0)
    #[serde(default = "default_density")]
    pub density: f64,

    /// Fixed random seed for reproducible spray patterns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AirbrushConfig {
    fn default() -> Self {
        Self {
            density: default_density(),
            seed: None,
        }
    }
}

/// Decorative border drawn right of and below the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BorderConfig {
    /// Number of graded gray rings; 0 disables the border (valid range: 0 - 32)
    #[serde(default = "default_border_width")]
    pub width: u32,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            width: default_border_width(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> u32 {
    640
}

fn default_height() -> u32 {
    480
}

pub(super) fn default_background_color() -> ColorSpec {
    ColorSpec::named("white")
}

fn default_tool() -> Tool {
    Tool::Pencil
}

fn default_size() -> u32 {
    1
}

fn default_max_size() -> u32 {
    50
}

pub(super) fn default_foreground_color() -> ColorSpec {
    ColorSpec::named("black")
}

fn default_density() -> f64 {
    0.25
}

fn default_border_width() -> u32 {
    5
}
