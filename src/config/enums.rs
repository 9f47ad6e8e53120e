//! Configuration enum types.

use crate::draw::Color;
use crate::error::PaintError;
use crate::util;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// foreground_color = "red"
///
/// # Custom RGB color (0-255 per component)
/// foreground_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (black, white, red, green, blue, yellow, orange, pink, gray,
    /// light-gray, dark-gray, cyan, magenta) or a `#rrggbb` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    pub fn named(name: &str) -> Self {
        ColorSpec::Name(name.to_string())
    }

    /// Converts the specification to an opaque [`Color`].
    ///
    /// Empty or unknown names are rejected with `InvalidArgument`.
    pub fn to_color(&self) -> Result<Color, PaintError> {
        match self {
            ColorSpec::Name(name) => util::parse_color(name),
            ColorSpec::Rgb([r, g, b]) => Ok(Color::rgb(*r, *g, *b)),
        }
    }
}
