//! Utility functions for colors and pixel geometry.
//!
//! This module provides:
//! - Color name parsing and naming for config files, scripts and the status line
//! - The continuous pointer position type and its pixel-center convention
//! - Axis-aligned rectangles used for clipping and dirty region tracking

use crate::draw::{Color, color::*};
use crate::error::PaintError;

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and replay scripts. Names are
/// case-insensitive; `_` and `-` are interchangeable (`light-gray`, `LIGHT_GRAY`).
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().replace('_', "-").as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "cyan" => Some(CYAN),
        "magenta" => Some(MAGENTA),
        "gray" | "grey" => Some(GRAY),
        "light-gray" | "light-grey" => Some(LIGHT_GRAY),
        "dark-gray" | "dark-grey" => Some(DARK_GRAY),
        _ => None,
    }
}

/// Parses a color name or a `#rrggbb` hex string.
///
/// Empty and unknown inputs are rejected; an absent color is never a valid
/// paint color.
pub fn parse_color(input: &str) -> Result<Color, PaintError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(PaintError::invalid("color must not be empty"));
    }

    if let Some(hex) = input.strip_prefix('#') {
        if hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            if let Ok(value) = u32::from_str_radix(hex, 16) {
                return Ok(Color::rgb(
                    (value >> 16) as u8,
                    (value >> 8) as u8,
                    value as u8,
                ));
            }
        }
        return Err(PaintError::invalid(format!("malformed hex color '{input}'")));
    }

    name_to_color(input).ok_or_else(|| PaintError::invalid(format!("unknown color '{input}'")))
}

/// Maps a Color value to its human-readable name.
///
/// Exact matches only; anything else is "Custom".
pub fn color_to_name(color: &Color) -> &'static str {
    match *color {
        BLACK => "Black",
        WHITE => "White",
        RED => "Red",
        GREEN => "Green",
        BLUE => "Blue",
        YELLOW => "Yellow",
        ORANGE => "Orange",
        PINK => "Pink",
        CYAN => "Cyan",
        MAGENTA => "Magenta",
        GRAY => "Gray",
        LIGHT_GRAY => "Light Gray",
        DARK_GRAY => "Dark Gray",
        _ => "Custom",
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Continuous pointer position in canvas space.
///
/// Integer pixel `(ix, iy)` maps to `(ix + 0.5, iy + 0.5)`, so brush squares
/// center on pixel centers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Position of the center of pixel `(x, y)`.
    pub fn pixel_center(x: i32, y: i32) -> Self {
        Self {
            x: f64::from(x) + 0.5,
            y: f64::from(y) + 0.5,
        }
    }

    /// Pixel containing this position.
    pub fn pixel(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

/// Axis-aligned rectangle helper used for clipping and dirty region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = max_x.saturating_sub(min_x);
        let height = max_y.saturating_sub(min_y);
        Self::new(min_x, min_y, width, height)
    }

    /// Returns a rectangle that covers both input rectangles.
    pub fn union(self, other: Rect) -> Rect {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = (self.x.saturating_add(self.width)).max(other.x.saturating_add(other.width));
        let max_y = (self.y.saturating_add(self.height)).max(other.y.saturating_add(other.height));
        Rect {
            x: min_x,
            y: min_y,
            width: max_x.saturating_sub(min_x),
            height: max_y.saturating_sub(min_y),
        }
    }

    /// Unions two optional rectangles.
    pub fn union_opt(a: Option<Rect>, b: Option<Rect>) -> Option<Rect> {
        match (a, b) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (a, None) => a,
            (None, b) => b,
        }
    }

    /// Clips the rectangle to `[0, width) x [0, height)`.
    ///
    /// Returns `None` when nothing of it remains.
    pub fn clip_to_bounds(&self, width: u32, height: u32) -> Option<Rect> {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);
        let min_x = self.x.clamp(0, width);
        let min_y = self.y.clamp(0, height);
        let max_x = self.x.saturating_add(self.width).clamp(0, width);
        let max_y = self.y.saturating_add(self.height).clamp(0, height);
        Self::from_min_max(min_x, min_y, max_x, max_y)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && y >= self.y
            && x < self.x.saturating_add(self.width)
            && y < self.y.saturating_add(self.height)
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
