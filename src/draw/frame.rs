//! Display frame produced by the renderer.

use super::Color;
use crate::util::Rect;

/// A composited, display-ready image.
///
/// Holds the canvas pixels (plus any live preview) at the origin and the
/// decorative border around them. Never fed back into the surface and never
/// what a save should persist; use the surface snapshot for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    canvas: Rect,
    pixels: Vec<Color>,
}

impl Frame {
    pub(crate) fn new(width: u32, height: u32, canvas: Rect, fill: Color) -> Self {
        Self {
            width,
            height,
            canvas,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Region of the frame occupied by the canvas.
    pub fn canvas_region(&self) -> Rect {
        self.canvas
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub(crate) fn put(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            let i = y as usize * self.width as usize + x as usize;
            self.pixels[i] = color;
        }
    }

    /// Row-major RGBA bytes for upload to a display surface.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba()).collect()
    }
}
