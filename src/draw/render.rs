//! Frame composition: committed pixels, live preview, decorative border.

use super::frame::Frame;
use super::raster;
use super::{Color, PixelSurface, color::TRANSPARENT};

/// A rubber-band line that is shown but not committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLine {
    /// Anchor pixel (first press)
    pub from: (i32, i32),
    /// Current pointer pixel
    pub to: (i32, i32),
    /// Stroke width in pixels
    pub size: u32,
    pub color: Color,
}

/// Appearance of the border drawn right of and below the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderStyle {
    /// Number of border rings (0 disables the border)
    pub width: u32,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self { width: 5 }
    }
}

impl BorderStyle {
    /// Gray level of ring `i`, darkest next to the canvas.
    pub fn ring_color(i: u32) -> Color {
        Color::gray(i.saturating_mul(63).min(255) as u8)
    }
}

/// Composes display frames. Owns nothing but its border style.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    pub border: BorderStyle,
}

impl Renderer {
    pub fn new(border: BorderStyle) -> Self {
        Self { border }
    }

    /// Builds the frame for `surface` with an optional line preview on top.
    ///
    /// The preview is drawn on a scratch copy, so `surface` is never touched.
    pub fn render(&self, surface: &PixelSurface, preview: Option<&PreviewLine>) -> Frame {
        let mut canvas;
        let visible = match preview {
            Some(line) => {
                canvas = surface.clone();
                render_preview(&mut canvas, line);
                &canvas
            }
            None => surface,
        };

        let b = self.border.width;
        let (w, h) = (visible.width(), visible.height());
        let mut frame = Frame::new(
            w.saturating_add(b),
            h.saturating_add(b),
            visible.bounds(),
            TRANSPARENT,
        );

        for (x, y, color) in visible.pixels() {
            frame.put(x as u32, y as u32, color);
        }
        render_border(&mut frame, w, h, b);
        frame
    }
}

/// Draws the preview line, clipped to the canvas.
pub fn render_preview(canvas: &mut PixelSurface, line: &PreviewLine) {
    raster::stroke_segment(canvas, line.from, line.to, line.size, line.color);
}

/// Draws `rings` graded lines along the bottom and right canvas edges.
///
/// Ring `i` runs along row `h + i` from x = 0 to `w + i` and along column
/// `w + i` from y = 0 to `h + i`, which together cover the whole margin.
fn render_border(frame: &mut Frame, w: u32, h: u32, rings: u32) {
    for i in 0..rings {
        let color = BorderStyle::ring_color(i);
        for x in 0..=w + i {
            frame.put(x, h + i, color);
        }
        for y in 0..=h + i {
            frame.put(w + i, y, color);
        }
    }
}
