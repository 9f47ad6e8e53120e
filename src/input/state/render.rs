use crate::draw::{Frame, PreviewLine};
use crate::input::tool::Tool;
use crate::util;

use super::{LineGesture, ToolEngine};

impl ToolEngine {
    /// Returns the uncommitted line for live preview.
    ///
    /// # Returns
    /// - `Some(PreviewLine)` while the Line tool is anchored and the pointer
    ///   position is known, using the current foreground color and tool size
    /// - `None` otherwise
    pub fn preview_line(&self) -> Option<PreviewLine> {
        if self.active_tool != Tool::Line {
            return None;
        }
        let LineGesture::Anchored(anchor) = self.gesture else {
            return None;
        };
        let pointer = self.pointer?;
        Some(PreviewLine {
            from: anchor.pixel(),
            to: pointer.pixel(),
            size: self.tool_size,
            color: self.foreground,
        })
    }

    /// Composes the display frame: surface, live preview, border.
    ///
    /// The shell resets `needs_redraw` once it has presented the frame.
    pub fn current_frame(&self) -> Frame {
        self.renderer
            .render(&self.surface, self.preview_line().as_ref())
    }

    /// One-line summary for a status bar.
    pub fn status_text(&self) -> String {
        let position = match self.pointer_position() {
            Some((x, y)) => format!("({x}, {y})"),
            None => "(-, -)".to_string(),
        };
        let size = if self.active_tool.uses_size() {
            format!("{}px", self.tool_size)
        } else {
            "-".to_string()
        };
        let unsaved = if self.modified { "  SAVE" } else { "" };
        format!(
            "Position: {position}  [{}] [{size}] [{}/{}]  {}x{}{unsaved}",
            self.active_tool,
            util::color_to_name(&self.foreground),
            util::color_to_name(&self.background),
            self.surface.width(),
            self.surface.height(),
        )
    }
}
