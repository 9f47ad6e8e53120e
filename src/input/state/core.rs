//! Tool engine state and the configuration surface used by the shell.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::draw::{
    BLACK, BorderStyle, Color, DirtyTracker, PixelSurface, RasterImage, Renderer, WHITE, raster,
};
use crate::error::PaintError;
use crate::input::tool::Tool;
use crate::notification::{LogSink, Notification, NotificationSink};
use crate::util::{Point, Rect};

/// Gesture state of the Line tool.
///
/// Meaningful only while the Line tool is active; every other tool keeps it `Idle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineGesture {
    /// Waiting for the first press
    Idle,
    /// First press recorded; the next press commits a line from here
    Anchored(Point),
}

/// Initial tool configuration for a [`ToolEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    pub tool: Tool,
    pub tool_size: u32,
    pub foreground: Color,
    pub background: Color,
    /// Chance that each airbrush offset is painted per event (0.0 - 1.0)
    pub airbrush_density: f64,
    /// Fixed airbrush seed; `None` seeds from the OS
    pub seed: Option<u64>,
    pub border: BorderStyle,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            tool: Tool::Pencil,
            tool_size: 1,
            foreground: BLACK,
            background: WHITE,
            airbrush_density: 0.25,
            seed: None,
            border: BorderStyle::default(),
        }
    }
}

/// The drawing state machine.
///
/// Owns the committed [`PixelSurface`] and all tool state. Pointer events
/// mutate the surface through the active tool; the Line tool's uncommitted
/// segment lives only in the gesture state and is drawn by the renderer.
pub struct ToolEngine {
    /// Committed image
    pub(crate) surface: PixelSurface,
    pub(crate) active_tool: Tool,
    pub(crate) tool_size: u32,
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    /// Line tool anchor
    pub(crate) gesture: LineGesture,
    /// Last observed pointer position (any phase)
    pub(crate) pointer: Option<Point>,
    /// Start of the next drag segment; cleared on release
    pub(crate) last_pointer: Option<Point>,
    pub(crate) airbrush_density: f64,
    pub(crate) rng: StdRng,
    pub(crate) renderer: Renderer,
    /// Tracks dirty regions between renders
    pub(crate) dirty_tracker: DirtyTracker,
    /// Cached bounds of the line preview last shown (if any)
    pub(crate) last_preview_bounds: Option<Rect>,
    /// Unsaved changes since the last new/load/save
    pub(crate) modified: bool,
    /// Whether the current frame differs from the last one rendered
    pub needs_redraw: bool,
    sink: Box<dyn NotificationSink>,
}

fn check_opaque(which: &str, color: Color) -> Result<(), PaintError> {
    if color.is_opaque() {
        Ok(())
    } else {
        Err(PaintError::invalid(format!(
            "{which} color must be an opaque color, got {color}"
        )))
    }
}

fn check_density(density: f64) -> Result<(), PaintError> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(PaintError::invalid(format!(
            "airbrush density must be within 0.0-1.0, got {density}"
        )))
    }
}

impl ToolEngine {
    /// Creates an engine around an existing surface.
    ///
    /// Notifications go to a [`LogSink`] until
    /// [`set_notification_sink`](Self::set_notification_sink) is called.
    pub fn new(surface: PixelSurface, settings: EngineSettings) -> Result<Self, PaintError> {
        check_opaque("foreground", settings.foreground)?;
        check_opaque("background", settings.background)?;
        check_density(settings.airbrush_density)?;

        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            surface,
            active_tool: settings.tool,
            tool_size: settings.tool_size,
            foreground: settings.foreground,
            background: settings.background,
            gesture: LineGesture::Idle,
            pointer: None,
            last_pointer: None,
            airbrush_density: settings.airbrush_density,
            rng,
            renderer: Renderer::new(settings.border),
            dirty_tracker: DirtyTracker::new(),
            last_preview_bounds: None,
            modified: false,
            needs_redraw: true,
            sink: Box::new(LogSink),
        })
    }

    /// Creates an engine with a blank `width` x `height` surface filled with
    /// the background color.
    pub fn blank(width: u32, height: u32, settings: EngineSettings) -> Result<Self, PaintError> {
        let surface = PixelSurface::new(width, height, settings.background)?;
        Self::new(surface, settings)
    }

    pub fn set_notification_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sink = sink;
    }

    pub(crate) fn notify(&mut self, notification: Notification) {
        self.sink.notify(notification);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }

    pub fn active_tool(&self) -> Tool {
        self.active_tool
    }

    pub fn tool_size(&self) -> u32 {
        self.tool_size
    }

    pub fn foreground_color(&self) -> Color {
        self.foreground
    }

    pub fn background_color(&self) -> Color {
        self.background
    }

    pub fn gesture(&self) -> LineGesture {
        self.gesture
    }

    pub fn airbrush_density(&self) -> f64 {
        self.airbrush_density
    }

    /// Pixel under the pointer, as of the last pointer event.
    pub fn pointer_position(&self) -> Option<(i32, i32)> {
        self.pointer.map(|p| p.pixel())
    }

    /// Whether the surface has changed since the last new/load/save.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    fn line_anchored(&self) -> bool {
        matches!(self.gesture, LineGesture::Anchored(_))
    }

    // ------------------------------------------------------------------
    // Tool configuration
    // ------------------------------------------------------------------

    /// Sets the foreground (paint) color. Non-opaque colors are rejected.
    pub fn set_foreground_color(&mut self, color: Color) -> Result<(), PaintError> {
        check_opaque("foreground", color)?;
        self.foreground = color;
        self.refresh_preview();
        Ok(())
    }

    /// Sets the background (eraser) color. Non-opaque colors are rejected.
    pub fn set_background_color(&mut self, color: Color) -> Result<(), PaintError> {
        check_opaque("background", color)?;
        self.background = color;
        Ok(())
    }

    /// Sets the size shared by all size-sensitive tools.
    pub fn set_tool_size(&mut self, size: i32) -> Result<(), PaintError> {
        let size = u32::try_from(size)
            .map_err(|_| PaintError::invalid(format!("tool size must be >= 0, got {size}")))?;
        self.tool_size = size;
        self.refresh_preview();
        Ok(())
    }

    pub fn set_airbrush_density(&mut self, density: f64) -> Result<(), PaintError> {
        check_density(density)?;
        self.airbrush_density = density;
        Ok(())
    }

    /// Switches tools. Any gesture in progress is dropped without committing.
    pub fn set_active_tool(&mut self, tool: Tool) {
        if self.line_anchored() {
            debug!("Discarding line anchor on switch to {tool}");
        }
        self.cancel_gesture();
        self.active_tool = tool;
        self.needs_redraw = true;
    }

    /// Drops the line anchor and drag interpolation state.
    pub(crate) fn cancel_gesture(&mut self) {
        self.gesture = LineGesture::Idle;
        self.last_pointer = None;
        self.clear_preview_dirty();
    }

    // ------------------------------------------------------------------
    // Whole-image operations
    // ------------------------------------------------------------------

    /// Replaces the image with a blank `width` x `height` one filled with `color`.
    ///
    /// The pending gesture is cancelled in the same step. On error nothing changes.
    pub fn new_blank_image(
        &mut self,
        width: u32,
        height: u32,
        color: Color,
    ) -> Result<(), PaintError> {
        self.surface.replace(width, height, color)?;
        info!("New blank image {width}x{height} filled with {color}");
        self.after_replace();
        Ok(())
    }

    /// Replaces the image with decoded pixel data.
    ///
    /// The pending gesture is cancelled in the same step. On error nothing changes.
    pub fn load_image(&mut self, image: RasterImage) -> Result<(), PaintError> {
        self.surface.replace_with_image(image)?;
        info!(
            "Loaded image {}x{}",
            self.surface.width(),
            self.surface.height()
        );
        self.after_replace();
        Ok(())
    }

    fn after_replace(&mut self) {
        self.cancel_gesture();
        self.last_preview_bounds = None;
        self.dirty_tracker.mark_full();
        self.modified = false;
        self.needs_redraw = true;
        self.notify(Notification::SurfaceChanged { region: None });
    }

    /// Committed pixels only: what a save should persist.
    pub fn surface_snapshot(&self) -> RasterImage {
        self.surface.snapshot()
    }

    /// Clears the unsaved-changes flag after the shell has persisted the snapshot.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    /// Drains pending dirty rectangles for the current surface size.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        self.dirty_tracker
            .take_regions(self.surface.width(), self.surface.height())
    }

    /// Records a surface mutation.
    pub(crate) fn commit(&mut self, damage: Option<Rect>) {
        let Some(rect) = damage else {
            return;
        };
        self.dirty_tracker.mark_rect(rect);
        self.modified = true;
        self.needs_redraw = true;
        self.notify(Notification::SurfaceChanged { region: Some(rect) });
    }

    /// Marks the area of the last shown preview for repaint and forgets it.
    pub(crate) fn clear_preview_dirty(&mut self) {
        if let Some(prev) = self.last_preview_bounds.take() {
            self.dirty_tracker.mark_rect(prev);
        }
    }

    /// Repaints the preview after its color or width changed.
    pub(crate) fn refresh_preview(&mut self) {
        if self.line_anchored() {
            self.clear_preview_dirty();
            self.update_preview_dirty();
            self.needs_redraw = true;
        }
    }

    /// Updates tracked preview bounds for dirty-region purposes.
    pub(crate) fn update_preview_dirty(&mut self) {
        let new_bounds = self.preview_line().and_then(|line| {
            raster::segment_bounds(
                line.from,
                line.to,
                line.size,
                self.surface.width(),
                self.surface.height(),
            )
        });
        if new_bounds == self.last_preview_bounds {
            return;
        }
        self.clear_preview_dirty();
        if let Some(bounds) = new_bounds {
            self.dirty_tracker.mark_rect(bounds);
        }
        self.last_preview_bounds = new_bounds;
        self.needs_redraw = true;
    }
}
