use log::debug;

use crate::draw::raster;
use crate::input::events::{MouseButton, PointerEvent, PointerPhase};
use crate::input::tool::Tool;
use crate::notification::Notification;
use crate::util::Point;

use super::{LineGesture, ToolEngine};

impl ToolEngine {
    /// Processes one normalized pointer event.
    ///
    /// Every event first records the pointer position, then the active tool
    /// reacts to the phase. Coordinates outside the surface are clipped by the
    /// rasterizer; they never change or break the gesture state.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        let position = Point::pixel_center(event.x, event.y);
        self.pointer = Some(position);

        match event.phase {
            PointerPhase::Press => self.on_press(position, event.button),
            PointerPhase::Drag => {
                self.notify(Notification::PointerMoved {
                    x: event.x,
                    y: event.y,
                });
                self.on_drag(position);
            }
            PointerPhase::Move => {
                self.notify(Notification::PointerMoved {
                    x: event.x,
                    y: event.y,
                });
                self.update_preview_dirty();
            }
            PointerPhase::Release => {
                // Next press starts a fresh stroke
                self.last_pointer = None;
            }
        }
    }

    /// Processes a button press.
    ///
    /// # Behavior
    /// - Pencil/Eraser: stamp a brush square in the foreground/background color
    /// - ColorPicker: copy the pixel into the foreground (primary) or background (secondary)
    /// - Airbrush: one spray at the press position
    /// - Line: first press anchors, second press commits the segment
    fn on_press(&mut self, position: Point, button: MouseButton) {
        let (x, y) = position.pixel();
        debug!("Press at ({x}, {y}) with {button:?}, tool {}", self.active_tool);

        match self.active_tool {
            Tool::Pencil => {
                let damage =
                    raster::stamp_square(&mut self.surface, x, y, self.tool_size, self.foreground);
                self.commit(damage);
            }
            Tool::Eraser => {
                let damage =
                    raster::stamp_square(&mut self.surface, x, y, self.tool_size, self.background);
                self.commit(damage);
            }
            Tool::ColorPicker => self.pick_color(x, y, button),
            Tool::Airbrush => self.spray(x, y),
            Tool::Line => match self.gesture {
                LineGesture::Idle => {
                    debug!("Line anchored at ({x}, {y})");
                    self.gesture = LineGesture::Anchored(position);
                    self.update_preview_dirty();
                }
                LineGesture::Anchored(anchor) => {
                    self.gesture = LineGesture::Idle;
                    self.clear_preview_dirty();
                    let damage = raster::stroke_segment(
                        &mut self.surface,
                        anchor.pixel(),
                        (x, y),
                        self.tool_size,
                        self.foreground,
                    );
                    debug!("Line committed to ({x}, {y})");
                    self.commit(damage);
                    self.needs_redraw = true;
                }
            },
        }

        self.last_pointer = Some(position);
    }

    /// Processes pointer motion with a button held.
    ///
    /// Pencil and Eraser connect the previous position to this one so fast
    /// drags leave no gaps. The airbrush sprays at each sample on its own.
    /// A drag with no preceding press is ignored.
    fn on_drag(&mut self, position: Point) {
        let Some(previous) = self.last_pointer else {
            debug!("Drag without press ignored");
            self.update_preview_dirty();
            return;
        };

        let (x, y) = position.pixel();
        match self.active_tool {
            Tool::Pencil => {
                let damage = raster::stroke_segment(
                    &mut self.surface,
                    previous.pixel(),
                    (x, y),
                    self.tool_size,
                    self.foreground,
                );
                self.commit(damage);
            }
            Tool::Eraser => {
                let damage = raster::stroke_segment(
                    &mut self.surface,
                    previous.pixel(),
                    (x, y),
                    self.tool_size,
                    self.background,
                );
                self.commit(damage);
            }
            Tool::Airbrush => self.spray(x, y),
            Tool::ColorPicker => {}
            Tool::Line => self.update_preview_dirty(),
        }

        self.last_pointer = Some(position);
    }

    fn spray(&mut self, x: i32, y: i32) {
        let damage = raster::spray(
            &mut self.surface,
            x,
            y,
            self.tool_size,
            self.foreground,
            self.airbrush_density,
            &mut self.rng,
        );
        self.commit(damage);
    }

    /// Copies the pixel under the pointer into a paint color.
    ///
    /// Picked colors are made opaque. Presses outside the surface and
    /// buttons other than primary/secondary are ignored.
    fn pick_color(&mut self, x: i32, y: i32, button: MouseButton) {
        let picked = match self.surface.get(x, y) {
            Ok(color) => color.opaque(),
            Err(err) => {
                debug!("Color picker ignored: {err}");
                return;
            }
        };

        if button.is_primary() {
            self.foreground = picked;
            self.notify(Notification::ForegroundColorChanged(picked));
        } else if button.is_secondary() {
            self.background = picked;
            self.notify(Notification::BackgroundColorChanged(picked));
        }
    }
}
