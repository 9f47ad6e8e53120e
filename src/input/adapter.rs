//! Turns host pointer events (evdev button codes, float positions) into the
//! engine's press/move/drag/release vocabulary.

use log::debug;

use super::events::{MouseButton, PointerEvent, PointerPhase};

/// Linux input button codes, as delivered by most windowing backends.
pub const BTN_LEFT: u32 = 0x110;
pub const BTN_RIGHT: u32 = 0x111;
pub const BTN_MIDDLE: u32 = 0x112;

/// Raw pointer event as the host delivers it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostPointerEvent {
    Enter { x: f64, y: f64 },
    Leave,
    Motion { x: f64, y: f64 },
    Press { x: f64, y: f64, button: u32 },
    Release { x: f64, y: f64, button: u32 },
}

/// Maps a host button code to the two-button contract (plus middle).
pub fn map_button(code: u32) -> Option<MouseButton> {
    match code {
        BTN_LEFT => Some(MouseButton::Left),
        BTN_MIDDLE => Some(MouseButton::Middle),
        BTN_RIGHT => Some(MouseButton::Right),
        _ => None,
    }
}

/// Tracks held buttons so motion can be classified as Move or Drag.
#[derive(Debug, Default)]
pub struct InputAdapter {
    held: Vec<MouseButton>,
    last_position: Option<(i32, i32)>,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known pointer pixel, if the pointer is over the host surface.
    pub fn last_position(&self) -> Option<(i32, i32)> {
        self.last_position
    }

    /// Translates one host event. Unknown buttons and enter/leave yield `None`.
    pub fn translate(&mut self, event: HostPointerEvent) -> Option<PointerEvent> {
        match event {
            HostPointerEvent::Enter { x, y } => {
                debug!("Pointer entered at ({x}, {y})");
                self.last_position = Some(to_pixel(x, y));
                None
            }
            HostPointerEvent::Leave => {
                debug!("Pointer left surface");
                self.last_position = None;
                None
            }
            HostPointerEvent::Motion { x, y } => {
                let (px, py) = to_pixel(x, y);
                self.last_position = Some((px, py));
                Some(match self.held.first() {
                    Some(button) => PointerEvent::new(PointerPhase::Drag, px, py, *button),
                    None => PointerEvent::moved(px, py),
                })
            }
            HostPointerEvent::Press { x, y, button } => {
                let mb = map_button(button)?;
                debug!("Button {button} pressed at ({x}, {y})");
                let (px, py) = to_pixel(x, y);
                self.last_position = Some((px, py));
                if !self.held.contains(&mb) {
                    self.held.push(mb);
                }
                Some(PointerEvent::press(px, py, mb))
            }
            HostPointerEvent::Release { x, y, button } => {
                let mb = map_button(button)?;
                debug!("Button {button} released");
                let (px, py) = to_pixel(x, y);
                self.last_position = Some((px, py));
                self.held.retain(|held| *held != mb);
                Some(PointerEvent::release(px, py, mb))
            }
        }
    }
}

fn to_pixel(x: f64, y: f64) -> (i32, i32) {
    (x.floor() as i32, y.floor() as i32)
}
