//! Notifications from the paint core to the surrounding shell.
//!
//! The shell reacts to these: an unsaved marker and repaint on surface
//! changes, swatch updates on color changes, a status line on pointer motion.

use log::debug;

use crate::draw::Color;
use crate::util::Rect;

/// Something the shell may want to reflect in its UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Committed pixels changed; `region` is `None` when the whole surface was replaced
    SurfaceChanged { region: Option<Rect> },
    /// The color picker set a new foreground color
    ForegroundColorChanged(Color),
    /// The color picker set a new background color
    BackgroundColorChanged(Color),
    /// The pointer moved to pixel `(x, y)`
    PointerMoved { x: i32, y: i32 },
}

/// Receiver for core notifications.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

impl<F: FnMut(Notification)> NotificationSink for F {
    fn notify(&mut self, notification: Notification) {
        self(notification)
    }
}

/// Default sink: logs every notification at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&mut self, notification: Notification) {
        match notification {
            Notification::SurfaceChanged { region: Some(rect) } => debug!(
                "Surface changed in {}x{} at ({}, {})",
                rect.width, rect.height, rect.x, rect.y
            ),
            Notification::SurfaceChanged { region: None } => debug!("Surface replaced"),
            Notification::ForegroundColorChanged(color) => {
                debug!("Foreground color picked: {color}")
            }
            Notification::BackgroundColorChanged(color) => {
                debug!("Background color picked: {color}")
            }
            Notification::PointerMoved { x, y } => debug!("Position: ({x}, {y})"),
        }
    }
}
