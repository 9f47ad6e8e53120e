//! Raster paint core: a pixel surface, a tool state machine driven by pointer
//! events, and a renderer that composes the display frame.
//!
//! The library has no windowing or file-format dependencies. A shell feeds
//! host pointer events through [`input::InputAdapter`] into a
//! [`input::ToolEngine`], presents [`input::ToolEngine::current_frame`], and
//! persists [`input::ToolEngine::surface_snapshot`] however it likes.

pub mod config;
pub mod draw;
pub mod error;
pub mod input;
pub mod notification;
pub mod script;
pub mod util;

pub use config::Config;
pub use draw::{Color, Frame, PixelSurface, RasterImage};
pub use error::PaintError;
pub use input::{EngineSettings, InputAdapter, MouseButton, PointerEvent, Tool, ToolEngine};
pub use notification::{Notification, NotificationSink};
