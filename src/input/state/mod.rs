//! Tool engine: the drawing state machine bound to pointer input.

mod core;
mod mouse;
mod render;

pub use self::core::{EngineSettings, LineGesture, ToolEngine};
