//! Input handling and tool state machine.
//!
//! This module translates host pointer events into drawing actions. It
//! maintains the active tool, drawing parameters (colors, tool size), and the
//! gesture state machine that turns press/drag/release sequences into
//! committed pixels and live previews.

pub mod adapter;
pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use adapter::{HostPointerEvent, InputAdapter};
pub use events::{MouseButton, PointerEvent, PointerPhase};
pub use state::{EngineSettings, LineGesture, ToolEngine};
pub use tool::Tool;
