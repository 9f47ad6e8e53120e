//! Pixel storage, rasterization and frame composition.
//!
//! This module defines the core drawing types used by the tool engine:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`PixelSurface`]: the committed image, the only thing a save persists
//! - [`raster`]: brush stamps, swept segments and airbrush spray
//! - [`Renderer`] and [`Frame`]: display composition with preview and border

pub mod color;
pub mod dirty;
pub mod frame;
pub mod raster;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use dirty::DirtyTracker;
pub use frame::Frame;
pub use render::{BorderStyle, PreviewLine, Renderer};
pub use surface::{PixelSurface, RasterImage};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
