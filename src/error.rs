//! Error types for the paint core.

use thiserror::Error;

/// Errors returned by the pixel surface and the tool engine.
///
/// Gesture handlers never return these: pointer geometry is clipped to the
/// surface instead. They surface only from direct calls made by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaintError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("pixel ({x}, {y}) is outside the {width}x{height} surface")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

impl PaintError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
