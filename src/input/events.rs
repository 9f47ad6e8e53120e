//! Normalized pointer event vocabulary consumed by the tool engine.

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary: paints, picks the foreground color)
    Left,
    /// Right mouse button (secondary: picks the background color)
    Right,
    /// Middle mouse button (ignored by the color picker)
    Middle,
}

impl MouseButton {
    pub fn is_primary(self) -> bool {
        self == Self::Left
    }

    pub fn is_secondary(self) -> bool {
        self == Self::Right
    }
}

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// A button went down
    Press,
    /// Pointer moved with no button held
    Move,
    /// Pointer moved with a button held
    Drag,
    /// A button went up
    Release,
}

/// A pointer event in canvas pixel coordinates.
///
/// Coordinates may lie outside the surface (drags that leave the canvas).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: i32,
    pub y: i32,
    pub button: MouseButton,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, x: i32, y: i32, button: MouseButton) -> Self {
        Self {
            phase,
            x,
            y,
            button,
        }
    }

    pub fn press(x: i32, y: i32, button: MouseButton) -> Self {
        Self::new(PointerPhase::Press, x, y, button)
    }

    pub fn release(x: i32, y: i32, button: MouseButton) -> Self {
        Self::new(PointerPhase::Release, x, y, button)
    }

    /// Motion with no button held. The button field is not consulted.
    pub fn moved(x: i32, y: i32) -> Self {
        Self::new(PointerPhase::Move, x, y, MouseButton::Left)
    }

    pub fn drag(x: i32, y: i32, button: MouseButton) -> Self {
        Self::new(PointerPhase::Drag, x, y, button)
    }
}
