#![forbid(unsafe_code)]

//! Pointer input delivered to the overlay.
//!
//! The host translates its native touch or mouse events into [`PointerEvent`]
//! values in screen coordinates before handing them to the overlay.

use crate::geometry::Point;

/// A single pointer (touch or mouse) event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerKind,

    /// X coordinate in screen pixels.
    pub x: i32,

    /// Y coordinate in screen pixels.
    pub y: i32,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerKind, x: i32, y: i32) -> Self {
        Self { kind, x, y }
    }

    /// Shorthand for a pointer-down event.
    #[must_use]
    pub const fn down(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Down, x, y)
    }

    /// Shorthand for a pointer-up event.
    #[must_use]
    pub const fn up(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Up, x, y)
    }

    /// Position of the event.
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether this event starts a gesture.
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self.kind, PointerKind::Down)
    }
}

/// Pointer event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Finger or button pressed.
    Down,

    /// Moved while pressed.
    Move,

    /// Finger or button released.
    Up,

    /// The gesture was taken over by the system.
    Cancel,
}
