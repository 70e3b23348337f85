#![forbid(unsafe_code)]

//! Raw pointer input in cell coordinates.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEventKind {
    /// Primary button pressed.
    Down,
    /// Pointer moved, button state unchanged.
    Move,
    /// Primary button released.
    Up,
    /// Pointer left the board surface.
    Leave,
    /// Platform aborted the gesture.
    Cancel,
}

/// One pointer event as delivered by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: u16,
    pub y: u16,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: u16, y: u16) -> Self {
        Self { kind, x, y }
    }

    #[must_use]
    pub const fn down(x: u16, y: u16) -> Self {
        Self::new(PointerEventKind::Down, x, y)
    }

    #[must_use]
    pub const fn moved(x: u16, y: u16) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    #[must_use]
    pub const fn up(x: u16, y: u16) -> Self {
        Self::new(PointerEventKind::Up, x, y)
    }

    #[must_use]
    pub const fn leave() -> Self {
        Self::new(PointerEventKind::Leave, 0, 0)
    }

    #[must_use]
    pub const fn cancel() -> Self {
        Self::new(PointerEventKind::Cancel, 0, 0)
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub const fn distance_from(&self, x: u16, y: u16) -> u32 {
        self.x.abs_diff(x) as u32 + self.y.abs_diff(y) as u32
    }
}
