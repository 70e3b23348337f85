#![forbid(unsafe_code)]

//! Geometric primitives consumed by the resolver.

use serde::{Deserialize, Serialize};

/// Vertical extent of a rendered item, as reported by the host.
///
/// Coordinates share the pointer's space (pixels, cells, whatever the host
/// measures in); only `top` and `height` matter for insertion decisions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemBounds {
    /// Top edge (inclusive).
    pub top: f64,
    /// Height in host units.
    pub height: f64,
}

impl ItemBounds {
    /// Create bounds from a top edge and height.
    #[inline]
    #[must_use]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Vertical midpoint. Pointers at or below it land after the item.
    #[inline]
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}
