#![forbid(unsafe_code)]

//! Drag lifecycle errors.
//!
//! Every error here is local and recoverable. When the tracker returns one,
//! it has already reset to idle and the board the caller holds is untouched;
//! hosts are expected to absorb them as no-ops.

use std::fmt;

use crate::board::{ColumnId, ItemId};

/// Coarse classification of a [`DragError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragErrorKind {
    /// Gesture lifecycle misuse (e.g. starting a drag while one is active).
    InvalidState,
    /// A referenced item or column is not on the board.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragError {
    /// `begin_drag` while a drag was already active.
    AlreadyDragging { active: ItemId },
    /// A dragging-only operation was called while idle.
    NotDragging { operation: &'static str },
    ColumnNotFound { column: ColumnId },
    ItemNotFound { column: ColumnId, item: ItemId },
}

impl DragError {
    #[must_use]
    pub const fn kind(&self) -> DragErrorKind {
        match self {
            Self::AlreadyDragging { .. } | Self::NotDragging { .. } => DragErrorKind::InvalidState,
            Self::ColumnNotFound { .. } | Self::ItemNotFound { .. } => DragErrorKind::NotFound,
        }
    }
}

impl fmt::Display for DragError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyDragging { active } => {
                write!(f, "a drag of item '{active}' is already in progress")
            }
            Self::NotDragging { operation } => write!(f, "{operation} requires an active drag"),
            Self::ColumnNotFound { column } => write!(f, "column '{column}' not found"),
            Self::ItemNotFound { column, item } => {
                write!(f, "item '{item}' not found in column '{column}'")
            }
        }
    }
}

impl std::error::Error for DragError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            DragError::AlreadyDragging { active: "a".into() }.kind(),
            DragErrorKind::InvalidState
        );
        assert_eq!(
            DragError::NotDragging {
                operation: "complete_drop"
            }
            .kind(),
            DragErrorKind::InvalidState
        );
        assert_eq!(
            DragError::ColumnNotFound {
                column: "x".into()
            }
            .kind(),
            DragErrorKind::NotFound
        );
        assert_eq!(
            DragError::ItemNotFound {
                column: "x".into(),
                item: "y".into()
            }
            .kind(),
            DragErrorKind::NotFound
        );
    }

    #[test]
    fn display_mentions_ids() {
        let err = DragError::ItemNotFound {
            column: "todo".into(),
            item: "zz".into(),
        };
        let text = err.to_string();
        assert!(text.contains("zz") && text.contains("todo"), "{text}");
    }
}
