#![forbid(unsafe_code)]

//! Insertion points and the removal correction.
//!
//! An [`InsertionPoint`] produced by the resolver is expressed against the
//! hovered column *as currently displayed*, which still contains the dragged
//! item in its original slot. Both the reorder engine and the placeholder
//! derivation need the point expressed against the column *after* the dragged
//! item is removed. [`InsertionPoint::corrected_for_removal`] is the one place
//! that translation happens:
//!
//! ```text
//! todo: [a, b, c, d]   drag a (r = 0), pointer in the lower half of b
//! resolved            -> todo[2]            ("after b", counting a)
//! remove a            -> [b, c, d]
//! 2 > r, so 2 - 1     -> insert at 1        -> [b, a, c, d]
//! uncorrected         -> insert at 2        -> [b, c, a, d]   (a skips past c)
//! ```
//!
//! Cross-column targets and same-column targets at or above `r` are left
//! alone.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::ColumnId;

/// Candidate destination of a drag: a column and a zero-based slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InsertionPoint {
    pub column_id: ColumnId,
    pub index: usize,
}

impl InsertionPoint {
    #[must_use]
    pub fn new(column_id: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            column_id: column_id.into(),
            index,
        }
    }

    /// Re-express this point against the destination column with the dragged
    /// item removed from `source_column` at `removal_index`.
    #[must_use]
    pub fn corrected_for_removal(&self, source_column: &ColumnId, removal_index: usize) -> Self {
        let index = if &self.column_id == source_column && self.index > removal_index {
            self.index - 1
        } else {
            self.index
        };
        Self {
            column_id: self.column_id.clone(),
            index,
        }
    }
}

impl fmt::Display for InsertionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.column_id, self.index)
    }
}
