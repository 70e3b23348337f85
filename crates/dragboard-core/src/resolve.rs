#![forbid(unsafe_code)]

//! Insertion point resolution.
//!
//! [`resolve`] is a pure function of its arguments: no hidden state, no
//! knowledge of which item is being dragged. Identical inputs always yield an
//! identical [`InsertionPoint`], which is what makes hover handling replayable
//! in tests.
//!
//! # Rules
//!
//! | Pointer over                  | Resolved index             |
//! |-------------------------------|----------------------------|
//! | empty column space            | `len` (append)             |
//! | item at `p`, above midpoint   | `p` (before)               |
//! | item at `p`, at/below midpoint| `p + 1` (after)            |
//!
//! Indices count the dragged item in its current slot; see
//! [`InsertionPoint::corrected_for_removal`] for the follow-up step.

use crate::board::{ColumnId, ItemId};
use crate::geometry::ItemBounds;
use crate::insertion::InsertionPoint;

/// The item under the pointer, with its reported geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoveredItem<'a> {
    pub id: &'a ItemId,
    pub bounds: ItemBounds,
}

/// Map a pointer position over a column to an insertion point.
///
/// `column_item_ids` is the hovered column's current order. A hovered id that
/// is not in that order (stale host geometry) is treated as empty column
/// space.
#[must_use]
pub fn resolve(
    pointer_y: f64,
    hovered: Option<HoveredItem<'_>>,
    column_id: &ColumnId,
    column_item_ids: &[ItemId],
) -> InsertionPoint {
    let append = column_item_ids.len();
    let index = hovered
        .and_then(|item| {
            let position = column_item_ids.iter().position(|id| id == item.id)?;
            Some(if pointer_y < item.bounds.midpoint() {
                position
            } else {
                position + 1
            })
        })
        .unwrap_or(append);

    InsertionPoint {
        column_id: column_id.clone(),
        index,
    }
}
