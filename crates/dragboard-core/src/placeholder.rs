#![forbid(unsafe_code)]

//! Placeholder derivation.
//!
//! The placeholder is the visual gap a host draws where the dragged item
//! would land. It is derived on demand from the session and the board the
//! drop would be committed against, using the same [`plan_move`] as the
//! commit, and never stored:
//!
//! ```text
//! placeholder index == index the item occupies after commit
//! ```
//!
//! While a target exists, the source item is hidden from its column and the
//! marker is shown in its place in the (possibly different) target column.
//! With no target yet, the column renders unchanged and no marker is shown.
//! If the board no longer holds the source item or the target column, a drop
//! would be rejected, so no marker is shown either.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Column, ColumnId, Item};
use crate::reorder::plan_move;
use crate::session::DragSession;

/// Where to draw the insertion marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placeholder {
    pub column_id: ColumnId,
    /// Slot among the column's items with the dragged item removed.
    pub index: usize,
}

/// One rendered row of a column during a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot<'a> {
    Item(&'a Arc<Item>),
    Placeholder,
}

/// Derive the placeholder for `session` against `board`.
///
/// `None` without a target, or when `board` would reject the drop.
#[must_use]
pub fn derive(board: &Board, session: Option<&DragSession>) -> Option<Placeholder> {
    let session = session?;
    let target = session.target()?;
    let plan = plan_move(board, session.source_column(), session.source_item(), target).ok()?;
    Some(Placeholder {
        column_id: target.column_id.clone(),
        index: plan.insert_index,
    })
}

/// The rows a host should render for `column` of `board` given the active
/// session.
///
/// The marker index is clamped to the visible row count.
#[must_use]
pub fn column_slots<'a>(
    board: &Board,
    column: &'a Column,
    session: Option<&DragSession>,
) -> Vec<Slot<'a>> {
    let marker = derive(board, session);
    let hidden = marker
        .as_ref()
        .and(session)
        .map(DragSession::source_item);

    let mut slots: Vec<Slot<'a>> = column
        .items()
        .iter()
        .filter(|item| hidden != Some(&item.id))
        .map(Slot::Item)
        .collect();

    if let Some(marker) = marker.filter(|marker| marker.column_id == column.id) {
        let index = marker.index.min(slots.len());
        slots.insert(index, Slot::Placeholder);
    }
    slots
}
