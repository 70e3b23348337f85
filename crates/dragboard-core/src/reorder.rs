#![forbid(unsafe_code)]

//! Reorder engine: commit an insertion point into a new board.
//!
//! # Algorithm
//!
//! 1. Remove the dragged item from its source column, noting index `r`.
//! 2. Correct the target for the vacated slot
//!    ([`InsertionPoint::corrected_for_removal`]).
//! 3. Insert at the corrected index, clamped to `[0, len]`.
//! 4. Return a new board in which only the touched column(s) are rebuilt.
//!
//! # Guarantees
//!
//! - Item count is invariant, and the multiset of ids is unchanged.
//! - Items move as shared `Arc`s; payloads are never cloned or rewritten.
//! - The input board is never modified. On error the caller keeps using it.

use std::sync::Arc;

use crate::board::{Board, ColumnId, ItemId};
use crate::error::DragError;
use crate::insertion::InsertionPoint;

/// Resolved indices for one move, computed against a specific board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    /// Index of the source column in the board.
    pub source_column: usize,
    /// Position the item is removed from (`r`).
    pub removal_index: usize,
    /// Index of the destination column in the board.
    pub target_column: usize,
    /// Final position of the item in the destination column.
    pub insert_index: usize,
}

impl MovePlan {
    /// True when committing the plan would leave the board as it is.
    #[must_use]
    pub const fn is_identity(&self) -> bool {
        self.source_column == self.target_column && self.removal_index == self.insert_index
    }
}

/// Validate a move and compute its indices without building a board.
pub fn plan_move(
    board: &Board,
    source_column: &ColumnId,
    source_item: &ItemId,
    target: &InsertionPoint,
) -> Result<MovePlan, DragError> {
    let source_idx = board
        .column_index(source_column)
        .ok_or_else(|| DragError::ColumnNotFound {
            column: source_column.clone(),
        })?;
    let removal_index = board.columns()[source_idx]
        .position_of(source_item)
        .ok_or_else(|| DragError::ItemNotFound {
            column: source_column.clone(),
            item: source_item.clone(),
        })?;
    let target_idx = board
        .column_index(&target.column_id)
        .ok_or_else(|| DragError::ColumnNotFound {
            column: target.column_id.clone(),
        })?;

    let corrected = target.corrected_for_removal(source_column, removal_index);
    let remaining = if source_idx == target_idx {
        board.columns()[target_idx].len() - 1
    } else {
        board.columns()[target_idx].len()
    };

    Ok(MovePlan {
        source_column: source_idx,
        removal_index,
        target_column: target_idx,
        insert_index: corrected.index.min(remaining),
    })
}

/// Apply an insertion point, producing the next board.
pub fn commit(
    board: &Board,
    source_column: &ColumnId,
    source_item: &ItemId,
    target: &InsertionPoint,
) -> Result<Board, DragError> {
    commit_planned(board, source_column, source_item, target).map(|(_, next)| next)
}

/// [`commit`], also returning the plan that was applied.
pub fn commit_planned(
    board: &Board,
    source_column: &ColumnId,
    source_item: &ItemId,
    target: &InsertionPoint,
) -> Result<(MovePlan, Board), DragError> {
    let _span = tracing::debug_span!(
        "drag.commit",
        item = %source_item,
        from = %source_column,
        to = %target.column_id,
        resolved_index = target.index,
    )
    .entered();

    let plan = plan_move(board, source_column, source_item, target)?;
    Ok((plan, apply(board, plan)))
}

fn apply(board: &Board, plan: MovePlan) -> Board {
    let mut columns = board.columns().to_vec();
    let source = &board.columns()[plan.source_column];
    let mut source_items = source.items().to_vec();
    let moved = source_items.remove(plan.removal_index);

    if plan.source_column == plan.target_column {
        source_items.insert(plan.insert_index, moved);
        columns[plan.source_column] = Arc::new(source.with_items(source_items));
    } else {
        let dest = &board.columns()[plan.target_column];
        let mut dest_items = Vec::with_capacity(dest.len() + 1);
        dest_items.extend_from_slice(dest.items());
        dest_items.insert(plan.insert_index, moved);
        columns[plan.source_column] = Arc::new(source.with_items(source_items));
        columns[plan.target_column] = Arc::new(dest.with_items(dest_items));
    }

    tracing::debug!(
        removal_index = plan.removal_index,
        insert_index = plan.insert_index,
        cross_column = plan.source_column != plan.target_column,
        "item moved"
    );
    Board::from_shared(columns)
}
