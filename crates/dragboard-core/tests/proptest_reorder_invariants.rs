//! Property-based invariant tests for the drag-reorder engine.
//!
//! 1. A committed move conserves the multiset of item ids
//! 2. Columns keep their ids and order; only touched columns are rebuilt
//! 3. Resolution is deterministic
//! 4. The placeholder index equals the dragged item's final index
//! 5. Dropping onto the item's own slot is the identity
//! 6. No panics and no board corruption on arbitrary gesture sequences

use std::sync::Arc;

use dragboard_core::{
    Board, CancelReason, Column, ColumnId, DragTracker, HoverSignal, InsertionPoint, Item,
    ItemBounds, ItemId, commit, resolve,
};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

const ROW: f64 = 10.0;

/// Column sizes; item ids are assigned sequentially across the board.
fn board_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..6, 1..5)
}

fn build_board(sizes: &[usize]) -> Board {
    let mut next = 0usize;
    let columns = sizes.iter().enumerate().map(|(c, &len)| {
        let items: Vec<Item> = (0..len)
            .map(|_| {
                next += 1;
                Item::new(format!("i{next}"), format!("Item {next}"))
            })
            .collect();
        Column::new(format!("c{c}"), format!("Column {c}"), items)
    });
    Board::new(columns.collect::<Vec<_>>()).expect("generated ids are unique")
}

fn sorted_ids(board: &Board) -> Vec<ItemId> {
    let mut ids: Vec<ItemId> = board.item_ids().cloned().collect();
    ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    ids
}

/// Pick the `pick`-th item on the board (mod item count), with its column.
fn nth_item(board: &Board, pick: usize) -> Option<(ColumnId, ItemId)> {
    let total = board.item_count();
    if total == 0 {
        return None;
    }
    let mut remaining = pick % total;
    for column in board.columns() {
        if remaining < column.len() {
            return Some((column.id.clone(), column.items()[remaining].id.clone()));
        }
        remaining -= column.len();
    }
    None
}

/// Hover signal over `column`, either on a row or on empty space below.
fn hover_for(board: &Board, column: usize, row: usize, offset: f64) -> HoverSignal {
    let column = &board.columns()[column % board.len()];
    if column.is_empty() || row >= column.len() {
        return HoverSignal::over_column(column.id.clone(), ROW * column.len() as f64 + offset);
    }
    let top = ROW * row as f64;
    HoverSignal::over_item(
        column.id.clone(),
        column.items()[row].id.clone(),
        ItemBounds::new(top, ROW),
        top + offset,
    )
}

#[derive(Debug, Clone)]
enum Op {
    Begin(usize),
    Hover(usize, usize, f64),
    Drop,
    Cancel,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<usize>().prop_map(Op::Begin),
        (0usize..5, 0usize..7, 0.0f64..ROW).prop_map(|(c, r, o)| Op::Hover(c, r, o)),
        Just(Op::Drop),
        Just(Op::Cancel),
    ]
}

// ═══════════════════════════════════════════════════════════════════════
// 1-2. Conservation and structure
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn commit_conserves_items(
        sizes in board_strategy(),
        pick in any::<usize>(),
        target_column in 0usize..5,
        target_index in 0usize..8,
    ) {
        let board = build_board(&sizes);
        let Some((column, item)) = nth_item(&board, pick) else {
            return Ok(());
        };
        let target_column = board.columns()[target_column % board.len()].id.clone();
        let target = InsertionPoint::new(target_column, target_index);

        let next = commit(&board, &column, &item, &target).expect("valid move");

        prop_assert_eq!(next.item_count(), board.item_count());
        prop_assert_eq!(sorted_ids(&next), sorted_ids(&board));
        prop_assert!(next.check_invariants().is_ok());

        let before: Vec<&ColumnId> = board.columns().iter().map(|c| &c.id).collect();
        let after: Vec<&ColumnId> = next.columns().iter().map(|c| &c.id).collect();
        prop_assert_eq!(before, after);

        for (old, new) in board.columns().iter().zip(next.columns()) {
            if old.id != column && old.id != target.column_id {
                prop_assert!(Arc::ptr_eq(old, new), "column {} was rebuilt", old.id);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Determinism
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolve_is_deterministic(
        len in 0usize..8,
        row in 0usize..8,
        pointer in -20.0f64..120.0,
    ) {
        let column = ColumnId::new("c");
        let ids: Vec<ItemId> = (0..len).map(|i| ItemId::new(format!("i{i}"))).collect();
        let hovered_id = ItemId::new(format!("i{row}"));
        let hovered = dragboard_core::HoveredItem {
            id: &hovered_id,
            bounds: ItemBounds::new(ROW * row as f64, ROW),
        };

        let first = resolve(pointer, Some(hovered), &column, &ids);
        let second = resolve(pointer, Some(hovered), &column, &ids);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.index <= len);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4-5. Placeholder agreement and identity drops
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn placeholder_matches_final_position(
        sizes in board_strategy(),
        pick in any::<usize>(),
        column in 0usize..5,
        row in 0usize..7,
        offset in 0.0f64..ROW,
    ) {
        let board = build_board(&sizes);
        let Some((source, item)) = nth_item(&board, pick) else {
            return Ok(());
        };
        let mut tracker = DragTracker::new();
        tracker.begin_drag(&board, &source, &item).expect("begin");
        tracker
            .update_hover(&board, &hover_for(&board, column, row, offset))
            .expect("hover");
        let marker = tracker.placeholder(&board).expect("target resolved");

        let next = tracker
            .complete_drop(&board)
            .expect("drop")
            .board
            .expect("committed");
        let landed = next.locate(&item).expect("item still on board");
        prop_assert_eq!(&next.columns()[landed.column].id, &marker.column_id);
        prop_assert_eq!(landed.index, marker.index);
    }

    #[test]
    fn own_slot_drop_is_identity(
        sizes in board_strategy(),
        pick in any::<usize>(),
        lower_half in any::<bool>(),
    ) {
        let board = build_board(&sizes);
        let Some((column, item)) = nth_item(&board, pick) else {
            return Ok(());
        };
        let index = board.locate(&item).expect("on board").index;
        let offset = if lower_half { ROW * 0.75 } else { ROW * 0.25 };
        let top = ROW * index as f64;

        let mut tracker = DragTracker::new();
        tracker.begin_drag(&board, &column, &item).expect("begin");
        tracker
            .update_hover(
                &board,
                &HoverSignal::over_item(
                    column.clone(),
                    item.clone(),
                    ItemBounds::new(top, ROW),
                    top + offset,
                ),
            )
            .expect("hover");
        let next = tracker.complete_drop(&board).expect("drop").board.expect("committed");
        prop_assert_eq!(next, board);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. Arbitrary gesture sequences
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arbitrary_gestures_keep_board_valid(
        sizes in board_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut board = build_board(&sizes);
        let original = sorted_ids(&board);
        let mut tracker = DragTracker::new();

        for op in ops {
            match op {
                Op::Begin(pick) => {
                    if let Some((column, item)) = nth_item(&board, pick) {
                        let _ = tracker.begin_drag(&board, &column, &item);
                    }
                }
                Op::Hover(column, row, offset) => {
                    let _ = tracker.update_hover(&board, &hover_for(&board, column, row, offset));
                }
                Op::Drop => {
                    if let Some(next) = tracker.complete_drop(&board).ok().and_then(|o| o.board) {
                        board = next;
                    }
                }
                Op::Cancel => {
                    let _ = tracker.cancel_drag(CancelReason::Programmatic);
                }
            }
            prop_assert!(board.check_invariants().is_ok());
            if let Some(marker) = tracker.placeholder(&board) {
                let column = board.column(&marker.column_id).expect("marker column exists");
                prop_assert!(marker.index <= column.len());
            }
        }
        prop_assert_eq!(sorted_ids(&board), original);
    }
}
