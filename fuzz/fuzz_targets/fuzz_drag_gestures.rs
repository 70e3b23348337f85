#![no_main]

use arbitrary::Arbitrary;
use dragboard_core::{
    Board, CancelReason, Column, DragTracker, HoverSignal, Item, ItemBounds, ItemId,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Begin { column: u8, item: u8 },
    HoverItem { column: u8, item: u8, top: i16, height: u8, pointer: i16 },
    HoverColumn { column: u8, pointer: i16 },
    Drop,
    Cancel,
}

#[derive(Debug, Arbitrary)]
struct Input {
    /// Items per column, each taken mod 8; at most 6 columns.
    sizes: Vec<u8>,
    ops: Vec<Op>,
}

fn build(sizes: &[u8]) -> Board {
    let mut next = 0u32;
    let columns: Vec<Column> = sizes
        .iter()
        .take(6)
        .enumerate()
        .map(|(c, &len)| {
            let items: Vec<Item> = (0..len % 8)
                .map(|_| {
                    next += 1;
                    Item::new(format!("i{next}"), "")
                })
                .collect();
            Column::new(format!("c{c}"), "", items)
        })
        .collect();
    Board::new(columns).expect("generated ids are unique")
}

fn sorted_ids(board: &Board) -> Vec<ItemId> {
    let mut ids: Vec<ItemId> = board.item_ids().cloned().collect();
    ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    ids
}

fuzz_target!(|input: Input| {
    let mut board = build(&input.sizes);
    if board.is_empty() {
        return;
    }
    let original = sorted_ids(&board);
    let mut tracker = DragTracker::new();

    for op in input.ops.into_iter().take(256) {
        let column = |raw: u8| board.columns()[usize::from(raw) % board.len()].clone();
        match op {
            Op::Begin { column: c, item } => {
                let col = column(c);
                // Ids that are not in the column must be rejected, not panic.
                let id = col
                    .items()
                    .get(usize::from(item) % 9)
                    .map_or_else(|| ItemId::new("missing"), |i| i.id.clone());
                let _ = tracker.begin_drag(&board, &col.id, &id);
            }
            Op::HoverItem { column: c, item, top, height, pointer } => {
                let col = column(c);
                let id = col
                    .items()
                    .get(usize::from(item) % 9)
                    .map_or_else(|| ItemId::new("stale"), |i| i.id.clone());
                let bounds = ItemBounds::new(f64::from(top), f64::from(height));
                let hover = HoverSignal::over_item(col.id.clone(), id, bounds, f64::from(pointer));
                let _ = tracker.update_hover(&board, &hover);
            }
            Op::HoverColumn { column: c, pointer } => {
                let hover = HoverSignal::over_column(column(c).id.clone(), f64::from(pointer));
                let _ = tracker.update_hover(&board, &hover);
            }
            Op::Drop => {
                let marker = tracker.placeholder(&board);
                let dragged = tracker.session().map(|s| s.source_item().clone());
                if let Ok(outcome) = tracker.complete_drop(&board) {
                    if let (Some(next), Some(marker), Some(dragged)) =
                        (outcome.board, marker, dragged)
                    {
                        let landed = next.locate(&dragged).expect("dragged item survives");
                        assert_eq!(next.columns()[landed.column].id, marker.column_id);
                        assert_eq!(landed.index, marker.index);
                        board = next;
                    }
                }
            }
            Op::Cancel => {
                let _ = tracker.cancel_drag(CancelReason::Programmatic);
            }
        }

        assert!(board.check_invariants().is_ok(), "board invariants broken");
        if let Some(marker) = tracker.placeholder(&board) {
            let col = board.column(&marker.column_id).expect("marker column exists");
            assert!(marker.index <= col.len(), "marker past end of column");
        }
    }

    assert_eq!(sorted_ids(&board), original, "items lost or duplicated");
});
