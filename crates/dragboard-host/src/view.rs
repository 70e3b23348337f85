#![forbid(unsafe_code)]

//! Pointer-driven board view.
//!
//! [`BoardView`] is the host side of the engine: it owns the canonical
//! [`Board`], lays it out, and turns raw [`PointerEvent`]s into tracker
//! calls.
//!
//! | Pointer                          | Tracker call                  |
//! |----------------------------------|-------------------------------|
//! | Down on a card                   | (arm press)                   |
//! | Move, press armed, >= threshold  | `begin_drag` + `update_hover` |
//! | Move while dragging              | `update_hover`                |
//! | Up while dragging                | `complete_drop`               |
//! | Up with press armed              | (click)                       |
//! | Leave / Cancel                   | `cancel_drag`                 |
//!
//! Hovering the column header or the placeholder row emits no signal, so
//! the previous target stays in place. Tracker errors are logged at `debug`
//! and otherwise ignored; a rejected gesture never changes the board.

use dragboard_core::{
    Board, CancelReason, Column, ColumnId, DragError, DragTracker, DragTransition, HoverSignal,
    ItemId, Placeholder, Slot, column_slots,
};

use crate::config::HostConfig;
use crate::geometry::Rect;
use crate::layout::{BoardLayout, Hit, HitTarget};
use crate::pointer::{PointerEvent, PointerEventKind};

/// A button press on a card that has not become a drag yet.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Press {
    column: ColumnId,
    item: ItemId,
    x: u16,
    y: u16,
}

/// What one pointer event did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointerResponse {
    /// Tracker transitions, in order.
    pub transitions: Vec<DragTransition>,
    /// Card released without exceeding the drag threshold.
    pub clicked: Option<ItemId>,
    /// True when a drop replaced the board.
    pub board_changed: bool,
}

impl PointerResponse {
    /// True when the event was consumed by the board.
    #[must_use]
    pub fn is_handled(&self) -> bool {
        !self.transitions.is_empty() || self.clicked.is_some()
    }
}

/// Owns a board and drives drag gestures over it from pointer input.
#[derive(Debug, Clone)]
pub struct BoardView {
    board: Board,
    tracker: DragTracker,
    config: HostConfig,
    area: Rect,
    press: Option<Press>,
}

impl BoardView {
    #[must_use]
    pub fn new(board: Board, config: HostConfig) -> Self {
        Self {
            board,
            tracker: DragTracker::new(),
            config,
            area: Rect::from_size(u16::MAX, u16::MAX),
            press: None,
        }
    }

    /// Restrict layout to `area` (e.g. after a terminal resize).
    #[must_use]
    pub fn with_area(mut self, area: Rect) -> Self {
        self.area = area;
        self
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the board from outside a gesture's drop.
    ///
    /// An in-flight drag is kept and its placeholder follows the new board;
    /// if its source vanished, no placeholder is shown and the drop is
    /// rejected and ignored.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    #[must_use]
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    #[must_use]
    pub fn tracker(&self) -> &DragTracker {
        &self.tracker
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<Placeholder> {
        self.tracker.placeholder(&self.board)
    }

    #[must_use]
    pub fn is_drag_source(&self, item: &ItemId) -> bool {
        self.tracker.is_drag_source(item)
    }

    /// Rows to render for one column.
    #[must_use]
    pub fn column_slots<'a>(&self, column: &'a Column) -> Vec<Slot<'a>> {
        column_slots(&self.board, column, self.tracker.session())
    }

    /// Layout for the current board and drag state.
    #[must_use]
    pub fn layout(&self) -> BoardLayout {
        BoardLayout::compute(
            &self.board,
            self.tracker.session(),
            &self.config,
            self.area,
        )
    }

    /// Abort any press or drag, e.g. on Escape.
    pub fn cancel(&mut self, reason: CancelReason) -> Option<DragTransition> {
        self.press = None;
        self.tracker.cancel_drag(reason)
    }

    /// Feed one pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> PointerResponse {
        let mut response = PointerResponse::default();
        match event.kind {
            PointerEventKind::Down => self.on_down(event, &mut response),
            PointerEventKind::Move => self.on_move(event, &mut response),
            PointerEventKind::Up => self.on_up(&mut response),
            PointerEventKind::Leave => {
                response
                    .transitions
                    .extend(self.cancel(CancelReason::PointerLeft));
            }
            PointerEventKind::Cancel => {
                response
                    .transitions
                    .extend(self.cancel(CancelReason::DragEnd));
            }
        }
        response
    }

    fn on_down(&mut self, event: PointerEvent, response: &mut PointerResponse) {
        // A missed Up leaves a stale gesture behind.
        response
            .transitions
            .extend(self.tracker.cancel_drag(CancelReason::DragEnd));

        self.press = match self.layout().hit_test(event.x, event.y) {
            Some(Hit {
                column,
                target: HitTarget::Card { item, .. },
            }) => {
                tracing::trace!(%column, %item, x = event.x, y = event.y, "press armed");
                Some(Press {
                    column,
                    item,
                    x: event.x,
                    y: event.y,
                })
            }
            _ => None,
        };
    }

    fn on_move(&mut self, event: PointerEvent, response: &mut PointerResponse) {
        if !self.tracker.is_dragging() {
            let threshold = u32::from(self.config.drag_threshold);
            let Some(press) = self
                .press
                .take_if(|press| event.distance_from(press.x, press.y) >= threshold)
            else {
                return;
            };
            match self
                .tracker
                .begin_drag(&self.board, &press.column, &press.item)
            {
                Ok(transition) => response.transitions.push(transition),
                Err(err) => {
                    absorb(&err);
                    return;
                }
            }
        }

        let Some(hover) = self.hover_signal(event.x, event.y) else {
            return;
        };
        match self.tracker.update_hover(&self.board, &hover) {
            Ok(transition) => response.transitions.push(transition),
            Err(err) => absorb(&err),
        }
    }

    fn on_up(&mut self, response: &mut PointerResponse) {
        if let Some(press) = self.press.take() {
            tracing::debug!(item = %press.item, "card clicked");
            response.clicked = Some(press.item);
            return;
        }
        if !self.tracker.is_dragging() {
            return;
        }
        match self.tracker.complete_drop(&self.board) {
            Ok(outcome) => {
                if let Some(board) = outcome.board {
                    self.board = board;
                    response.board_changed = true;
                }
                response.transitions.push(outcome.transition);
            }
            Err(err) => absorb(&err),
        }
    }

    /// Translate a pointer position into a drag-over signal.
    fn hover_signal(&self, x: u16, y: u16) -> Option<HoverSignal> {
        let hit = self.layout().hit_test(x, y)?;
        let pointer_y = f64::from(y);
        match hit.target {
            HitTarget::Card { item, rect } => Some(HoverSignal::over_item(
                hit.column,
                item,
                rect.item_bounds(),
                pointer_y,
            )),
            HitTarget::Empty => Some(HoverSignal::over_column(hit.column, pointer_y)),
            HitTarget::Header | HitTarget::Placeholder => None,
        }
    }
}

fn absorb(err: &DragError) {
    tracing::debug!(%err, kind = ?err.kind(), "gesture ignored");
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragboard_core::{DragEffect, DragPhase, Item};

    fn view() -> BoardView {
        let board = Board::new([
            Column::new("todo", "To do", [Item::new("a", "A"), Item::new("b", "B")]),
            Column::new("done", "Done", [Item::new("c", "C")]),
        ])
        .unwrap();
        let config = HostConfig::default()
            .with_column_width(10)
            .with_column_gap(2)
            .with_drag_threshold(2);
        BoardView::new(board, config).with_area(Rect::from_size(40, 20))
    }

    fn order(view: &BoardView, column: &str) -> Vec<String> {
        view.board()
            .column(&column.into())
            .unwrap()
            .item_ids()
            .into_iter()
            .map(|id| id.to_string())
            .collect()
    }

    // Rows: header y=0, a y=1..4, b y=4..7; done: c y=1..4 at x=12.

    #[test]
    fn short_press_is_click() {
        let mut view = view();
        assert!(view.handle_pointer(PointerEvent::down(2, 2)).transitions.is_empty());
        let moved = view.handle_pointer(PointerEvent::moved(3, 2));
        assert!(!moved.is_handled());
        let up = view.handle_pointer(PointerEvent::up(3, 2));
        assert_eq!(up.clicked, Some("a".into()));
        assert!(!view.is_dragging());
    }

    #[test]
    fn press_outside_cards_does_nothing() {
        let mut view = view();
        view.handle_pointer(PointerEvent::down(2, 15));
        let moved = view.handle_pointer(PointerEvent::moved(14, 15));
        assert!(!moved.is_handled());
        assert!(!view.is_dragging());
    }

    #[test]
    fn threshold_starts_drag_and_hovers() {
        let mut view = view();
        view.handle_pointer(PointerEvent::down(2, 2));
        let response = view.handle_pointer(PointerEvent::moved(2, 6));
        let phases: Vec<DragPhase> = response.transitions.iter().map(|t| t.to).collect();
        assert_eq!(phases, [DragPhase::Dragging, DragPhase::Dragging]);
        assert!(matches!(
            response.transitions[0].effect,
            DragEffect::Started { source_index: 0, .. }
        ));
        assert!(view.is_drag_source(&"a".into()));
        // Lower half of b: todo[2], shown at 1 once a is lifted out.
        assert_eq!(view.placeholder().map(|p| p.index), Some(1));
    }

    #[test]
    fn drop_commits_and_replaces_board() {
        let mut view = view();
        view.handle_pointer(PointerEvent::down(2, 2));
        view.handle_pointer(PointerEvent::moved(13, 3));
        let up = view.handle_pointer(PointerEvent::up(13, 3));
        assert!(up.board_changed);
        assert_eq!(order(&view, "todo"), ["b"]);
        assert_eq!(order(&view, "done"), ["c", "a"]);
        assert!(view.placeholder().is_none());
    }

    #[test]
    fn header_and_placeholder_keep_previous_target() {
        let mut view = view();
        view.handle_pointer(PointerEvent::down(2, 2));
        view.handle_pointer(PointerEvent::moved(13, 12));
        let before = view.placeholder();
        assert!(before.is_some());

        let header = view.handle_pointer(PointerEvent::moved(13, 0));
        assert!(header.transitions.is_empty());
        let placeholder_row = view.layout().placeholder_rect().unwrap();
        let over = view.handle_pointer(PointerEvent::moved(placeholder_row.x, placeholder_row.y));
        assert!(over.transitions.is_empty());
        assert_eq!(view.placeholder(), before);
    }

    #[test]
    fn leave_cancels_without_touching_board() {
        let mut view = view();
        let snapshot = view.board().clone();
        view.handle_pointer(PointerEvent::down(2, 2));
        view.handle_pointer(PointerEvent::moved(13, 12));
        let response = view.handle_pointer(PointerEvent::leave());
        assert!(matches!(
            response.transitions.as_slice(),
            [DragTransition {
                effect: DragEffect::Canceled {
                    reason: CancelReason::PointerLeft,
                    ..
                },
                ..
            }]
        ));
        assert_eq!(view.board(), &snapshot);
        assert!(view.handle_pointer(PointerEvent::up(13, 12)).transitions.is_empty());
    }

    #[test]
    fn vanished_source_is_absorbed() {
        let mut view = view();
        view.handle_pointer(PointerEvent::down(2, 2));
        view.handle_pointer(PointerEvent::moved(13, 12));

        let replaced = Board::new([
            Column::new("todo", "To do", [Item::new("b", "B")]),
            Column::new("done", "Done", [Item::new("c", "C")]),
        ])
        .unwrap();
        view.set_board(replaced.clone());
        let up = view.handle_pointer(PointerEvent::up(13, 12));
        assert!(!up.board_changed);
        assert_eq!(view.board(), &replaced);
        assert!(!view.is_dragging());
    }

    #[test]
    fn placeholder_tracks_board_replaced_mid_drag() {
        let board = Board::new([
            Column::new("todo", "To do", ["a", "b", "c"].map(|id| Item::new(id, id))),
            Column::new("done", "Done", [Item::new("d", "D")]),
        ])
        .unwrap();
        let config = HostConfig::default()
            .with_column_width(10)
            .with_column_gap(2)
            .with_drag_threshold(2);
        let mut view = BoardView::new(board, config);
        view.set_area(Rect::from_size(40, 20));

        view.handle_pointer(PointerEvent::down(2, 2));
        view.handle_pointer(PointerEvent::moved(13, 12));
        assert!(view.is_dragging());

        view.set_board(
            Board::new([
                Column::new("todo", "To do", ["b", "c", "a"].map(|id| Item::new(id, id))),
                Column::new("done", "Done", [Item::new("d", "D")]),
            ])
            .unwrap(),
        );
        // Lower half of c (y 4..7) once a is lifted out.
        view.handle_pointer(PointerEvent::moved(2, 6));
        let marker = view.placeholder().expect("marker");
        assert_eq!(marker.column_id, "todo".into());
        assert_eq!(view.layout().placeholder_rect(), Some(Rect::new(0, 7, 10, 3)));

        view.handle_pointer(PointerEvent::up(2, 6));
        assert_eq!(order(&view, "todo"), ["b", "c", "a"]);
        let landed = view.board().locate(&"a".into()).unwrap();
        assert_eq!(landed.index, marker.index);
    }

    #[test]
    fn view_slots_mirror_tracker_state() {
        let mut view = view();
        assert_eq!(view.config().drag_threshold, 2);
        view.handle_pointer(PointerEvent::down(2, 2));
        view.handle_pointer(PointerEvent::moved(13, 12));
        assert_eq!(view.tracker().transition_count(), 2);

        let board = view.board().clone();
        let rows = |column: &str| -> Vec<Option<String>> {
            view.column_slots(board.column(&column.into()).unwrap())
                .into_iter()
                .map(|slot| match slot {
                    Slot::Item(item) => Some(item.id.to_string()),
                    Slot::Placeholder => None,
                })
                .collect()
        };
        assert_eq!(rows("todo"), [Some("b".to_owned())]);
        assert_eq!(rows("done"), [Some("c".to_owned()), None]);
    }

    #[test]
    fn escape_cancel_is_idempotent() {
        let mut view = view();
        assert!(view.cancel(CancelReason::EscapeKey).is_none());
        view.handle_pointer(PointerEvent::down(2, 2));
        view.handle_pointer(PointerEvent::moved(2, 9));
        assert!(view.cancel(CancelReason::EscapeKey).is_some());
        assert!(view.cancel(CancelReason::EscapeKey).is_none());
    }
}
