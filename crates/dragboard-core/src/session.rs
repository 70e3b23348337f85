#![forbid(unsafe_code)]

//! Drag session tracker.
//!
//! Owns the lifecycle of at most one drag gesture:
//!
//! ```text
//! Idle --begin_drag--> Dragging --update_hover--> Dragging
//!                         |  \
//!                         |   \--complete_drop--> Idle (+ new board, or no-op)
//!                         \------cancel_drag----> Idle
//! ```
//!
//! # Invariants
//!
//! 1. At most one [`DragSession`] exists. `begin_drag` while dragging is an
//!    [`InvalidState`](crate::DragErrorKind::InvalidState) error, never an
//!    overwrite.
//! 2. The tracker never holds a board. Each call borrows the host's current
//!    board; only `complete_drop` produces a new one.
//! 3. Any error resets the tracker to idle. The caller's board is untouched.
//! 4. `cancel_drag` is reachable from every state and is idempotent.
//! 5. The session's target is re-resolved from scratch on every hover update.
//!
//! Every accepted step returns a [`DragTransition`] with a monotonically
//! increasing `transition_id`, so hosts can log or replay the gesture.

use serde::{Deserialize, Serialize};

use crate::board::{Board, ColumnId, ItemId};
use crate::error::DragError;
use crate::geometry::ItemBounds;
use crate::insertion::InsertionPoint;
use crate::placeholder::{self, Placeholder};
use crate::reorder;
use crate::resolve::{HoveredItem, resolve};

/// Coarse lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Why a drag ended without a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    /// Host reported drag-end without a drop.
    DragEnd,
    /// Pointer left the board surface.
    PointerLeft,
    EscapeKey,
    Programmatic,
}

/// State of the one active gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    source_column: ColumnId,
    source_item: ItemId,
    source_index: usize,
    target: Option<InsertionPoint>,
}

impl DragSession {
    #[must_use]
    pub fn source_column(&self) -> &ColumnId {
        &self.source_column
    }

    #[must_use]
    pub fn source_item(&self) -> &ItemId {
        &self.source_item
    }

    /// Position of the dragged item when the drag began.
    #[must_use]
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    /// Most recently resolved target, uncorrected.
    #[must_use]
    pub fn target(&self) -> Option<&InsertionPoint> {
        self.target.as_ref()
    }
}

/// One drag-over signal from the host.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverSignal {
    pub pointer_y: f64,
    /// Item under the pointer and its bounds, if any.
    pub hovered_item: Option<(ItemId, ItemBounds)>,
    pub column_id: ColumnId,
}

impl HoverSignal {
    /// Pointer over an item.
    #[must_use]
    pub fn over_item(
        column_id: impl Into<ColumnId>,
        item_id: impl Into<ItemId>,
        bounds: ItemBounds,
        pointer_y: f64,
    ) -> Self {
        Self {
            pointer_y,
            hovered_item: Some((item_id.into(), bounds)),
            column_id: column_id.into(),
        }
    }

    /// Pointer over column space not covered by any item.
    #[must_use]
    pub fn over_column(column_id: impl Into<ColumnId>, pointer_y: f64) -> Self {
        Self {
            pointer_y,
            hovered_item: None,
            column_id: column_id.into(),
        }
    }
}

/// What one lifecycle step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEffect {
    Started {
        column: ColumnId,
        item: ItemId,
        source_index: usize,
    },
    Retargeted {
        previous: Option<InsertionPoint>,
        target: InsertionPoint,
    },
    /// `from` is the removal slot, `to` the final slot after correction.
    Committed {
        item: ItemId,
        from: InsertionPoint,
        to: InsertionPoint,
    },
    /// Drop before any hover resolved a target. Board unchanged.
    DroppedWithoutTarget { item: ItemId },
    Canceled { item: ItemId, reason: CancelReason },
}

/// One state-machine step with telemetry fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragTransition {
    pub transition_id: u64,
    pub from: DragPhase,
    pub to: DragPhase,
    pub effect: DragEffect,
}

/// Result of [`DragTracker::complete_drop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropOutcome {
    pub transition: DragTransition,
    /// The next board, if the drop committed a move.
    pub board: Option<Board>,
}

impl DropOutcome {
    /// True when the drop produced a new board.
    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.board.is_some()
    }
}

/// Tracks the single active drag gesture.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    session: Option<DragSession>,
    transition_counter: u64,
}

impl DragTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        if self.session.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if dragging.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Number of transitions emitted so far.
    #[must_use]
    pub fn transition_count(&self) -> u64 {
        self.transition_counter
    }

    /// True while `item` is the source of the active drag.
    #[must_use]
    pub fn is_drag_source(&self, item: &ItemId) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| &session.source_item == item)
    }

    /// Where the insertion marker should be shown for a drop onto `board`.
    #[must_use]
    pub fn placeholder(&self, board: &Board) -> Option<Placeholder> {
        placeholder::derive(board, self.session.as_ref())
    }

    /// Start dragging `item` out of `column`.
    pub fn begin_drag(
        &mut self,
        board: &Board,
        column: &ColumnId,
        item: &ItemId,
    ) -> Result<DragTransition, DragError> {
        if let Some(active) = &self.session {
            let err = DragError::AlreadyDragging {
                active: active.source_item.clone(),
            };
            return Err(self.abort(err));
        }

        let source = board.column(column).ok_or_else(|| DragError::ColumnNotFound {
            column: column.clone(),
        })?;
        let source_index = source
            .position_of(item)
            .ok_or_else(|| DragError::ItemNotFound {
                column: column.clone(),
                item: item.clone(),
            })?;

        self.session = Some(DragSession {
            source_column: column.clone(),
            source_item: item.clone(),
            source_index,
            target: None,
        });
        tracing::debug!(%column, %item, source_index, "drag started");

        Ok(self.transition(
            DragPhase::Idle,
            DragEffect::Started {
                column: column.clone(),
                item: item.clone(),
                source_index,
            },
        ))
    }

    /// Re-resolve the drop target from one drag-over signal.
    pub fn update_hover(
        &mut self,
        board: &Board,
        hover: &HoverSignal,
    ) -> Result<DragTransition, DragError> {
        if self.session.is_none() {
            return Err(DragError::NotDragging {
                operation: "update_hover",
            });
        }

        let Some(column) = board.column(&hover.column_id) else {
            let err = DragError::ColumnNotFound {
                column: hover.column_id.clone(),
            };
            return Err(self.abort(err));
        };

        let item_ids = column.item_ids();
        let hovered = hover
            .hovered_item
            .as_ref()
            .map(|(id, bounds)| HoveredItem {
                id,
                bounds: *bounds,
            });
        let target = resolve(hover.pointer_y, hovered, &hover.column_id, &item_ids);

        let previous = self
            .session
            .as_mut()
            .and_then(|session| session.target.replace(target.clone()));
        tracing::trace!(
            pointer_y = hover.pointer_y,
            target = %target,
            "hover resolved"
        );

        Ok(self.transition(
            DragPhase::Dragging,
            DragEffect::Retargeted { previous, target },
        ))
    }

    /// Finish the gesture, committing the current target if there is one.
    pub fn complete_drop(&mut self, board: &Board) -> Result<DropOutcome, DragError> {
        let Some(session) = self.session.take() else {
            return Err(DragError::NotDragging {
                operation: "complete_drop",
            });
        };

        let Some(target) = session.target else {
            tracing::debug!(item = %session.source_item, "drop without target ignored");
            let transition = self.transition(
                DragPhase::Dragging,
                DragEffect::DroppedWithoutTarget {
                    item: session.source_item,
                },
            );
            return Ok(DropOutcome {
                transition,
                board: None,
            });
        };

        let (plan, next) = reorder::commit_planned(
            board,
            &session.source_column,
            &session.source_item,
            &target,
        )
        .inspect_err(|err| tracing::debug!(%err, "drop rejected, board unchanged"))?;

        let transition = self.transition(
            DragPhase::Dragging,
            DragEffect::Committed {
                item: session.source_item,
                from: InsertionPoint::new(session.source_column, plan.removal_index),
                to: InsertionPoint::new(target.column_id, plan.insert_index),
            },
        );
        Ok(DropOutcome {
            transition,
            board: Some(next),
        })
    }

    /// Abandon the gesture. Safe to call when idle; returns `None` then.
    pub fn cancel_drag(&mut self, reason: CancelReason) -> Option<DragTransition> {
        let session = self.session.take()?;
        tracing::debug!(item = %session.source_item, ?reason, "drag canceled");
        Some(self.transition(
            DragPhase::Dragging,
            DragEffect::Canceled {
                item: session.source_item,
                reason,
            },
        ))
    }

    fn abort(&mut self, err: DragError) -> DragError {
        if let Some(session) = self.session.take() {
            tracing::debug!(item = %session.source_item, %err, "drag aborted");
        }
        err
    }

    fn transition(&mut self, from: DragPhase, effect: DragEffect) -> DragTransition {
        self.transition_counter = self.transition_counter.saturating_add(1);
        DragTransition {
            transition_id: self.transition_counter,
            from,
            to: self.phase(),
            effect,
        }
    }
}
