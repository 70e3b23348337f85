#![forbid(unsafe_code)]

//! Core: board model, insertion resolution, reorder commit, and drag sessions.
//!
//! # Role in dragboard
//! `dragboard-core` is the host-agnostic engine. It never sees pointer
//! events or pixels. Hosts translate their input into three calls
//! (`begin_drag`, `update_hover`, `complete_drop`) plus `cancel_drag`, and
//! render from the board and the derived placeholder.
//!
//! # Pipeline
//!
//! ```text
//! HoverSignal --resolve--> InsertionPoint --(stored in DragSession)
//!                                 |
//!                 reorder::plan_move(current board)
//!                  |                      \
//!             Placeholder            reorder::commit --> next Board
//! ```
//!
//! Both the placeholder and the commit plan the move against the same
//! board, so the marker the user sees is always where the item lands.
//!
//! # Primary responsibilities
//! - **Board**: immutable ordered columns of ordered items with shared
//!   structure between successive versions.
//! - **resolve**: pure pointer-to-index mapping using the midpoint rule.
//! - **reorder**: commit an insertion point into a new board.
//! - **DragTracker**: the single-gesture state machine.
//! - **placeholder**: marker position and per-column rendered rows.

pub mod board;
pub mod error;
pub mod geometry;
pub mod insertion;
pub mod placeholder;
pub mod reorder;
pub mod resolve;
pub mod session;

pub use board::{Board, BoardError, Column, ColumnId, Item, ItemId, ItemLocation};
pub use error::{DragError, DragErrorKind};
pub use geometry::ItemBounds;
pub use insertion::InsertionPoint;
pub use placeholder::{Placeholder, Slot, column_slots};
pub use reorder::{MovePlan, commit, plan_move};
pub use resolve::{HoveredItem, resolve};
pub use session::{
    CancelReason, DragEffect, DragPhase, DragSession, DragTracker, DragTransition, DropOutcome,
    HoverSignal,
};
