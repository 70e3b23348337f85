#![forbid(unsafe_code)]

//! dragboard public facade crate.
//!
//! Re-exports the engine (`dragboard-core`) and the host adapter
//! (`dragboard-host`), adds an umbrella [`Error`], board loading helpers, and
//! a prelude for day-to-day use.
//!
//! ```rust,ignore
//! use dragboard::prelude::*;
//!
//! let board = BoardPreset::Task.board()?;
//! let mut view = BoardView::new(board, HostConfig::default());
//! view.handle_pointer(PointerEvent::down(3, 1));
//! ```

use std::fmt;
use std::path::Path;

// --- Core re-exports -------------------------------------------------------

pub use dragboard_core::{
    Board, BoardError, CancelReason, Column, ColumnId, DragEffect, DragError, DragErrorKind,
    DragPhase, DragSession, DragTracker, DragTransition, DropOutcome, HoverSignal, HoveredItem,
    InsertionPoint, Item, ItemBounds, ItemId, ItemLocation, MovePlan, Placeholder, Slot, commit,
    plan_move, resolve,
};

// --- Host re-exports -------------------------------------------------------

pub use dragboard_host::{
    BoardLayout, BoardPreset, BoardView, ConfigError, Hit, HitTarget, HostConfig, PointerEvent,
    PointerEventKind, PointerResponse, Rect, UnknownPreset,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for dragboard hosts.
#[derive(Debug)]
pub enum Error {
    /// Board failed structural validation.
    Board(BoardError),
    /// A gesture was rejected.
    Drag(DragError),
    Config(ConfigError),
    /// Board JSON could not be parsed.
    Json(serde_json::Error),
    Io(std::io::Error),
    UnknownPreset(UnknownPreset),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(err) => write!(f, "{err}"),
            Self::Drag(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "board JSON error: {err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::UnknownPreset(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Board(err) => Some(err),
            Self::Drag(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::UnknownPreset(err) => Some(err),
        }
    }
}

impl From<BoardError> for Error {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

impl From<DragError> for Error {
    fn from(err: DragError) -> Self {
        Self::Drag(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<UnknownPreset> for Error {
    fn from(err: UnknownPreset) -> Self {
        Self::UnknownPreset(err)
    }
}

/// Standard result type for dragboard APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Loading ---------------------------------------------------------------

/// Parse a board from a JSON array of columns.
pub fn board_from_json_str(s: &str) -> Result<Board> {
    Ok(serde_json::from_str(s)?)
}

/// Read and parse a board JSON file.
pub fn board_from_json_file(path: impl AsRef<Path>) -> Result<Board> {
    let content = std::fs::read_to_string(path.as_ref())?;
    board_from_json_str(&content)
}

/// Build a view over a named preset with a validated config.
pub fn preset_view(name: &str, config: HostConfig) -> Result<BoardView> {
    let preset: BoardPreset = name.parse()?;
    let config = config.validated()?;
    Ok(BoardView::new(preset.board()?, config))
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Board, BoardPreset, BoardView, CancelReason, Column, ColumnId, DragTracker, Error,
        HostConfig, HoverSignal, InsertionPoint, Item, ItemBounds, ItemId, PointerEvent, Rect,
        Result,
    };
    pub use crate::{core, host};
}

pub use dragboard_core as core;
pub use dragboard_host as host;
