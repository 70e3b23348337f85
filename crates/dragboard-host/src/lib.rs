#![forbid(unsafe_code)]

//! Host adapter: pointer input, layout, configuration, and demo boards.
//!
//! # Role in dragboard
//! `dragboard-host` sits between a platform's raw pointer stream and the
//! pure engine in `dragboard-core`. It lays the board out in terminal cells,
//! hit-tests pointer positions against cards, and forwards the resulting
//! drag-start, drag-over, drop, and cancel signals to a `DragTracker`.
//!
//! # Primary responsibilities
//! - **BoardView**: owns the canonical board and converts pointer events.
//! - **BoardLayout**: column, header, card, and placeholder rectangles.
//! - **HostConfig**: layout metrics and drag threshold, from TOML or JSON.
//! - **BoardPreset**: the bundled task, campaign, software, and project boards.

pub mod config;
pub mod geometry;
pub mod layout;
pub mod pointer;
pub mod presets;
pub mod view;

pub use config::{ConfigError, HostConfig};
pub use geometry::Rect;
pub use layout::{BoardLayout, ColumnRegion, Hit, HitTarget, SlotKind, SlotRect};
pub use pointer::{PointerEvent, PointerEventKind};
pub use presets::{BoardPreset, UnknownPreset};
pub use view::{BoardView, PointerResponse};
