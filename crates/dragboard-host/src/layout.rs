#![forbid(unsafe_code)]

//! Board layout and hit testing.
//!
//! ```text
//!  area.x
//!  |<- column_width ->|gap|<- column_width ->|
//!  +------------------+   +------------------+  -
//!  | To do            |   | Done             |  | header_height
//!  +------------------+   +------------------+  -
//!  | card a           |   | card c           |  | card_height
//!  | card b           |   | ~~~~~~~~~~~~~~~~ |  | placeholder
//!  |                  |   |                  |
//!  |   (empty space)  |   |                  |
//!  +------------------+   +------------------+  area.bottom()
//! ```
//!
//! Rows follow [`column_slots`], so during a drag the source card is gone
//! and the placeholder occupies one card-height row. Columns that start
//! past the right edge of the area are not laid out.

use dragboard_core::{Board, ColumnId, DragSession, ItemId, Slot, column_slots};

use crate::config::HostConfig;
use crate::geometry::Rect;

/// What occupies one row of a column body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotKind {
    Card(ItemId),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRect {
    pub kind: SlotKind,
    pub rect: Rect,
}

/// Screen regions of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRegion {
    pub id: ColumnId,
    /// Whole column, header included.
    pub rect: Rect,
    pub header: Rect,
    pub body: Rect,
    pub slots: Vec<SlotRect>,
}

/// What a cell hit within a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Header,
    Card { item: ItemId, rect: Rect },
    Placeholder,
    /// Column body not covered by any row.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub column: ColumnId,
    pub target: HitTarget,
}

/// Laid-out board for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardLayout {
    columns: Vec<ColumnRegion>,
}

impl BoardLayout {
    /// Lay out `board` inside `area`, reflecting the active drag (if any).
    #[must_use]
    pub fn compute(
        board: &Board,
        session: Option<&DragSession>,
        config: &HostConfig,
        area: Rect,
    ) -> Self {
        let mut columns = Vec::with_capacity(board.len());
        let mut x = area.x;

        for column in board.columns() {
            if x >= area.right() {
                break;
            }
            let width = config.column_width.min(area.right() - x);
            let rect = Rect::new(x, area.y, width, area.height);
            let header_height = config.header_height.min(area.height);
            let header = Rect::new(x, area.y, width, header_height);
            let body = Rect::new(
                x,
                area.y.saturating_add(header_height),
                width,
                area.height - header_height,
            );

            let mut y = body.y;
            let slots = column_slots(board, column, session)
                .into_iter()
                .map(|slot| {
                    let kind = match slot {
                        Slot::Item(item) => SlotKind::Card(item.id.clone()),
                        Slot::Placeholder => SlotKind::Placeholder,
                    };
                    let rect = Rect::new(x, y, width, config.card_height);
                    y = y.saturating_add(config.card_height);
                    SlotRect { kind, rect }
                })
                .collect();

            columns.push(ColumnRegion {
                id: column.id.clone(),
                rect,
                header,
                body,
                slots,
            });
            x = x.saturating_add(config.column_stride());
        }

        Self { columns }
    }

    #[must_use]
    pub fn columns(&self) -> &[ColumnRegion] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&ColumnRegion> {
        self.columns.iter().find(|region| &region.id == id)
    }

    /// Rectangle of a visible card.
    #[must_use]
    pub fn card_rect(&self, item: &ItemId) -> Option<Rect> {
        self.columns
            .iter()
            .flat_map(|region| &region.slots)
            .find(|slot| matches!(&slot.kind, SlotKind::Card(id) if id == item))
            .map(|slot| slot.rect)
    }

    /// Rectangle of the placeholder row, if one is laid out.
    #[must_use]
    pub fn placeholder_rect(&self) -> Option<Rect> {
        self.columns
            .iter()
            .flat_map(|region| &region.slots)
            .find(|slot| slot.kind == SlotKind::Placeholder)
            .map(|slot| slot.rect)
    }

    /// Determine what a cell falls on.
    #[must_use]
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Hit> {
        let region = self
            .columns
            .iter()
            .find(|region| !region.rect.is_empty() && region.rect.contains(x, y))?;

        let target = if region.header.contains(x, y) {
            HitTarget::Header
        } else {
            match region.slots.iter().find(|slot| slot.rect.contains(x, y)) {
                Some(SlotRect {
                    kind: SlotKind::Card(item),
                    rect,
                }) => HitTarget::Card {
                    item: item.clone(),
                    rect: *rect,
                },
                Some(SlotRect {
                    kind: SlotKind::Placeholder,
                    ..
                }) => HitTarget::Placeholder,
                None => HitTarget::Empty,
            }
        };

        Some(Hit {
            column: region.id.clone(),
            target,
        })
    }
}
