#![forbid(unsafe_code)]

//! Board model: ordered columns of ordered items.
//!
//! The model is passive. It answers structural queries and nothing else; the
//! only code that produces a new [`Board`] from an old one is
//! [`reorder`](crate::reorder).
//!
//! # Sharing
//!
//! Columns are stored as `Arc<Column>` and items as `Arc<Item>`. A committed
//! move rebuilds only the affected columns, so every other column of the new
//! board is pointer-equal to the same column of the old board:
//!
//! ```text
//! before:  [Arc(todo), Arc(doing), Arc(done)]
//! move a: todo -> done
//! after:   [Arc(todo'), Arc(doing), Arc(done')]
//!                        ^^^^^^^^^^ shared
//! ```
//!
//! # Invariants
//!
//! 1. Column ids are unique within a board.
//! 2. Every item id appears in exactly one column, exactly once.
//!
//! Both are checked by [`Board::new`] and by deserialization.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an id from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw id.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identity of an item. Unique across the whole board.
    ItemId
);

string_id!(
    /// Identity of a column. Unique within a board.
    ColumnId
);

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// A single card on the board.
///
/// Only `id` carries meaning for the reorder engine. `title`, `description`
/// and every domain field in `extra` are payload that moves with the item
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Domain fields (`tags`, `owner`, `priority`, ...), kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Create an item with no description and no extra fields.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            extra: Map::new(),
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an opaque domain field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Column
// ---------------------------------------------------------------------------

/// An ordered list of items. Display order is logical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    items: Vec<Arc<Item>>,
}

impl Column {
    /// Create a column from owned items.
    #[must_use]
    pub fn new(
        id: impl Into<ColumnId>,
        title: impl Into<String>,
        items: impl IntoIterator<Item = Item>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items: items.into_iter().map(Arc::new).collect(),
        }
    }

    /// Same column identity, different item sequence.
    pub(crate) fn with_items(&self, items: Vec<Arc<Item>>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            items,
        }
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[Arc<Item>] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Zero-based position of an item in this column.
    #[must_use]
    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Item ids in display order.
    #[must_use]
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// Where an item currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemLocation {
    /// Index of the column in the board.
    pub column: usize,
    /// Index of the item in that column.
    pub index: usize,
}

/// Full ordered collection of columns.
///
/// Serializes as a plain JSON array of columns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Board {
    columns: Vec<Arc<Column>>,
}

impl Board {
    /// Build a board, rejecting duplicate column or item ids.
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Result<Self, BoardError> {
        let board = Self {
            columns: columns.into_iter().map(Arc::new).collect(),
        };
        board.check_invariants()?;
        Ok(board)
    }

    /// Assemble a board from already-shared columns without re-validation.
    ///
    /// Callers must preserve the id invariants of the board they started from.
    pub(crate) fn from_shared(columns: Vec<Arc<Column>>) -> Self {
        Self { columns }
    }

    /// Columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Arc<Column>] {
        &self.columns
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&Arc<Column>> {
        self.columns.iter().find(|column| &column.id == id)
    }

    #[must_use]
    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| &column.id == id)
    }

    /// Find the column and position holding `id`.
    #[must_use]
    pub fn locate(&self, id: &ItemId) -> Option<ItemLocation> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(column, col)| {
                col.position_of(id).map(|index| ItemLocation { column, index })
            })
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&Arc<Item>> {
        let loc = self.locate(id)?;
        self.columns[loc.column].items.get(loc.index)
    }

    /// Total number of items across all columns.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.columns.iter().map(|column| column.len()).sum()
    }

    /// Every item id, column by column.
    pub fn item_ids(&self) -> impl Iterator<Item = &ItemId> + '_ {
        self.columns
            .iter()
            .flat_map(|column| column.items.iter().map(|item| &item.id))
    }

    /// Verify id uniqueness for columns and items.
    pub fn check_invariants(&self) -> Result<(), BoardError> {
        let mut columns: AHashSet<&ColumnId> = AHashSet::with_capacity(self.columns.len());
        let mut owners: AHashMap<&ItemId, &ColumnId> = AHashMap::with_capacity(self.item_count());

        for column in &self.columns {
            if !columns.insert(&column.id) {
                return Err(BoardError::DuplicateColumn {
                    id: column.id.clone(),
                });
            }
            for item in &column.items {
                if let Some(first) = owners.insert(&item.id, &column.id) {
                    return Err(BoardError::DuplicateItem {
                        id: item.id.clone(),
                        first: first.clone(),
                        second: column.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let columns = Vec::<Column>::deserialize(deserializer)?;
        Board::new(columns).map_err(serde::de::Error::custom)
    }
}

/// Structural violations detected when a board is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    DuplicateColumn {
        id: ColumnId,
    },
    DuplicateItem {
        id: ItemId,
        first: ColumnId,
        second: ColumnId,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateColumn { id } => write!(f, "duplicate column id '{id}'"),
            Self::DuplicateItem { id, first, second } => {
                if first == second {
                    write!(f, "item '{id}' appears twice in column '{first}'")
                } else {
                    write!(f, "item '{id}' appears in both '{first}' and '{second}'")
                }
            }
        }
    }
}

impl std::error::Error for BoardError {}
