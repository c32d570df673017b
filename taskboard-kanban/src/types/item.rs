//! Item (card) type

use super::ids::{BoardId, ColumnId, ItemId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A card on the board.
///
/// `column_id` is mutable: a move reassigns ownership to another column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub column_id: ColumnId,
    pub board_id: BoardId,
    pub name: String,
    pub position: i64,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Create a new item at the given position of a column
    pub fn new(
        board_id: BoardId,
        column_id: ColumnId,
        name: impl Into<String>,
        position: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ItemId::new(),
            column_id,
            board_id,
            name: name.into(),
            position,
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the item as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Position for an item appended to a column: one past the largest, or 0 when empty.
pub fn next_item_position(items: &[Item]) -> i64 {
    items
        .iter()
        .map(|i| i.position)
        .max()
        .map(|p| p + 1)
        .unwrap_or(0)
}
