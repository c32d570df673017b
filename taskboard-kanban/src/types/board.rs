//! Board-level types: Board, Column

use super::ids::{BoardId, ColumnId};
use super::slot::ColumnSlot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name of the protected system column. It never takes part in reordering
/// and always renders last.
pub const COMPLETED_COLUMN_NAME: &str = "Completed";

/// Name of the pinned-start system column. Only its initial slot is special;
/// afterwards it reorders like any other column.
pub const NOW_COLUMN_NAME: &str = "Now";

/// Column names users may not create or rename into
pub const RESERVED_COLUMN_NAMES: [&str; 2] = [NOW_COLUMN_NAME, COMPLETED_COLUMN_NAME];

/// The kanban board metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Board {
    /// Create a new board with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BoardId::new(),
            name: name.into(),
            description: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A column defines a workflow stage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub board_id: BoardId,
    pub name: String,
    #[serde(rename = "position")]
    pub slot: ColumnSlot,
    #[serde(default)]
    pub is_system: bool,
}

impl Column {
    /// Create an ordinary user column
    pub fn new(board_id: BoardId, name: impl Into<String>, position: i64) -> Self {
        Self {
            id: ColumnId::new(),
            board_id,
            name: name.into(),
            slot: ColumnSlot::Ordinary(position),
            is_system: false,
        }
    }

    /// The `Now` system column at the given ordinary position
    pub fn now(board_id: BoardId, position: i64) -> Self {
        Self {
            is_system: true,
            ..Self::new(board_id, NOW_COLUMN_NAME, position)
        }
    }

    /// The `Completed` system column, pinned to the end
    pub fn completed(board_id: BoardId) -> Self {
        Self {
            id: ColumnId::new(),
            board_id,
            name: COMPLETED_COLUMN_NAME.to_string(),
            slot: ColumnSlot::PinnedEnd,
            is_system: true,
        }
    }

    pub fn with_id(mut self, id: impl Into<ColumnId>) -> Self {
        self.id = id.into();
        self
    }

    /// Excluded from reordering entirely.
    ///
    /// Decided by name alone: `Now` is a system column too but stays reorderable.
    pub fn is_protected(&self) -> bool {
        self.name == COMPLETED_COLUMN_NAME
    }
}

impl AsRef<Column> for Column {
    fn as_ref(&self) -> &Column {
        self
    }
}

/// Whether `name` is reserved for a system column
pub fn is_reserved_name(name: &str) -> bool {
    RESERVED_COLUMN_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name.trim()))
}

/// Sort columns ascending by slot. Stable, so ties keep their input order.
pub fn sort_columns<C: AsRef<Column>>(columns: &mut [C]) {
    columns.sort_by_key(|c| c.as_ref().slot);
}
