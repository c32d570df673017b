//! Item placement engine: target column and insertion index for a dropped card.

use crate::types::{ColumnId, ColumnWithItems, Item, ItemId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which half of the target card the pointer was over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosestEdge {
    Top,
    Bottom,
}

/// What a card was dropped onto
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropTarget {
    /// The empty surface of a column
    Column { column_id: ColumnId },
    /// Another card. A missing edge is treated as `Top`.
    Item {
        item_id: ItemId,
        column_id: ColumnId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        edge: Option<ClosestEdge>,
    },
}

impl DropTarget {
    pub fn column(column_id: impl Into<ColumnId>) -> Self {
        Self::Column {
            column_id: column_id.into(),
        }
    }

    pub fn item(
        item_id: impl Into<ItemId>,
        column_id: impl Into<ColumnId>,
        edge: Option<ClosestEdge>,
    ) -> Self {
        Self::Item {
            item_id: item_id.into(),
            column_id: column_id.into(),
            edge,
        }
    }

    /// The column the drop was reported in
    pub fn column_id(&self) -> &ColumnId {
        match self {
            Self::Column { column_id } | Self::Item { column_id, .. } => column_id,
        }
    }
}

/// Where a dropped card goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPlacement {
    pub target_column_id: ColumnId,
    pub new_position: i64,
}

impl ItemPlacement {
    /// True when the card would land exactly where it already is; callers
    /// must not persist anything in that case.
    pub fn is_noop_for(&self, item: &Item) -> bool {
        self.target_column_id == item.column_id && self.new_position == item.position
    }
}

/// Compute the target column and insertion index for `source` dropped on `target`.
///
/// `columns` is the board's current state, each column's items sorted by
/// position. The returned index is always a valid insertion point into the
/// destination column once the source card has been taken out of it.
pub fn calculate_item_placement(
    source: &Item,
    target: &DropTarget,
    columns: &[ColumnWithItems],
) -> ItemPlacement {
    // A card target lands in the column the card actually lives in; the
    // carried column id is only used when the card can't be found.
    let target_column_id = match target {
        DropTarget::Item { item_id, .. } => columns
            .iter()
            .find(|c| c.index_of(item_id).is_some())
            .map(|c| c.column.id.clone())
            .unwrap_or_else(|| target.column_id().clone()),
        DropTarget::Column { column_id } => column_id.clone(),
    };
    let items: &[Item] = columns
        .iter()
        .find(|c| c.column.id == target_column_id)
        .map(|c| &c.items[..])
        .unwrap_or(&[]);

    let source_index = if source.column_id == target_column_id {
        items.iter().position(|i| i.id == source.id)
    } else {
        None
    };

    let new_position = match target {
        DropTarget::Column { .. } => {
            // Appending to its own column: the count excludes the card itself.
            let count = items.len() - usize::from(source_index.is_some());
            count as i64
        }
        DropTarget::Item { item_id, edge, .. } => {
            match items.iter().position(|i| &i.id == item_id) {
                Some(target_index) => {
                    let mut position = match edge {
                        Some(ClosestEdge::Bottom) => target_index + 1,
                        Some(ClosestEdge::Top) | None => target_index,
                    };
                    // Removing the source first shifts everything after it up by one.
                    if matches!(source_index, Some(src) if src < position) {
                        position -= 1;
                    }
                    position as i64
                }
                None => {
                    debug!(target = %item_id, "drop target item not found, inserting at head");
                    0
                }
            }
        }
    };

    debug!(
        item = %source.id,
        column = %target_column_id,
        position = new_position,
        "computed item placement"
    );

    ItemPlacement {
        target_column_id,
        new_position,
    }
}
