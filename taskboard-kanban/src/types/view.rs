//! Read models: columns annotated with their items, and the whole board.

use super::board::{sort_columns, Board, Column};
use super::item::Item;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A column together with its loaded items.
///
/// Items are shared behind an `Arc` so projections can reorder columns
/// without copying or touching item arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnWithItems {
    #[serde(flatten)]
    pub column: Column,
    pub items: Arc<[Item]>,
}

impl ColumnWithItems {
    /// Build from a column and its items; items are sorted ascending by position.
    pub fn new(column: Column, mut items: Vec<Item>) -> Self {
        items.sort_by_key(|i| i.position);
        Self {
            column,
            items: items.into(),
        }
    }

    /// Index of an item within this column's sorted item list
    pub fn index_of(&self, item_id: &super::ItemId) -> Option<usize> {
        self.items.iter().position(|i| &i.id == item_id)
    }
}

impl AsRef<Column> for ColumnWithItems {
    fn as_ref(&self) -> &Column {
        &self.column
    }
}

/// A board and all of its columns, each carrying its items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub board_id: super::BoardId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub columns: Vec<ColumnWithItems>,
}

impl BoardView {
    /// Group items under their columns. Columns come out sorted by slot.
    ///
    /// Items whose column is missing are dropped with a warning.
    pub fn assemble(board: &Board, columns: Vec<Column>, items: Vec<Item>) -> Self {
        let mut columns = columns;
        sort_columns(&mut columns);

        let mut buckets: Vec<Vec<Item>> = vec![Vec::new(); columns.len()];
        for item in items {
            match columns.iter().position(|c| c.id == item.column_id) {
                Some(idx) => buckets[idx].push(item),
                None => tracing::warn!(
                    item = %item.id,
                    column = %item.column_id,
                    "item refers to a column that does not exist"
                ),
            }
        }

        Self {
            board_id: board.id.clone(),
            name: board.name.clone(),
            description: board.description.clone(),
            columns: columns
                .into_iter()
                .zip(buckets)
                .map(|(column, items)| ColumnWithItems::new(column, items))
                .collect(),
        }
    }

    /// Find a column by id
    pub fn column(&self, id: &super::ColumnId) -> Option<&ColumnWithItems> {
        self.columns.iter().find(|c| &c.column.id == id)
    }
}
