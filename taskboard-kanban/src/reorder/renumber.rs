//! Dense position renumbering applied when a reorder or move is persisted.

use crate::error::{KanbanError, Result};
use crate::types::{Column, ColumnId, ColumnSlot, ColumnWithItems, Item, ItemId};
use serde::Serialize;

/// Assign positions `0..n` to `ids` in order.
pub fn dense_positions<T, I>(ids: I) -> Vec<(T, i64)>
where
    I: IntoIterator<Item = T>,
{
    ids.into_iter()
        .enumerate()
        .map(|(index, id)| (id, index as i64))
        .collect()
}

/// Refuse any position assignment that touches a protected column.
pub fn assert_unprotected<C: AsRef<Column>>(
    assignments: &[(ColumnId, i64)],
    columns: &[C],
) -> Result<()> {
    for (id, _) in assignments {
        let protected = columns
            .iter()
            .map(AsRef::as_ref)
            .any(|c| &c.id == id && c.is_protected());
        if protected {
            return Err(KanbanError::ProtectedColumn { id: id.to_string() });
        }
    }
    Ok(())
}

/// Column positions to persist for a new column order.
///
/// Positions are dense over `order`; only columns whose stored slot differs
/// from the new one are returned. Protected columns in `order` are rejected.
pub fn plan_column_positions<C: AsRef<Column>>(
    columns: &[C],
    order: &[ColumnId],
) -> Result<Vec<(ColumnId, i64)>> {
    let assignments = dense_positions(order.iter().cloned());
    assert_unprotected(&assignments, columns)?;

    let mut changed = Vec::new();
    for (id, position) in assignments {
        let column = columns
            .iter()
            .map(AsRef::as_ref)
            .find(|c| c.id == id)
            .ok_or_else(|| KanbanError::ColumnNotFound { id: id.to_string() })?;
        if column.slot != ColumnSlot::Ordinary(position) {
            changed.push((id, position));
        }
    }
    Ok(changed)
}

/// A single item record change produced by a move
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemPositionUpdate {
    pub item_id: ItemId,
    pub column_id: ColumnId,
    pub position: i64,
}

/// Plan the item record updates for moving `item_id` to `new_position` in
/// `target_column_id`.
///
/// The destination column is renumbered densely after insertion and, for a
/// cross-column move, the source column densely after removal. Only items
/// whose column or position actually changes are returned. `new_position`
/// is clamped into the destination's valid range.
pub fn plan_item_move(
    columns: &[ColumnWithItems],
    item_id: &ItemId,
    target_column_id: &ColumnId,
    new_position: i64,
) -> Result<Vec<ItemPositionUpdate>> {
    let source = columns
        .iter()
        .find(|c| c.index_of(item_id).is_some())
        .ok_or_else(|| KanbanError::ItemNotFound {
            id: item_id.to_string(),
        })?;
    let target = columns
        .iter()
        .find(|c| &c.column.id == target_column_id)
        .ok_or_else(|| KanbanError::ColumnNotFound {
            id: target_column_id.to_string(),
        })?;

    let moved = source
        .items
        .iter()
        .find(|i| &i.id == item_id)
        .ok_or_else(|| KanbanError::ItemNotFound {
            id: item_id.to_string(),
        })?;

    let remaining: Vec<&Item> = source.items.iter().filter(|i| &i.id != item_id).collect();
    let same_column = source.column.id == target.column.id;

    let mut destination: Vec<&Item> = if same_column {
        remaining.clone()
    } else {
        target.items.iter().collect()
    };
    let insert_at = new_position.clamp(0, destination.len() as i64) as usize;
    destination.insert(insert_at, moved);

    let mut updates = renumber_into(&destination, target_column_id);
    if !same_column {
        updates.extend(renumber_into(&remaining, &source.column.id));
    }
    Ok(updates)
}

fn renumber_into(items: &[&Item], column_id: &ColumnId) -> Vec<ItemPositionUpdate> {
    dense_positions(items.iter().copied())
        .into_iter()
        .filter(|(item, position)| &item.column_id != column_id || item.position != *position)
        .map(|(item, position)| ItemPositionUpdate {
            item_id: item.id.clone(),
            column_id: column_id.clone(),
            position,
        })
        .collect()
}
