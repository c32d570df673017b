//! Optimistic projection of a column reorder, for display before the
//! persisted mutation is confirmed.

use crate::types::{ColumnId, ColumnSlot, ColumnWithItems};
use std::collections::HashSet;

/// Re-derive the board's column list in `new_order`.
///
/// Columns named in `new_order` come first, in that order, with dense
/// positions `0..n`. Every other column (normally just `Completed`) follows
/// in its original relative order with its slot untouched. Item arrays are
/// shared with the input, never copied or reordered.
///
/// An empty `new_order` is an aborted reorder and returns the input as is.
pub fn apply_optimistic_column_reorder(
    columns: &[ColumnWithItems],
    new_order: &[ColumnId],
) -> Vec<ColumnWithItems> {
    if columns.is_empty() {
        return Vec::new();
    }
    if new_order.is_empty() {
        return columns.to_vec();
    }

    let mut placed: HashSet<&ColumnId> = HashSet::with_capacity(new_order.len());
    let mut projected: Vec<ColumnWithItems> = Vec::with_capacity(columns.len());

    for id in new_order {
        let Some(column) = columns.iter().find(|c| &c.column.id == id) else {
            continue;
        };
        if !placed.insert(&column.column.id) {
            continue;
        }
        let mut column = column.clone();
        column.column.slot = ColumnSlot::Ordinary(projected.len() as i64);
        projected.push(column);
    }

    projected.extend(
        columns
            .iter()
            .filter(|c| !placed.contains(&c.column.id))
            .cloned(),
    );
    projected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardId, Column, Item};
    use proptest::prelude::*;
    use std::sync::Arc;

    fn board() -> BoardId {
        BoardId::from("board")
    }

    fn with_items(column: Column, count: usize) -> ColumnWithItems {
        let items = (0..count)
            .map(|i| {
                Item::new(board(), column.id.clone(), format!("{} {i}", column.name), i as i64)
                    .with_id(format!("{}-{i}", column.id))
            })
            .collect();
        ColumnWithItems::new(column, items)
    }

    fn fixture() -> Vec<ColumnWithItems> {
        vec![
            with_items(Column::now(board(), 0).with_id("now"), 1),
            with_items(Column::new(board(), "A", 1).with_id("a"), 2),
            with_items(Column::new(board(), "B", 2).with_id("b"), 0),
            with_items(Column::completed(board()).with_id("completed"), 3),
        ]
    }

    fn order(ids: &[&str]) -> Vec<ColumnId> {
        ids.iter().map(|id| ColumnId::from(*id)).collect()
    }

    #[test]
    fn test_reorders_and_renumbers_densely() {
        let cols = fixture();
        let projected = apply_optimistic_column_reorder(&cols, &order(&["b", "now", "a"]));

        let summary: Vec<(&str, ColumnSlot)> = projected
            .iter()
            .map(|c| (c.column.id.as_str(), c.column.slot))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("b", ColumnSlot::Ordinary(0)),
                ("now", ColumnSlot::Ordinary(1)),
                ("a", ColumnSlot::Ordinary(2)),
                ("completed", ColumnSlot::PinnedEnd),
            ]
        );
    }

    #[test]
    fn test_items_are_shared_not_copied() {
        let cols = fixture();
        let projected = apply_optimistic_column_reorder(&cols, &order(&["a", "b", "now"]));
        for column in &projected {
            let original = cols.iter().find(|c| c.column.id == column.column.id).unwrap();
            assert!(Arc::ptr_eq(&original.items, &column.items));
            assert_eq!(original.column.name, column.column.name);
        }
    }

    #[test]
    fn test_empty_inputs() {
        assert!(apply_optimistic_column_reorder(&[], &order(&["a"])).is_empty());

        let cols = fixture();
        assert_eq!(apply_optimistic_column_reorder(&cols, &[]), cols);
    }

    #[test]
    fn test_unmentioned_columns_keep_relative_order_at_tail() {
        let cols = fixture();
        let projected = apply_optimistic_column_reorder(&cols, &order(&["a"]));
        let ids: Vec<&str> = projected.iter().map(|c| c.column.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "now", "b", "completed"]);
        // Unmentioned columns keep their original slot
        assert_eq!(projected[1].column.slot, ColumnSlot::Ordinary(0));
        assert_eq!(projected[2].column.slot, ColumnSlot::Ordinary(2));
    }

    #[test]
    fn test_unknown_and_duplicate_ids_are_ignored() {
        let cols = fixture();
        let projected = apply_optimistic_column_reorder(&cols, &order(&["ghost", "b", "b", "a", "now"]));
        let ids: Vec<&str> = projected.iter().map(|c| c.column.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "now", "completed"]);
        assert_eq!(projected[2].column.slot, ColumnSlot::Ordinary(2));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let cols = fixture();
        let before = cols.clone();
        let _ = apply_optimistic_column_reorder(&cols, &order(&["b", "a", "now"]));
        assert_eq!(cols, before);
    }

    proptest! {
        #[test]
        fn prop_idempotent_and_item_preserving(perm in Just(vec!["now", "a", "b"]).prop_shuffle()) {
            let cols = fixture();
            let new_order = order(&perm);

            let once = apply_optimistic_column_reorder(&cols, &new_order);
            let twice = apply_optimistic_column_reorder(&once, &new_order);
            prop_assert_eq!(&once, &twice);

            prop_assert_eq!(once.len(), cols.len());
            prop_assert_eq!(once.last().map(|c| c.column.id.as_str()), Some("completed"));
            for column in &once {
                let original = cols.iter().find(|c| c.column.id == column.column.id).unwrap();
                prop_assert!(Arc::ptr_eq(&original.items, &column.items));
            }
        }
    }
}
