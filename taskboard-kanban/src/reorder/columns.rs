//! Column reorder engine: where does a dragged column land among its siblings.

use crate::types::{sort_columns, Column, ColumnId};
use tracing::{debug, warn};

/// Compute the new left-to-right order of a board's reorderable columns after
/// `dragged_id` is dropped before (or, with `drop_after`, after) `target_id`.
///
/// The protected `Completed` column is filtered out first and never appears
/// in the result. `Now` is an ordinary participant. Input order does not
/// matter; columns are sorted by slot before the move is applied.
///
/// Fallbacks, neither of which is an error:
/// - dragged column not among the reorderable columns: the current order is
///   returned unchanged.
/// - target column not found once the dragged column is removed: the order
///   *without* the dragged column is returned, and a warning is logged. This
///   usually means another session changed the board underneath the drag.
pub fn calculate_new_column_order<C: AsRef<Column>>(
    columns: &[C],
    dragged_id: &ColumnId,
    target_id: &ColumnId,
    drop_after: bool,
) -> Vec<ColumnId> {
    let mut reorderable: Vec<&Column> = columns
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| !c.is_protected())
        .collect();
    sort_columns(&mut reorderable);

    let ids = |cols: &[&Column]| cols.iter().map(|c| c.id.clone()).collect::<Vec<_>>();

    if reorderable.len() <= 1 || dragged_id == target_id {
        return ids(&reorderable);
    }

    let Some(dragged_index) = reorderable.iter().position(|c| &c.id == dragged_id) else {
        debug!(dragged = %dragged_id, "dragged column is not reorderable, keeping order");
        return ids(&reorderable);
    };

    let mut without_dragged = reorderable;
    let dragged = without_dragged.remove(dragged_index);

    let Some(target_index) = without_dragged.iter().position(|c| &c.id == target_id) else {
        warn!(
            dragged = %dragged_id,
            target = %target_id,
            "drop target column not found, dragged column left out of the new order"
        );
        return ids(&without_dragged);
    };

    let insert_at = if drop_after {
        target_index + 1
    } else {
        target_index
    };

    let mut order = ids(&without_dragged);
    order.insert(insert_at, dragged.id.clone());

    debug!(
        dragged = %dragged_id,
        target = %target_id,
        drop_after,
        ?order,
        "computed column order"
    );
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardId;
    use proptest::prelude::*;

    fn board() -> BoardId {
        BoardId::from_string("board")
    }

    fn four_columns() -> Vec<Column> {
        (0..4)
            .map(|i| Column::new(board(), format!("Col {}", i + 1), i).with_id(format!("col-{}", i + 1)))
            .collect()
    }

    fn system_board() -> Vec<Column> {
        vec![
            Column::now(board(), 0).with_id("sys-now"),
            Column::new(board(), "Col 1", 1).with_id("col-1"),
            Column::new(board(), "Col 2", 2).with_id("col-2"),
            Column::completed(board()).with_id("sys-completed"),
        ]
    }

    fn as_strs(ids: &[ColumnId]) -> Vec<&str> {
        ids.iter().map(|id| id.as_str()).collect()
    }

    #[test]
    fn test_insert_before_target() {
        let order = calculate_new_column_order(&four_columns(), &"col-4".into(), &"col-2".into(), false);
        assert_eq!(as_strs(&order), vec!["col-1", "col-4", "col-2", "col-3"]);
    }

    #[test]
    fn test_insert_after_target() {
        let order = calculate_new_column_order(&four_columns(), &"col-1".into(), &"col-3".into(), true);
        assert_eq!(as_strs(&order), vec!["col-2", "col-3", "col-1", "col-4"]);
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        let mut shuffled = four_columns();
        shuffled.reverse();
        let order = calculate_new_column_order(&shuffled, &"col-3".into(), &"col-3".into(), true);
        assert_eq!(as_strs(&order), vec!["col-1", "col-2", "col-3", "col-4"]);
    }

    #[test]
    fn test_empty_and_single() {
        let none: Vec<Column> = Vec::new();
        assert!(calculate_new_column_order(&none, &"a".into(), &"b".into(), false).is_empty());

        let one = vec![Column::new(board(), "Only", 0).with_id("only")];
        let order = calculate_new_column_order(&one, &"only".into(), &"x".into(), false);
        assert_eq!(as_strs(&order), vec!["only"]);
    }

    #[test]
    fn test_completed_never_in_output() {
        let cols = system_board();
        let order = calculate_new_column_order(&cols, &"col-2".into(), &"sys-now".into(), false);
        assert_eq!(as_strs(&order), vec!["col-2", "sys-now", "col-1"]);
    }

    #[test]
    fn test_now_is_freely_reorderable() {
        let cols = system_board();
        let order = calculate_new_column_order(&cols, &"sys-now".into(), &"col-2".into(), true);
        assert_eq!(as_strs(&order), vec!["col-1", "col-2", "sys-now"]);
    }

    #[test]
    fn test_dragging_completed_keeps_order() {
        let cols = system_board();
        let order = calculate_new_column_order(&cols, &"sys-completed".into(), &"col-1".into(), false);
        assert_eq!(as_strs(&order), vec!["sys-now", "col-1", "col-2"]);
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_stale_target_drops_dragged_and_warns() {
        let cols = four_columns();
        let order = calculate_new_column_order(&cols, &"col-2".into(), &"vanished".into(), false);
        assert_eq!(as_strs(&order), vec!["col-1", "col-3", "col-4"]);
        assert!(logs_contain("drop target column not found"));
    }

    #[test]
    fn test_targeting_completed_uses_fallback() {
        let cols = system_board();
        let order = calculate_new_column_order(&cols, &"col-1".into(), &"sys-completed".into(), false);
        assert_eq!(as_strs(&order), vec!["sys-now", "col-2"]);
    }

    #[test]
    fn test_unsorted_input_sorted_by_slot() {
        let mut cols = system_board();
        cols.swap(0, 3);
        cols.swap(1, 2);
        let order = calculate_new_column_order(&cols, &"col-1".into(), &"col-1".into(), false);
        assert_eq!(as_strs(&order), vec!["sys-now", "col-1", "col-2"]);
    }

    proptest! {
        #[test]
        fn prop_output_is_permutation_of_reorderable(
            n in 2usize..12,
            dragged in 0usize..12,
            target in 0usize..12,
            drop_after in any::<bool>(),
        ) {
            let mut cols: Vec<Column> = (0..n)
                .map(|i| Column::new(board(), format!("c{i}"), (n - i) as i64 * 3).with_id(format!("c{i}")))
                .collect();
            cols.push(Column::completed(board()).with_id("completed"));

            let dragged = ColumnId::from_string(format!("c{}", dragged % n));
            let target = ColumnId::from_string(format!("c{}", target % n));
            let order = calculate_new_column_order(&cols, &dragged, &target, drop_after);

            let mut got: Vec<String> = order.iter().map(|id| id.to_string()).collect();
            got.sort();
            let mut want: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
            want.sort();
            prop_assert_eq!(got, want);
            prop_assert!(!order.contains(&ColumnId::from("completed")));
            prop_assert_eq!(order.iter().filter(|id| **id == dragged).count(), 1);
        }

        #[test]
        fn prop_drop_on_self_matches_sorted_order(n in 1usize..10, pick in 0usize..10) {
            let cols: Vec<Column> = (0..n)
                .map(|i| Column::new(board(), format!("c{i}"), ((i * 7) % 5) as i64).with_id(format!("c{i}")))
                .collect();
            let id = ColumnId::from_string(format!("c{}", pick % n));

            let mut sorted = cols.clone();
            sort_columns(&mut sorted);
            let expected: Vec<ColumnId> = sorted.into_iter().map(|c| c.id).collect();

            prop_assert_eq!(calculate_new_column_order(&cols, &id, &id, false), expected);
        }
    }
}
