//! End-to-end drag-and-drop flows against a file-backed board

use taskboard_kanban::board::{GetBoard, InitBoard};
use taskboard_kanban::column::{AddColumn, ReorderColumns};
use taskboard_kanban::item::{AddItem, MoveItem};
use taskboard_kanban::{
    apply_optimistic_column_reorder, calculate_new_column_order, BoardView, ClosestEdge,
    ColumnId, ColumnSlot, DropTarget, Execute, ItemId, KanbanContext, KanbanOperationProcessor,
    OperationProcessor,
};
use tempfile::TempDir;

async fn board(columns: &[&str]) -> (TempDir, KanbanContext) {
    let temp = TempDir::new().unwrap();
    let ctx = KanbanContext::new(temp.path().join(".taskboard"));
    InitBoard::new("Integration")
        .with_columns(columns.iter().copied())
        .execute(&ctx)
        .await
        .into_result()
        .unwrap();
    (temp, ctx)
}

async fn view(ctx: &KanbanContext) -> BoardView {
    let value = GetBoard::new().execute(ctx).await.into_result().unwrap();
    serde_json::from_value(value).unwrap()
}

fn column_names(view: &BoardView) -> Vec<&str> {
    view.columns.iter().map(|c| c.column.name.as_str()).collect()
}

fn id_of(view: &BoardView, name: &str) -> ColumnId {
    view.columns
        .iter()
        .find(|c| c.column.name == name)
        .map(|c| c.column.id.clone())
        .unwrap()
}

#[tokio::test]
async fn optimistic_projection_matches_persisted_order() {
    let (_temp, ctx) = board(&["To Do", "Doing", "Review"]).await;
    let before = view(&ctx).await;

    let dragged = id_of(&before, "Review");
    let target = id_of(&before, "To Do");

    // What a client renders immediately
    let order = calculate_new_column_order(&before.columns, &dragged, &target, false);
    let projected = apply_optimistic_column_reorder(&before.columns, &order);

    // What the store ends up with
    ReorderColumns::new(dragged, target)
        .execute(&ctx)
        .await
        .into_result()
        .unwrap();
    let after = view(&ctx).await;

    let projected_names: Vec<&str> = projected.iter().map(|c| c.column.name.as_str()).collect();
    assert_eq!(projected_names, column_names(&after));
    assert_eq!(
        column_names(&after),
        vec!["Now", "Review", "To Do", "Doing", "Completed"]
    );
}

#[tokio::test]
async fn completed_stays_last_through_every_reorder() {
    let (_temp, ctx) = board(&["A", "B"]).await;
    AddColumn::new("C").execute(&ctx).await.into_result().unwrap();

    let names = ["Now", "A", "B", "C"];
    for dragged in names {
        for target in names {
            for drop_after in [false, true] {
                let current = view(&ctx).await;
                let mut op = ReorderColumns::new(id_of(&current, dragged), id_of(&current, target));
                if drop_after {
                    op = op.after();
                }
                op.execute(&ctx).await.into_result().unwrap();

                let after = view(&ctx).await;
                let last = after.columns.last().unwrap();
                assert_eq!(last.column.name, "Completed");
                assert_eq!(last.column.slot, ColumnSlot::PinnedEnd);

                let positions: Vec<Option<i64>> = after.columns[..after.columns.len() - 1]
                    .iter()
                    .map(|c| c.column.slot.position())
                    .collect();
                let expected: Vec<Option<i64>> = (0..4).map(Some).collect();
                assert_eq!(positions, expected, "positions stay dense");
            }
        }
    }
}

#[tokio::test]
async fn card_moves_are_audited_and_noops_are_not() {
    let (_temp, ctx) = board(&["To Do", "Doing"]).await;
    let processor = KanbanOperationProcessor::with_actor("integration");
    let start = view(&ctx).await;
    let todo = id_of(&start, "To Do");
    let doing = id_of(&start, "Doing");

    let mut ids = Vec::new();
    for name in ["first", "second"] {
        let value = processor
            .process(&AddItem::new(todo.clone(), name), &ctx)
            .await
            .unwrap();
        ids.push(ItemId::from(value["id"].as_str().unwrap()));
    }
    let logged_before = ctx.read_activity(None).await.unwrap().len();

    // Dropping "second" on the bottom edge of "first" leaves it where it is
    let noop = MoveItem::new(
        ids[1].clone(),
        DropTarget::item(ids[0].clone(), todo.clone(), Some(ClosestEdge::Bottom)),
    );
    let value = processor.process(&noop, &ctx).await.unwrap();
    assert_eq!(value["changed"], false);
    assert_eq!(ctx.read_activity(None).await.unwrap().len(), logged_before);

    // Dragging "first" across to Doing is logged and renumbers To Do
    processor
        .process(&MoveItem::new(ids[0].clone(), DropTarget::column(doing.clone())), &ctx)
        .await
        .unwrap();
    let activity = ctx.read_activity(None).await.unwrap();
    assert_eq!(activity.len(), logged_before + 1);
    assert_eq!(activity[0].op, "move item");
    assert_eq!(activity[0].actor.as_deref(), Some("integration"));

    let after = view(&ctx).await;
    let todo_items = &after.column(&todo).unwrap().items;
    let doing_items = &after.column(&doing).unwrap().items;
    assert_eq!(todo_items.len(), 1);
    assert_eq!(todo_items[0].id, ids[1]);
    assert_eq!(todo_items[0].position, 0);
    assert_eq!(doing_items[0].id, ids[0]);
}

#[tokio::test]
async fn legacy_sentinel_position_reads_as_pinned_end() {
    let (_temp, ctx) = board(&["To Do"]).await;
    let current = view(&ctx).await;
    let completed = id_of(&current, "Completed");

    // Boards written by older releases stored the end slot as a large integer
    let path = ctx.column_path(&completed);
    let yaml = std::fs::read_to_string(&path).unwrap();
    std::fs::write(&path, yaml.replace("position: end", "position: 999999")).unwrap();

    let reread = ctx.read_column(&completed).await.unwrap();
    assert_eq!(reread.slot, ColumnSlot::PinnedEnd);
    assert_eq!(column_names(&view(&ctx).await).last(), Some(&"Completed"));
}
