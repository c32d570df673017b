//! Benchmarks for the reorder engines on boards of increasing size

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use taskboard_kanban::reorder::plan_item_move;
use taskboard_kanban::{
    apply_optimistic_column_reorder, calculate_item_placement, calculate_new_column_order,
    BoardId, ClosestEdge, Column, ColumnWithItems, DropTarget, Item,
};

/// A board with `columns` ordinary columns of `items` cards each, plus Completed
fn board(columns: usize, items: usize) -> Vec<ColumnWithItems> {
    let board_id = BoardId::from("bench");
    let mut result: Vec<ColumnWithItems> = (0..columns)
        .map(|c| {
            let column = Column::new(board_id.clone(), format!("col-{c}"), c as i64)
                .with_id(format!("col-{c}"));
            let cards = (0..items)
                .map(|i| {
                    Item::new(board_id.clone(), column.id.clone(), format!("card-{i}"), i as i64)
                        .with_id(format!("col-{c}-card-{i}"))
                })
                .collect();
            ColumnWithItems::new(column, cards)
        })
        .collect();
    result.push(ColumnWithItems::new(
        Column::completed(board_id).with_id("completed"),
        Vec::new(),
    ));
    result
}

fn bench_column_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("column_reorder");
    for size in [4usize, 16, 64] {
        let columns = board(size, 8);
        let dragged = columns[size - 1].column.id.clone();
        let target = columns[0].column.id.clone();

        group.bench_with_input(BenchmarkId::new("calculate", size), &columns, |b, columns| {
            b.iter(|| calculate_new_column_order(black_box(columns), &dragged, &target, false))
        });

        let order = calculate_new_column_order(&columns, &dragged, &target, false);
        group.bench_with_input(BenchmarkId::new("project", size), &columns, |b, columns| {
            b.iter(|| apply_optimistic_column_reorder(black_box(columns), &order))
        });
    }
    group.finish();
}

fn bench_item_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("item_move");
    for items in [8usize, 64, 512] {
        let columns = board(4, items);
        let source = columns[0].items[0].clone();
        let target = DropTarget::item(
            columns[1].items[items / 2].id.clone(),
            columns[1].column.id.clone(),
            Some(ClosestEdge::Bottom),
        );

        group.bench_with_input(BenchmarkId::new("place_and_plan", items), &columns, |b, columns| {
            b.iter(|| {
                let placement = calculate_item_placement(&source, black_box(&target), columns);
                plan_item_move(
                    columns,
                    &source.id,
                    &placement.target_column_id,
                    placement.new_position,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_column_reorder, bench_item_move);
criterion_main!(benches);
