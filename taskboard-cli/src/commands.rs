//! Dispatch parsed commands to kanban operations

use crate::cli::{ColumnCommand, Commands, ItemCommand, MoveArgs};
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use taskboard_kanban::board::{GetBoard, InitBoard};
use taskboard_kanban::column::{
    AddColumn, DeleteColumn, EnsureSystemColumns, GetColumn, ListColumns, RenameColumn,
    ReorderColumns,
};
use taskboard_kanban::item::{AddItem, DeleteItem, GetItem, MoveItem, UpdateItem};
use taskboard_kanban::{
    DropTarget, Execute, KanbanConfig, KanbanContext, KanbanError, KanbanOperationProcessor,
    Operation, OperationProcessor,
};

/// Run one command against the board found from `cwd` and return its JSON result
pub async fn run(
    command: Commands,
    config: &KanbanConfig,
    processor: &KanbanOperationProcessor,
    cwd: &Path,
) -> Result<Value> {
    let ctx = match command {
        Commands::Init {
            name,
            description,
            columns,
        } => return run_init(name, description, columns, config, processor, cwd).await,
        _ => KanbanContext::find(cwd, &config.board_dir).with_context(|| {
            format!("no {} board found from {}", config.board_dir, cwd.display())
        })?,
    };
    tracing::debug!(root = %ctx.root().display(), "using board");

    match command {
        Commands::Init { .. } => Err(anyhow::anyhow!("board already exists")),
        Commands::Show => process(processor, &GetBoard::new(), &ctx).await,
        Commands::Activity { limit } => {
            let entries = ctx.read_activity(limit).await?;
            Ok(serde_json::to_value(entries)?)
        }
        Commands::Column(command) => run_column(command, processor, &ctx).await,
        Commands::Item(command) => run_item(command, processor, &ctx).await,
    }
}

async fn run_init(
    name: String,
    description: Option<String>,
    columns: Vec<String>,
    config: &KanbanConfig,
    processor: &KanbanOperationProcessor,
    cwd: &Path,
) -> Result<Value> {
    let ctx = KanbanContext::new(config.board_path(cwd));
    let columns = if columns.is_empty() {
        config.default_columns.clone()
    } else {
        columns
    };
    let mut op = InitBoard::new(name).with_columns(columns);
    if let Some(description) = description {
        op = op.with_description(description);
    }
    process(processor, &op, &ctx).await
}

async fn run_column(
    command: ColumnCommand,
    processor: &KanbanOperationProcessor,
    ctx: &KanbanContext,
) -> Result<Value> {
    match command {
        ColumnCommand::List => process(processor, &ListColumns::new(), ctx).await,
        ColumnCommand::Get { id } => process(processor, &GetColumn::new(id), ctx).await,
        ColumnCommand::Add { name, position } => {
            let mut op = AddColumn::new(name);
            if let Some(position) = position {
                op = op.with_position(position);
            }
            process(processor, &op, ctx).await
        }
        ColumnCommand::Rename { id, name } => {
            process(processor, &RenameColumn::new(id, name), ctx).await
        }
        ColumnCommand::Delete { id } => process(processor, &DeleteColumn::new(id), ctx).await,
        ColumnCommand::Move {
            dragged,
            target,
            after,
        } => {
            let mut op = ReorderColumns::new(dragged, target);
            if after {
                op = op.after();
            }
            process(processor, &op, ctx).await
        }
        ColumnCommand::Ensure => process(processor, &EnsureSystemColumns::new(), ctx).await,
    }
}

async fn run_item(
    command: ItemCommand,
    processor: &KanbanOperationProcessor,
    ctx: &KanbanContext,
) -> Result<Value> {
    match command {
        ItemCommand::Add {
            column,
            name,
            description,
        } => {
            let mut op = AddItem::new(column, name);
            if let Some(description) = description {
                op = op.with_description(description);
            }
            process(processor, &op, ctx).await
        }
        ItemCommand::Get { id } => process(processor, &GetItem::new(id), ctx).await,
        ItemCommand::Update {
            id,
            name,
            description,
        } => {
            let mut op = UpdateItem::new(id);
            if let Some(name) = name {
                op = op.with_name(name);
            }
            if let Some(description) = description {
                op = op.with_description(description);
            }
            process(processor, &op, ctx).await
        }
        ItemCommand::Delete { id } => process(processor, &DeleteItem::new(id), ctx).await,
        ItemCommand::Move(args) => {
            let MoveArgs {
                id,
                column,
                onto,
                edge,
            } = args;
            let target = match onto {
                Some(item_id) => DropTarget::item(item_id, column, edge.map(Into::into)),
                None => DropTarget::column(column),
            };
            process(processor, &MoveItem::new(id, target), ctx).await
        }
    }
}

async fn process<O>(
    processor: &KanbanOperationProcessor,
    op: &O,
    ctx: &KanbanContext,
) -> Result<Value>
where
    O: Execute<KanbanContext, KanbanError>,
{
    let value = processor
        .process(op, ctx)
        .await
        .with_context(|| format!("{} failed", op.op_string()))?;
    Ok(value)
}
