//! EnsureSystemColumns command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::types::{next_ordinary_position, Column, COMPLETED_COLUMN_NAME, NOW_COLUMN_NAME};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Create the `Now` and `Completed` columns on boards that predate them.
///
/// A missing `Now` lands after the last ordinary column so existing columns
/// keep their positions. A missing `Completed` is pinned to the end.
#[operation(
    verb = "ensure",
    noun = "system columns",
    description = "Create missing Now and Completed columns"
)]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EnsureSystemColumns;

impl EnsureSystemColumns {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for EnsureSystemColumns {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        let start = std::time::Instant::now();
        let input = serde_json::to_value(self).unwrap_or_default();

        let result = async {
            let board = ctx.read_board().await?;
            let _lock = ctx.lock().await?;
            let columns = ctx.read_all_columns().await?;

            let mut created = Vec::new();
            if !columns.iter().any(|c| c.name == NOW_COLUMN_NAME) {
                let after_last = next_ordinary_position(columns.iter().map(|c| c.slot));
                created.push(Column::now(board.id.clone(), after_last));
            }
            if !columns.iter().any(|c| c.name == COMPLETED_COLUMN_NAME) {
                created.push(Column::completed(board.id.clone()));
            }

            for column in &created {
                ctx.write_column(column).await?;
                tracing::info!(column = %column.id, name = %column.name, "created system column");
            }

            Ok(serde_json::json!({
                "created": created,
                "changed": !created.is_empty(),
            }))
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        match result {
            Ok(value) if value["changed"] == false => ExecutionResult::Unlogged { value },
            other => ExecutionResult::from_outcome(self.op_string(), input, other, duration_ms),
        }
    }
}
