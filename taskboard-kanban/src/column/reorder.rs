//! ReorderColumns command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::reorder::{calculate_new_column_order, plan_column_positions};
use crate::types::{sort_columns, ColumnId, ColumnSlot};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Drop a dragged column before or after a target column
#[operation(
    verb = "reorder",
    noun = "columns",
    description = "Move a column before or after another column"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct ReorderColumns {
    pub dragged_id: ColumnId,
    pub target_id: ColumnId,
    #[serde(default)]
    pub drop_after: bool,
}

impl ReorderColumns {
    pub fn new(dragged_id: impl Into<ColumnId>, target_id: impl Into<ColumnId>) -> Self {
        Self {
            dragged_id: dragged_id.into(),
            target_id: target_id.into(),
            drop_after: false,
        }
    }

    pub fn after(mut self) -> Self {
        self.drop_after = true;
        self
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for ReorderColumns {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        let start = std::time::Instant::now();
        let input = serde_json::to_value(self).unwrap_or_default();

        let result = async {
            ctx.read_board().await?;
            let _lock = ctx.lock().await?;
            let mut columns = ctx.read_all_columns().await?;

            let order = calculate_new_column_order(
                &columns,
                &self.dragged_id,
                &self.target_id,
                self.drop_after,
            );

            let changes = if self.dragged_id == self.target_id {
                Vec::new()
            } else if order.contains(&self.dragged_id) {
                plan_column_positions(&columns, &order)?
            } else {
                tracing::warn!(
                    dragged = %self.dragged_id,
                    "dragged column missing from computed order, nothing persisted"
                );
                Vec::new()
            };

            for (id, position) in &changes {
                if let Some(column) = columns.iter_mut().find(|c| &c.id == id) {
                    column.slot = ColumnSlot::Ordinary(*position);
                    ctx.write_column(column).await?;
                }
            }
            if !changes.is_empty() {
                tracing::info!(
                    dragged = %self.dragged_id,
                    target = %self.target_id,
                    updated = changes.len(),
                    "reordered columns"
                );
            }

            sort_columns(&mut columns);
            Ok(serde_json::json!({
                "changed": !changes.is_empty(),
                "order": columns.iter().map(|c| &c.id).collect::<Vec<_>>(),
                "columns": columns,
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
