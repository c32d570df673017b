//! DeleteColumn command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Delete an empty ordinary column
#[operation(
    verb = "delete",
    noun = "column",
    description = "Delete an ordinary column (fails if it has items)"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteColumn {
    pub id: ColumnId,
}

impl DeleteColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for DeleteColumn {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        let start = std::time::Instant::now();
        let input = serde_json::to_value(self).unwrap_or_default();

        let result = async {
            let _lock = ctx.lock().await?;
            let column = ctx.read_column(&self.id).await?;

            if column.is_system {
                return Err(KanbanError::system_column(&column.name, "deleted"));
            }

            let items = ctx.read_items_in_column(&self.id).await?;
            if !items.is_empty() {
                return Err(KanbanError::ColumnNotEmpty {
                    id: self.id.to_string(),
                    count: items.len(),
                });
            }

            ctx.delete_column_file(&self.id).await?;
            tracing::info!(column = %column.id, name = %column.name, "deleted column");

            Ok(serde_json::json!({
                "deleted": true,
                "id": column.id,
                "name": column.name,
            }))
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::from_outcome(self.op_string(), input, result, duration_ms)
    }
}
