//! DeleteItem command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::reorder::dense_positions;
use crate::types::ItemId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Delete an item and close the gap it leaves in its column
#[operation(verb = "delete", noun = "item", description = "Delete an item")]
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteItem {
    pub id: ItemId,
}

impl DeleteItem {
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for DeleteItem {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        let start = std::time::Instant::now();
        let input = serde_json::to_value(self).unwrap_or_default();

        let result = async {
            let _lock = ctx.lock().await?;
            let item = ctx.read_item(&self.id).await?;
            ctx.delete_item_file(&self.id).await?;

            let remaining = ctx.read_items_in_column(&item.column_id).await?;
            let mut renumbered = 0;
            for (mut sibling, position) in dense_positions(remaining) {
                if sibling.position != position {
                    sibling.position = position;
                    ctx.write_item(&sibling).await?;
                    renumbered += 1;
                }
            }
            tracing::info!(item = %item.id, column = %item.column_id, renumbered, "deleted item");

            Ok(serde_json::json!({
                "deleted": true,
                "id": item.id,
                "column_id": item.column_id,
            }))
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::from_outcome(self.op_string(), input, result, duration_ms)
    }
}
