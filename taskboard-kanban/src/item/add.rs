//! AddItem command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::types::{next_item_position, ColumnId, Item};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Add a new item at the bottom of a column
#[operation(verb = "add", noun = "item", description = "Add a new item to a column")]
#[derive(Debug, Deserialize, Serialize)]
pub struct AddItem {
    pub column_id: ColumnId,
    pub name: String,
    pub description: Option<String>,
}

impl AddItem {
    pub fn new(column_id: impl Into<ColumnId>, name: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for AddItem {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        let start = std::time::Instant::now();
        let input = serde_json::to_value(self).unwrap_or_default();

        let result = async {
            if self.name.trim().is_empty() {
                return Err(KanbanError::missing_field("name"));
            }

            let _lock = ctx.lock().await?;
            let column = ctx.read_column(&self.column_id).await?;
            let siblings = ctx.read_items_in_column(&column.id).await?;

            let mut item = Item::new(
                column.board_id,
                column.id,
                self.name.trim(),
                next_item_position(&siblings),
            );
            if let Some(desc) = &self.description {
                item = item.with_description(desc);
            }

            ctx.write_item(&item).await?;
            tracing::info!(item = %item.id, column = %item.column_id, position = item.position, "added item");

            Ok(serde_json::to_value(&item)?)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::from_outcome(self.op_string(), input, result, duration_ms)
    }
}
