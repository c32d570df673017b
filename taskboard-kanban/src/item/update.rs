//! UpdateItem command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::types::ItemId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Update an item's name or description. Placement changes go through `MoveItem`.
#[operation(verb = "update", noun = "item", description = "Update an item's name or description")]
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateItem {
    pub id: ItemId,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateItem {
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for UpdateItem {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        let start = std::time::Instant::now();
        let input = serde_json::to_value(self).unwrap_or_default();

        let result = async {
            let _lock = ctx.lock().await?;
            let mut item = ctx.read_item(&self.id).await?;

            if let Some(name) = &self.name {
                let name = name.trim();
                if name.is_empty() {
                    return Err(KanbanError::invalid_value("name", "cannot be empty"));
                }
                item.name = name.to_string();
            }
            if let Some(description) = &self.description {
                item.description = description.clone();
            }

            item.touch();
            ctx.write_item(&item).await?;
            tracing::info!(item = %item.id, "updated item");

            Ok(serde_json::to_value(&item)?)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::from_outcome(self.op_string(), input, result, duration_ms)
    }
}
