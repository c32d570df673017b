//! GetItem command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::types::ItemId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Get an item by ID
#[operation(verb = "get", noun = "item", description = "Get an item by ID")]
#[derive(Debug, Deserialize, Serialize)]
pub struct GetItem {
    pub id: ItemId,
}

impl GetItem {
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for GetItem {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        let result = async {
            let item = ctx.read_item(&self.id).await?;
            Ok(serde_json::to_value(&item)?)
        }
        .await;

        match result {
            Ok(value) => ExecutionResult::Unlogged { value },
            Err(error) => ExecutionResult::Failed {
                error,
                log_entry: None,
            },
        }
    }
}
