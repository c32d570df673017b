//! GetColumn command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Get a column by ID, with its items
#[operation(verb = "get", noun = "column", description = "Get a column and its items by ID")]
#[derive(Debug, Deserialize, Serialize)]
pub struct GetColumn {
    pub id: ColumnId,
}

impl GetColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for GetColumn {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        let result = async {
            let column = ctx.read_column(&self.id).await?;
            let items = ctx.read_items_in_column(&self.id).await?;
            let mut value = serde_json::to_value(&column)?;
            value["item_count"] = items.len().into();
            value["items"] = serde_json::to_value(&items)?;
            Ok(value)
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
