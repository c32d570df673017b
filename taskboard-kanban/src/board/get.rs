//! GetBoard command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Read the board with every column and its items
#[operation(
    verb = "get",
    noun = "board",
    description = "Get the board with its columns and items, in display order"
)]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GetBoard;

impl GetBoard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for GetBoard {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        let result = async {
            let view = ctx.read_board_view().await?;
            Ok(serde_json::to_value(&view)?)
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
