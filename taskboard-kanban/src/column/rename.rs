//! RenameColumn command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::types::{is_reserved_name, ColumnId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Rename an ordinary column
#[operation(verb = "rename", noun = "column", description = "Rename an ordinary column")]
#[derive(Debug, Deserialize, Serialize)]
pub struct RenameColumn {
    pub id: ColumnId,
    pub name: String,
}

impl RenameColumn {
    pub fn new(id: impl Into<ColumnId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for RenameColumn {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        let start = std::time::Instant::now();
        let input = serde_json::to_value(self).unwrap_or_default();

        let result = async {
            let name = self.name.trim();
            if name.is_empty() {
                return Err(KanbanError::missing_field("name"));
            }

            let _lock = ctx.lock().await?;
            let mut column = ctx.read_column(&self.id).await?;

            if column.is_system {
                return Err(KanbanError::system_column(&column.name, "renamed"));
            }
            if is_reserved_name(name) {
                return Err(KanbanError::ReservedName {
                    name: name.to_string(),
                });
            }

            let previous = std::mem::replace(&mut column.name, name.to_string());
            ctx.write_column(&column).await?;
            tracing::info!(column = %column.id, from = %previous, to = %column.name, "renamed column");

            Ok(serde_json::to_value(&column)?)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::from_outcome(self.op_string(), input, result, duration_ms)
    }
}
