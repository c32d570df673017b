//! ListColumns command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// List all columns in display order
#[operation(verb = "list", noun = "columns", description = "List all columns in display order")]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListColumns;

impl ListColumns {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for ListColumns {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        let result = async {
            ctx.read_board().await?;
            let columns = ctx.read_all_columns().await?;
            Ok(serde_json::json!({
                "columns": columns,
                "count": columns.len(),
            }))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::InitBoard;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_columns_in_display_order() {
        let temp = TempDir::new().unwrap();
        let ctx = KanbanContext::new(temp.path().join(".taskboard"));
        InitBoard::new("Test")
            .with_columns(["To Do", "Doing"])
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();

        let result = ListColumns::new().execute(&ctx).await;
        assert!(!result.should_log());
        let value = result.into_result().unwrap();

        assert_eq!(value["count"], 4);
        let names: Vec<&str> = value["columns"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Now", "To Do", "Doing", "Completed"]);
    }
}
