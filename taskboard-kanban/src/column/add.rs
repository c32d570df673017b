//! AddColumn command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::types::{is_reserved_name, next_ordinary_position, Column, PINNED_END_SENTINEL};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Add a new ordinary column to the board
#[operation(
    verb = "add",
    noun = "column",
    description = "Add a new column after the last ordinary column"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct AddColumn {
    /// The column display name
    pub name: String,
    /// Explicit position; defaults to one past the last ordinary column
    pub position: Option<i64>,
}

impl AddColumn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: None,
        }
    }

    pub fn with_position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for AddColumn {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        let start = std::time::Instant::now();
        let input = serde_json::to_value(self).unwrap_or_default();

        let result = async {
            let name = self.name.trim();
            if name.is_empty() {
                return Err(KanbanError::missing_field("name"));
            }
            if is_reserved_name(name) {
                return Err(KanbanError::ReservedName {
                    name: name.to_string(),
                });
            }

            let board = ctx.read_board().await?;
            let _lock = ctx.lock().await?;

            let columns = ctx.read_all_columns().await?;
            let position = match self.position {
                Some(PINNED_END_SENTINEL) => {
                    return Err(KanbanError::invalid_value(
                        "position",
                        format!("{PINNED_END_SENTINEL} is reserved for the end column"),
                    ));
                }
                Some(position) => {
                    let taken = columns.iter().find(|c| c.slot.position() == Some(position));
                    if let Some(taken) = taken {
                        return Err(KanbanError::invalid_value(
                            "position",
                            format!("{position} is already used by column '{}'", taken.name),
                        ));
                    }
                    position
                }
                None => next_ordinary_position(columns.iter().map(|c| c.slot)),
            };

            let column = Column::new(board.id, name, position);
            ctx.write_column(&column).await?;
            tracing::info!(column = %column.id, position, "added column");

            Ok(serde_json::to_value(&column)?)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::from_outcome(self.op_string(), input, result, duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::InitBoard;
    use crate::types::ColumnSlot;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, KanbanContext) {
        let temp = TempDir::new().unwrap();
        let ctx = KanbanContext::new(temp.path().join(".taskboard"));
        InitBoard::new("Test")
            .with_columns(["To Do"])
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        (temp, ctx)
    }

    #[tokio::test]
    async fn test_add_column_appends_after_ordinary_columns() {
        let (_temp, ctx) = setup().await;

        let result = AddColumn::new("Review").execute(&ctx).await;
        assert!(result.should_log());
        let value = result.into_result().unwrap();
        assert_eq!(value["name"], "Review");
        assert_eq!(value["position"], 2);

        let columns = ctx.read_all_columns().await.unwrap();
        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Now", "To Do", "Review", "Completed"]);
    }

    #[tokio::test]
    async fn test_add_column_explicit_position() {
        let (_temp, ctx) = setup().await;

        let value = AddColumn::new("Backlog")
            .with_position(-1)
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert_eq!(value["position"], -1);

        let columns = ctx.read_all_columns().await.unwrap();
        assert_eq!(columns[0].name, "Backlog");
    }

    #[tokio::test]
    async fn test_add_column_rejects_taken_position() {
        let (_temp, ctx) = setup().await;

        // Now sits at 0, To Do at 1
        let result = AddColumn::new("Review")
            .with_position(1)
            .execute(&ctx)
            .await
            .into_result();
        assert!(matches!(result, Err(KanbanError::InvalidValue { .. })));
        assert_eq!(ctx.read_all_columns().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_add_column_rejects_end_sentinel_position() {
        let (_temp, ctx) = setup().await;
        let result = AddColumn::new("Review")
            .with_position(PINNED_END_SENTINEL)
            .execute(&ctx)
            .await
            .into_result();
        assert!(matches!(result, Err(KanbanError::InvalidValue { .. })));
    }

    #[tokio::test]
    async fn test_add_column_after_legacy_now_survives_reload() {
        let (_temp, ctx) = setup().await;
        let mut now = ctx.read_all_columns().await.unwrap().remove(0);
        now.slot = ColumnSlot::Ordinary(999_998);
        ctx.write_column(&now).await.unwrap();

        let value = AddColumn::new("Review")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        let id = crate::types::ColumnId::from(value["id"].as_str().unwrap());

        let review = ctx.read_column(&id).await.unwrap();
        assert!(matches!(review.slot, ColumnSlot::Ordinary(p) if p > 999_998));

        let columns = ctx.read_all_columns().await.unwrap();
        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["To Do", "Now", "Review", "Completed"]);
    }

    #[tokio::test]
    async fn test_add_column_reserved_name() {
        let (_temp, ctx) = setup().await;

        for name in ["Completed", "now", "  NOW "] {
            let result = AddColumn::new(name).execute(&ctx).await.into_result();
            assert!(
                matches!(result, Err(KanbanError::ReservedName { .. })),
                "{name} should be reserved"
            );
        }
    }

    #[tokio::test]
    async fn test_add_column_empty_name() {
        let (_temp, ctx) = setup().await;
        let result = AddColumn::new("   ").execute(&ctx).await.into_result();
        assert!(matches!(result, Err(KanbanError::MissingField { .. })));
    }

    #[tokio::test]
    async fn test_add_column_requires_board() {
        let temp = TempDir::new().unwrap();
        let ctx = KanbanContext::new(temp.path().join(".taskboard"));
        let result = AddColumn::new("Review").execute(&ctx).await.into_result();
        assert!(matches!(result, Err(KanbanError::NotInitialized { .. })));
    }
}
