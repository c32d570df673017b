//! InitBoard command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::types::{is_reserved_name, Board, Column};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Initialize a new board with its system columns
#[operation(
    verb = "init",
    noun = "board",
    description = "Initialize a new board with Now and Completed columns"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct InitBoard {
    /// The board name
    pub name: String,
    /// Optional board description
    pub description: Option<String>,
    /// Ordinary columns created between `Now` and `Completed`
    #[serde(default)]
    pub columns: Vec<String>,
}

impl InitBoard {
    /// Create a new InitBoard command
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            columns: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the ordinary columns
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for InitBoard {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        let start = std::time::Instant::now();
        let input = serde_json::to_value(self).unwrap_or_default();

        let result = async {
            if ctx.is_initialized() {
                return Err(KanbanError::AlreadyExists {
                    path: ctx.root().to_path_buf(),
                });
            }
            if let Some(name) = self.columns.iter().find(|n| is_reserved_name(n)) {
                return Err(KanbanError::ReservedName { name: name.clone() });
            }

            ctx.create_directories().await?;
            let _lock = ctx.lock().await?;

            let mut board = Board::new(&self.name);
            if let Some(desc) = &self.description {
                board = board.with_description(desc);
            }
            ctx.write_board(&board).await?;

            // Now at 0, user columns after it, Completed pinned to the end
            let mut columns = vec![Column::now(board.id.clone(), 0)];
            for (offset, name) in self.columns.iter().enumerate() {
                columns.push(Column::new(board.id.clone(), name, offset as i64 + 1));
            }
            columns.push(Column::completed(board.id.clone()));

            for column in &columns {
                ctx.write_column(column).await?;
            }
            tracing::info!(board = %board.id, columns = columns.len(), "initialized board");

            let mut result = serde_json::to_value(&board)?;
            result["columns"] = serde_json::to_value(&columns)?;
            Ok(result)
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        ExecutionResult::from_outcome(self.op_string(), input, result, duration_ms)
    }
}
