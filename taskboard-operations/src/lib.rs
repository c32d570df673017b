//! # Taskboard Operations
//!
//! This crate provides the `Operation` trait for defining board commands.
//! Commands are structs where the fields ARE the parameters - no duplication.
//!
//! ## Example
//!
//! ```ignore
//! use taskboard_operations::*;
//!
//! #[operation(verb = "add", noun = "item", description = "Add an item to a column")]
//! #[derive(Debug, Deserialize, Serialize)]
//! pub struct AddItem {
//!     /// The column that receives the item
//!     pub column_id: ColumnId,
//!     /// The item name
//!     pub name: String,
//! }
//!
//! #[async_trait]
//! impl Execute<KanbanContext, KanbanError> for AddItem {
//!     async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
//!         // mutations return ExecutionResult::Logged, reads return Unlogged
//!     }
//! }
//! ```

mod execution_result;
mod log;
mod operation;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};
pub use processor::OperationProcessor;

// Re-export proc macros
pub use taskboard_operations_macros::operation;

// Re-export for use in implementations
pub use async_trait::async_trait;
pub use serde_json::Value;
