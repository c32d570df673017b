//! Kanban board engine with file-backed storage
//!
//! This crate holds the column and card reordering core of a kanban board,
//! the commands that persist what the core computes, and the file store
//! those commands run against.
//!
//! ## Overview
//!
//! - **Pure reorder core** - [`reorder`] computes new column orders, card
//!   placements and optimistic projections without doing any I/O
//! - **Protected `Completed` column** - never reordered, always rendered last
//! - **File-per-entity** - board, columns and items are individual YAML files
//! - **Audited** - mutations produce log entries appended to a JSONL activity log
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use taskboard_kanban::{board::InitBoard, column::ReorderColumns, Execute, KanbanContext};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = KanbanContext::new("/path/to/repo/.taskboard");
//! InitBoard::new("My Project")
//!     .with_columns(["To Do", "Doing"])
//!     .execute(&ctx)
//!     .await
//!     .into_result()?;
//!
//! let columns = ctx.read_all_columns().await?;
//! // Drop "Doing" before "Now"
//! ReorderColumns::new(columns[2].id.clone(), columns[0].id.clone())
//!     .execute(&ctx)
//!     .await
//!     .into_result()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Storage Structure
//!
//! ```text
//! repo/
//! └── .taskboard/
//!     ├── board.yaml           # Board metadata
//!     ├── .lock                # Exclusive lock held by mutations
//!     ├── columns/
//!     │   └── {id}.yaml        # Column state (position: integer or "end")
//!     ├── items/
//!     │   └── {id}.yaml        # Item state
//!     └── activity/
//!         └── current.jsonl    # Global operation log
//! ```

pub mod config;
mod context;
mod error;
mod processor;
pub mod reorder;
pub mod types;

// Command modules
pub mod board;
pub mod column;
pub mod item;

// Re-export Execute trait and types from operations crate
pub use taskboard_operations::{
    async_trait, Execute, ExecutionResult, Operation, OperationProcessor,
};

pub use config::KanbanConfig;
pub use context::{KanbanContext, KanbanLock, BOARD_DIR_NAME};
pub use error::{KanbanError, Result};
pub use processor::KanbanOperationProcessor;

// Re-export commonly used types
pub use reorder::{
    apply_optimistic_column_reorder, calculate_item_placement, calculate_new_column_order,
    ClosestEdge, DropTarget, ItemPlacement,
};
pub use types::{
    Board, BoardId, BoardView, Column, ColumnId, ColumnSlot, ColumnWithItems, Item, ItemId,
    LogEntry,
};
