//! Core types for the kanban engine

mod board;
mod ids;
mod item;
mod slot;
mod view;

// Re-export all types
pub use board::{
    is_reserved_name, sort_columns, Board, Column, COMPLETED_COLUMN_NAME, NOW_COLUMN_NAME,
    RESERVED_COLUMN_NAMES,
};
pub use ids::{BoardId, ColumnId, ItemId};
pub use item::{next_item_position, Item};
pub use slot::{next_ordinary_position, ColumnSlot, PINNED_END_SENTINEL};
pub use view::{BoardView, ColumnWithItems};
pub use taskboard_operations::LogEntry;
