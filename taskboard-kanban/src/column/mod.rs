//! Column commands

mod add;
mod delete;
mod ensure;
mod get;
mod list;
mod rename;
mod reorder;

pub use add::AddColumn;
pub use delete::DeleteColumn;
pub use ensure::EnsureSystemColumns;
pub use get::GetColumn;
pub use list::ListColumns;
pub use rename::RenameColumn;
pub use reorder::ReorderColumns;
