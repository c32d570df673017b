//! Item (card) commands

mod add;
mod delete;
mod get;
mod mv;
mod update;

pub use add::AddItem;
pub use delete::DeleteItem;
pub use get::GetItem;
pub use mv::MoveItem;
pub use update::UpdateItem;
