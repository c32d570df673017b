//! The reordering core.
//!
//! Pure, synchronous functions over in-memory board state. They never
//! perform I/O and never mutate their inputs; commands persist what they
//! compute.

mod columns;
mod placement;
mod projection;
mod renumber;

pub use columns::calculate_new_column_order;
pub use placement::{calculate_item_placement, ClosestEdge, DropTarget, ItemPlacement};
pub use projection::apply_optimistic_column_reorder;
pub use renumber::{
    assert_unprotected, dense_positions, plan_column_positions, plan_item_move,
    ItemPositionUpdate,
};
