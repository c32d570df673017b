//! MoveItem command

use crate::context::KanbanContext;
use crate::error::KanbanError;
use crate::reorder::{calculate_item_placement, plan_item_move, DropTarget};
use crate::types::ItemId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult, Operation};

/// Drop a card onto a column surface or onto another card
#[operation(
    verb = "move",
    noun = "item",
    description = "Move an item onto a column or next to another item"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveItem {
    pub id: ItemId,
    pub target: DropTarget,
}

impl MoveItem {
    pub fn new(id: impl Into<ItemId>, target: DropTarget) -> Self {
        Self {
            id: id.into(),
            target,
        }
    }
}

#[async_trait]
impl Execute<KanbanContext, KanbanError> for MoveItem {
    async fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Value, KanbanError> {
        let start = std::time::Instant::now();
        let input = serde_json::to_value(self).unwrap_or_default();

        let result = async {
            let _lock = ctx.lock().await?;
            let mut item = ctx.read_item(&self.id).await?;
            let view = ctx.read_board_view().await?;

            let placement = calculate_item_placement(&item, &self.target, &view.columns);
            if view.column(&placement.target_column_id).is_none() {
                return Err(KanbanError::ColumnNotFound {
                    id: placement.target_column_id.to_string(),
                });
            }

            let updates = if placement.is_noop_for(&item) {
                Vec::new()
            } else {
                plan_item_move(
                    &view.columns,
                    &item.id,
                    &placement.target_column_id,
                    placement.new_position,
                )?
            };

            if updates.is_empty() {
                tracing::debug!(item = %item.id, "drop left the item in place, nothing persisted");
                return Ok(serde_json::json!({
                    "changed": false,
                    "item": item,
                    "placement": placement,
                }));
            }

            for update in &updates {
                let mut record = match view
                    .columns
                    .iter()
                    .flat_map(|c| c.items.iter())
                    .find(|i| i.id == update.item_id)
                {
                    Some(found) => found.clone(),
                    None => ctx.read_item(&update.item_id).await?,
                };
                record.column_id = update.column_id.clone();
                record.position = update.position;
                if record.id == item.id {
                    record.touch();
                    item = record.clone();
                }
                ctx.write_item(&record).await?;
            }
            tracing::info!(
                item = %item.id,
                column = %item.column_id,
                position = item.position,
                updated = updates.len(),
                "moved item"
            );

            Ok(serde_json::json!({
                "changed": true,
                "item": item,
                "placement": placement,
                "updates": updates,
            }))
        }
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        match result {
            Ok(value) if value["changed"] == false => ExecutionResult::Unlogged { value },
            other => ExecutionResult::from_outcome(self.op_string(), input, other, duration_ms),
        }
    }
}
