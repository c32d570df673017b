//! Operation processor that records logged operations in the activity log

use crate::context::KanbanContext;
use crate::error::KanbanError;
use serde_json::Value;
use std::time::Duration;
use taskboard_operations::{async_trait, Execute, Operation, OperationProcessor};

/// Executes kanban commands and appends their log entries to
/// `activity/current.jsonl`, stamped with the acting user when one is set.
///
/// Operations that fail with a retryable error (the board lock is held by
/// another process) are re-run with a growing delay before giving up.
#[derive(Debug, Clone)]
pub struct KanbanOperationProcessor {
    actor: Option<String>,
    lock_retries: u32,
    retry_delay: Duration,
}

impl Default for KanbanOperationProcessor {
    fn default() -> Self {
        Self {
            actor: None,
            lock_retries: 3,
            retry_delay: Duration::from_millis(25),
        }
    }
}

impl KanbanOperationProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute every logged entry to `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
            ..Self::default()
        }
    }

    /// How many times a lock-busy operation is re-run
    pub fn with_lock_retries(mut self, retries: u32) -> Self {
        self.lock_retries = retries;
        self
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }
}

#[async_trait]
impl OperationProcessor<KanbanContext, KanbanError> for KanbanOperationProcessor {
    async fn process<O>(&self, operation: &O, ctx: &KanbanContext) -> Result<Value, KanbanError>
    where
        O: Execute<KanbanContext, KanbanError>,
    {
        let mut attempt = 0;
        let (result, log_entry) = loop {
            let (result, log_entry) = operation.execute(ctx).await.split();
            match &result {
                Err(error) if error.is_retryable() && attempt < self.lock_retries => {
                    attempt += 1;
                    tracing::debug!(op = %operation.op_string(), attempt, "board is locked, retrying");
                    tokio::time::sleep(self.retry_delay * attempt).await;
                }
                _ => break (result, log_entry),
            }
        };

        if let Some(mut entry) = log_entry {
            if let Some(actor) = &self.actor {
                entry = entry.with_actor(actor);
            }
            // Failures before the board exists have nowhere to be logged
            if ctx.directories_exist() {
                if let Err(error) = ctx.append_activity(&entry).await {
                    tracing::warn!(op = %entry.op, %error, "failed to append activity log entry");
                }
            }
        }

        result
    }
}
