//! Operation metadata and execution traits

use crate::ExecutionResult;
use async_trait::async_trait;
use serde_json::Value;

/// Metadata every command carries, normally generated by `#[operation]`.
pub trait Operation {
    /// The action, e.g. "move"
    fn verb(&self) -> &'static str;

    /// The entity acted on, e.g. "item"
    fn noun(&self) -> &'static str;

    /// One-line human description
    fn description(&self) -> &'static str;

    /// Canonical op string used in activity logs (e.g. "move item")
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Execute a command against a context.
///
/// The context supplies data access only; the command owns the logic.
#[async_trait]
pub trait Execute<C, E>: Operation + Send + Sync
where
    C: Send + Sync,
{
    /// Run the command
    async fn execute(&self, ctx: &C) -> ExecutionResult<Value, E>;
}
