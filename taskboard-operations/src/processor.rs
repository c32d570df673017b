//! Operation processor trait

use crate::{Execute, Value};
use async_trait::async_trait;

/// Runs operations and takes care of what happens around them (logging, attribution).
#[async_trait]
pub trait OperationProcessor<C, E>
where
    C: Send + Sync,
    E: Send,
{
    /// Execute an operation and return its plain result
    async fn process<O>(&self, operation: &O, ctx: &C) -> Result<Value, E>
    where
        O: Execute<C, E>;
}
