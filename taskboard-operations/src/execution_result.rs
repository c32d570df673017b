//! Execution result types for operations

use crate::LogEntry;
use serde_json::Value;
use std::fmt::Display;

/// Result of executing an operation
///
/// Distinguishes between:
/// - Logged: Operations that mutate state and should be audited
/// - Unlogged: Read-only operations, or mutations that turned out to be no-ops
/// - Failed: Errors (optionally logged)
pub enum ExecutionResult<T, E> {
    /// Operation succeeded and should be logged
    Logged { value: T, log_entry: LogEntry },
    /// Operation succeeded but no logging needed
    Unlogged { value: T },
    /// Operation failed
    Failed {
        error: E,
        log_entry: Option<LogEntry>,
    },
}

impl<E: Display> ExecutionResult<Value, E> {
    /// Wrap the outcome of a mutating command.
    ///
    /// Success becomes `Logged`, failure becomes `Failed` with an error log entry.
    pub fn from_outcome(
        op: impl Into<String>,
        input: Value,
        outcome: Result<Value, E>,
        duration_ms: u64,
    ) -> Self {
        match outcome {
            Ok(value) => Self::Logged {
                log_entry: LogEntry::new(op, input, value.clone(), None, duration_ms),
                value,
            },
            Err(error) => {
                let error_msg = error.to_string();
                Self::Failed {
                    error,
                    log_entry: Some(LogEntry::new(
                        op,
                        input,
                        serde_json::json!({ "error": error_msg }),
                        None,
                        duration_ms,
                    )),
                }
            }
        }
    }
}

impl<T, E> ExecutionResult<T, E> {
    /// Extract the result (Ok or Err)
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Logged { value, .. } => Ok(value),
            Self::Unlogged { value } => Ok(value),
            Self::Failed { error, .. } => Err(error),
        }
    }

    /// Get the value and log entry separately
    pub fn split(self) -> (Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Logged { value, log_entry } => (Ok(value), Some(log_entry)),
            Self::Unlogged { value } => (Ok(value), None),
            Self::Failed { error, log_entry } => (Err(error), log_entry),
        }
    }

    /// Check if this should be logged
    pub fn should_log(&self) -> bool {
        matches!(
            self,
            Self::Logged { .. }
                | Self::Failed {
                    log_entry: Some(_),
                    ..
                }
        )
    }
}
