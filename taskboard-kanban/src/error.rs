//! Error types for the kanban engine

use std::path::PathBuf;
use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in kanban operations
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Board not initialized at the given path
    #[error("board not initialized at {path}")]
    NotInitialized { path: PathBuf },

    /// Board already exists
    #[error("board already exists at {path}")]
    AlreadyExists { path: PathBuf },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Item not found
    #[error("item not found: {id}")]
    ItemNotFound { id: String },

    /// Column has items and cannot be deleted
    #[error("column '{id}' has {count} items and cannot be deleted")]
    ColumnNotEmpty { id: String, count: usize },

    /// System columns cannot be renamed or deleted
    #[error("column '{name}' is a system column and cannot be {action}")]
    SystemColumn { name: String, action: String },

    /// A user tried to take a name reserved for system columns
    #[error("column name '{name}' is reserved")]
    ReservedName { name: String },

    /// A position assignment named a protected column. This is a programmer
    /// error in the caller, never a user-facing condition.
    #[error("refusing to reposition protected column '{id}'")]
    ProtectedColumn { id: String },

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// Missing required field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Lock is held by another process
    #[error("lock busy - another operation in progress")]
    LockBusy,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl From<figment::Error> for KanbanError {
    fn from(error: figment::Error) -> Self {
        Self::Config(Box::new(error))
    }
}

impl KanbanError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }

    /// Create a system column error
    pub fn system_column(name: impl Into<String>, action: impl Into<String>) -> Self {
        Self::SystemColumn {
            name: name.into(),
            action: action.into(),
        }
    }

    /// Check if this is a retryable error
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::LockBusy)
    }
}
