use thiserror::Error;

/// Failures reported by the backing store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Table not found: {0}")]
    TableNotFound(String),
    /// An update targeted an item that does not exist.
    #[error("Item not found in {table}: {key}")]
    ItemNotFound { table: String, key: String },
    #[error("Throughput exceeded, please retry")]
    Throttled,
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("{operation} failed: {message}")]
    RequestFailed {
        operation: &'static str,
        message: String,
    },
}

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Failed to marshal {entity_type}: {reason}")]
    Marshal {
        entity_type: &'static str,
        reason: String,
    },
    #[error("Failed to unmarshal {entity_type}: {reason}")]
    Unmarshal {
        entity_type: &'static str,
        reason: String,
    },
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
