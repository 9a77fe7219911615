//! # Record Store Errors
//!
//! None of these are shown to HTTP clients verbatim; the REST layer maps
//! them to a fixed message per endpoint and logs the detail.

use thiserror::Error;

/// Result type for record store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Could not open or reach the database
    #[error("Store connection failed: {message}")]
    ConnectionFailed { message: String },

    /// Schema setup failed at startup
    #[error("Migration {version} failed: {message}")]
    MigrationFailed { version: String, message: String },

    /// Identifier is not in the store's id format
    #[error("Invalid record id: {0}")]
    InvalidId(String),

    /// A statement failed to execute
    #[error("Query '{query}' failed: {message}")]
    QueryFailed { query: String, message: String },

    /// A stored row could not be decoded
    #[error("Corrupt record: {message}")]
    Corrupt { message: String },

    /// The store is not accepting operations
    #[error("Store unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    pub(crate) fn query(query: &str, err: impl std::fmt::Display) -> Self {
        StoreError::QueryFailed {
            query: query.to_string(),
            message: err.to_string(),
        }
    }

    /// Whether the failure is about the request rather than the store
    pub fn is_invalid_id(&self) -> bool {
        matches!(self, StoreError::InvalidId(_))
    }
}
