//! Store error types.
//!
//! Every store error is recoverable at the request level: the HTTP layer
//! maps each variant to a client-facing status code and structured message.
//! None is fatal to the process.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced by [`PostStore`](super::PostStore) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Required fields missing or empty on create.
    ///
    /// Carries every missing field, not just the first one found.
    #[error("Missing required field(s): {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Unrecognized sort field or direction
    #[error("{0}")]
    InvalidArgument(String),

    /// Unknown post id on update/delete
    #[error("Post with id {0} was not found")]
    NotFound(u64),
}

impl StoreError {
    /// Build a validation error from the missing field names.
    pub fn missing_fields(fields: &[&str]) -> Self {
        StoreError::Validation(fields.iter().map(|f| f.to_string()).collect())
    }
}
