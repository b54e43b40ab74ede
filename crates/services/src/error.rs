//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by `ProgressService` and `BadgeEngine`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while dispatching user intents.
///
/// Both invalid-id variants leave all state untouched; the presentation
/// layer surfaces them as a visible no-op.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlowError {
    #[error("unknown section id: {0}")]
    InvalidSection(String),

    #[error("unknown procedure id: {0}")]
    InvalidProcedure(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ProgressServiceError> for FlowError {
    fn from(err: ProgressServiceError) -> Self {
        match err {
            ProgressServiceError::Storage(inner) => FlowError::Storage(inner),
        }
    }
}
