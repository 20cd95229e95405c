//! Crate-wide error type.

use thiserror::Error;

/// Errors reported by the solver and its collaborators.
///
/// Variants identify the failing stage: [`Error::InvalidInput`] is raised
/// before any work is dispatched, the others during execution.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("worker for chunk {chunk} failed: {message}")]
    WorkerFailure { chunk: usize, message: String },
    #[error("worker pool: {0}")]
    Pool(String),
    #[error("distance service: {0}")]
    Service(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn worker_failure(chunk: usize, message: impl Into<String>) -> Self {
        Self::WorkerFailure {
            chunk,
            message: message.into(),
        }
    }

    pub fn service(message: impl Into<String>) -> Self {
        Self::Service(message.into())
    }

    /// Returns `true` for errors raised while validating input.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
