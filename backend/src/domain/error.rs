//! Domain-level error taxonomy for todo operations.
//!
//! These errors are transport agnostic. The HTTP adapter maps each variant to
//! a status code and decides which messages are safe to show clients.

use thiserror::Error;

use crate::domain::ports::TodoRepositoryError;
use crate::domain::{TodoId, TodoValidationError};

/// Failures surfaced by [`crate::domain::TodoService`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Input failed validation; the message is safe to return to clients.
    #[error(transparent)]
    Validation(#[from] TodoValidationError),
    /// The identifier is well formed but no todo matched it.
    #[error("Todo with id {id} not found")]
    NotFound { id: TodoId },
    /// The store could not be reached or rejected the operation.
    #[error(transparent)]
    Storage(TodoRepositoryError),
    /// The store returned data the service cannot interpret.
    #[error("unexpected todo failure: {message}")]
    Unexpected { message: String },
}

impl TodoError {
    /// Convenience constructor for [`TodoError::NotFound`].
    pub fn not_found(id: TodoId) -> Self {
        Self::NotFound { id }
    }

    /// Convenience constructor for [`TodoError::Unexpected`].
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }
}

impl From<TodoRepositoryError> for TodoError {
    fn from(value: TodoRepositoryError) -> Self {
        match value {
            TodoRepositoryError::Corrupt { message } => Self::Unexpected { message },
            other => Self::Storage(other),
        }
    }
}
