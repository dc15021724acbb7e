//! Port abstraction for todo persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Todo, TodoDraft, TodoId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by todo repository adapters.
    pub enum TodoRepositoryError {
        /// The store could not be reached.
        Connection => "todo repository connection failed: {message}",
        /// The store rejected or failed to execute the operation.
        Query => "todo repository query failed: {message}",
        /// Stored data or a store response did not have the expected shape.
        Corrupt => "todo repository returned malformed data: {message}",
    }
}

/// Port for reading and mutating persisted todos.
///
/// Each method maps to a single store round trip.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Every stored todo, newest `created_at` first.
    async fn list_newest_first(&self) -> Result<Vec<Todo>, TodoRepositoryError>;

    /// Persist a new todo and return the identifier the store assigned.
    async fn insert(&self, draft: &TodoDraft) -> Result<TodoId, TodoRepositoryError>;

    /// Set the completion flag. Returns `false` when no todo matched `id`.
    async fn set_completed(
        &self,
        id: &TodoId,
        completed: bool,
    ) -> Result<bool, TodoRepositoryError>;

    /// Remove a todo. Returns `false` when nothing was deleted.
    async fn delete(&self, id: &TodoId) -> Result<bool, TodoRepositoryError>;
}
