//! Driving port for todo mutations.
//!
//! Identifiers and descriptions arrive as raw client strings; implementations
//! own their validation so every adapter gets identical behaviour.

use async_trait::async_trait;

use crate::domain::{TodoError, TodoRecord};

/// Write-side use cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodosCommand: Send + Sync {
    /// Validate `description` and store a new, incomplete todo.
    async fn create(&self, description: &str) -> Result<TodoRecord, TodoError>;

    /// Set the completion flag of the todo identified by `id`.
    async fn set_completed(&self, id: &str, completed: bool) -> Result<(), TodoError>;

    /// Delete the todo identified by `id`.
    async fn delete(&self, id: &str) -> Result<(), TodoError>;
}
