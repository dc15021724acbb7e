//! Driving port for reading todos.

use async_trait::async_trait;

use crate::domain::{TodoError, TodoRecord};

/// Read-side use cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodosQuery: Send + Sync {
    /// All todos, newest first, in their API representation.
    async fn list_all(&self) -> Result<Vec<TodoRecord>, TodoError>;
}
