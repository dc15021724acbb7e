//! Todo domain service.
//!
//! Implements the [`TodosQuery`] and [`TodosCommand`] driving ports on top of
//! a [`TodoRepository`]. Validation happens here, before any store call;
//! timestamps come from the injected clock.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{TodoRepository, TodosCommand, TodosQuery};
use crate::domain::{
    TodoDraft, TodoError, TodoId, TodoRecord, serialize_todo, validate_description,
};

/// Service orchestrating todo use cases against a repository.
#[derive(Clone)]
pub struct TodoService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl<R> TodoService<R> {
    /// Create a service over `repository`, stamping new todos with `clock`.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { repository, clock }
    }
}

#[async_trait]
impl<R> TodosQuery for TodoService<R>
where
    R: TodoRepository,
{
    async fn list_all(&self) -> Result<Vec<TodoRecord>, TodoError> {
        let todos = self.repository.list_newest_first().await?;
        Ok(todos.into_iter().map(serialize_todo).collect())
    }
}

#[async_trait]
impl<R> TodosCommand for TodoService<R>
where
    R: TodoRepository,
{
    async fn create(&self, description: &str) -> Result<TodoRecord, TodoError> {
        let validated = validate_description(description)?;
        let draft = TodoDraft::new(validated, self.clock.utc());
        let id = self.repository.insert(&draft).await?;
        debug!(todo_id = %id, "todo created");
        Ok(serialize_todo(draft.into_todo(id)))
    }

    async fn set_completed(&self, id: &str, completed: bool) -> Result<(), TodoError> {
        let todo_id = TodoId::parse(id)?;
        if !self.repository.set_completed(&todo_id, completed).await? {
            return Err(TodoError::not_found(todo_id));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), TodoError> {
        let todo_id = TodoId::parse(id)?;
        if !self.repository.delete(&todo_id).await? {
            return Err(TodoError::not_found(todo_id));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "todo_service_tests.rs"]
mod tests;
