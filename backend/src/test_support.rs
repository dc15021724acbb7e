//! Test utilities for the backend crate.
//!
//! Compiled for unit tests and, through the `test-support` feature, for the
//! integration tests in `tests/`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{TodoRepository, TodoRepositoryError};
use crate::domain::{Todo, TodoDraft, TodoId};

/// Process-local [`TodoRepository`] mirroring the MongoDB adapter's
/// observable behaviour: store-assigned ids, newest-first listing (todos
/// without a timestamp last), and match/delete counts.
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    todos: Mutex<Vec<Todo>>,
    next_id: AtomicU64,
    failure: Mutex<Option<TodoRepositoryError>>,
}

impl InMemoryTodoRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `todos`, e.g. documents with
    /// missing fields that the service itself would never write.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Mutex::new(todos),
            ..Self::default()
        }
    }

    /// Make every subsequent call fail with `error` until cleared with `None`.
    pub fn fail_with(&self, error: Option<TodoRepositoryError>) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = error;
        }
    }

    /// Number of stored todos.
    pub fn len(&self) -> usize {
        self.todos.lock().map_or(0, |todos| todos.len())
    }

    /// Whether the repository holds no todos.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn guard(&self) -> Result<MutexGuard<'_, Vec<Todo>>, TodoRepositoryError> {
        let injected = self
            .failure
            .lock()
            .map_err(|_| TodoRepositoryError::connection("in-memory store poisoned"))?
            .clone();
        if let Some(error) = injected {
            return Err(error);
        }
        self.todos
            .lock()
            .map_err(|_| TodoRepositoryError::connection("in-memory store poisoned"))
    }

    fn allocate_id(&self) -> Result<TodoId, TodoRepositoryError> {
        let counter = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        TodoId::parse(&format!("{counter:024x}"))
            .map_err(|err| TodoRepositoryError::corrupt(err.to_string()))
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list_newest_first(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        let mut todos = self.guard()?.clone();
        todos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(todos)
    }

    async fn insert(&self, draft: &TodoDraft) -> Result<TodoId, TodoRepositoryError> {
        let mut todos = self.guard()?;
        let id = self.allocate_id()?;
        todos.push(draft.clone().into_todo(id));
        Ok(id)
    }

    async fn set_completed(
        &self,
        id: &TodoId,
        completed: bool,
    ) -> Result<bool, TodoRepositoryError> {
        let mut todos = self.guard()?;
        let key = id.to_string();
        let Some(todo) = todos.iter_mut().find(|todo| todo.id == key) else {
            return Ok(false);
        };
        todo.completed = completed;
        Ok(true)
    }

    async fn delete(&self, id: &TodoId) -> Result<bool, TodoRepositoryError> {
        let mut todos = self.guard()?;
        let before = todos.len();
        let key = id.to_string();
        todos.retain(|todo| todo.id != key);
        Ok(todos.len() < before)
    }
}
