//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the driving ports and stay testable without a database.

use std::sync::Arc;

use crate::domain::ports::{TodosCommand, TodosQuery};

/// Dependency bundle for todo handlers.
#[derive(Clone)]
pub struct HttpState {
    pub todos_query: Arc<dyn TodosQuery>,
    pub todos_command: Arc<dyn TodosCommand>,
}

impl HttpState {
    /// Construct state from separate query and command ports.
    pub fn new(todos_query: Arc<dyn TodosQuery>, todos_command: Arc<dyn TodosCommand>) -> Self {
        Self {
            todos_query,
            todos_command,
        }
    }

    /// Construct state from one service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use todo_backend::domain::ports::{TodosCommand, TodosQuery};
    /// use todo_backend::inbound::http::state::HttpState;
    ///
    /// fn wire<S: TodosQuery + TodosCommand + 'static>(service: S) -> HttpState {
    ///     HttpState::from_service(service)
    /// }
    /// ```
    pub fn from_service<S>(service: S) -> Self
    where
        S: TodosQuery + TodosCommand + 'static,
    {
        let shared = Arc::new(service);
        Self {
            todos_query: shared.clone(),
            todos_command: shared,
        }
    }
}
