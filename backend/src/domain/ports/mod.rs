//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven port: [`TodoRepository`], implemented by persistence adapters.
//! Driving ports: [`TodosQuery`] and [`TodosCommand`], implemented by the
//! domain service and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod todo_repository;
mod todos_command;
mod todos_query;

#[cfg(test)]
pub use todo_repository::MockTodoRepository;
pub use todo_repository::{TodoRepository, TodoRepositoryError};
#[cfg(test)]
pub use todos_command::MockTodosCommand;
pub use todos_command::TodosCommand;
#[cfg(test)]
pub use todos_query::MockTodosQuery;
pub use todos_query::TodosQuery;
