//! Domain primitives, ports, and services for todo management.
//!
//! Purpose: define the todo entity, its validation rules, and the service
//! that orchestrates list/create/update/delete against the persistence port.
//! Nothing in this module knows about HTTP or MongoDB.
//!
//! Public surface:
//! - `Todo`, `TodoId`, `TodoDescription`, `TodoDraft`: entity and inputs.
//! - `TodoRecord`: API-facing projection produced by `serialize_todo`.
//! - `TodoError`: error taxonomy surfaced by the service.
//! - `TodoService`: implements the `TodosQuery` and `TodosCommand` ports.

pub mod error;
pub mod ports;
pub mod todo;
pub mod todo_service;

pub use self::error::TodoError;
pub use self::todo::{
    MAX_DESCRIPTION_LENGTH, Todo, TodoDescription, TodoDraft, TodoId, TodoRecord,
    TodoValidationError, serialize_todo, validate_description,
};
pub use self::todo_service::TodoService;
