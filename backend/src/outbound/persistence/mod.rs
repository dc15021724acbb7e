//! MongoDB persistence adapters.
//!
//! # Architecture
//!
//! - **Explicit connector**: [`MongoConnector`] is built once at start-up
//!   from [`MongoSettings`] and injected into repositories; the driver pools
//!   connections behind the shared client handle.
//! - **Internal documents**: BSON document mapping lives in `todo_document`
//!   and never leaks into the domain.
//! - **Strongly typed errors**: driver failures are classified into
//!   [`crate::domain::ports::TodoRepositoryError`] variants in one place.
//!
//! # Example
//!
//! ```no_run
//! use todo_backend::outbound::persistence::{MongoConnector, MongoSettings, MongoTodoRepository};
//!
//! # async fn run(settings: MongoSettings) -> Result<(), Box<dyn std::error::Error>> {
//! let connector = MongoConnector::connect(&settings).await?;
//! let _repository = MongoTodoRepository::new(connector);
//! # Ok(())
//! # }
//! ```

mod connector;
mod mongo_error_mapping;
mod mongo_todo_repository;
mod settings;
mod todo_document;

pub use connector::{COLLECTION_NAME, DATABASE_NAME, MongoConnector, MongoConnectorError};
pub use mongo_todo_repository::MongoTodoRepository;
pub use settings::MongoSettings;
