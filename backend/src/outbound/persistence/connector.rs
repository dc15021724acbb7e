//! Shared MongoDB client handle.
//!
//! The driver client owns a connection pool and is cheap to clone. Building
//! it performs no network I/O; the first operation establishes connections,
//! bounded by the configured timeout.

use mongodb::bson::{Document, doc};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use super::mongo_error_mapping::map_mongo_error;
use super::settings::MongoSettings;
use crate::domain::ports::TodoRepositoryError;

/// Database holding the todo collection.
pub const DATABASE_NAME: &str = "test_db";
/// Collection storing one document per todo.
pub const COLLECTION_NAME: &str = "todos";

const APP_NAME: &str = "todo-backend";

/// Errors raised while building the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MongoConnectorError {
    /// The connection string or client options were rejected.
    #[error("invalid MongoDB configuration for {uri}: {message}")]
    Configuration { uri: String, message: String },
}

/// Process-wide handle to the todo store.
#[derive(Clone, Debug)]
pub struct MongoConnector {
    client: Client,
}

impl MongoConnector {
    /// Build the client described by `settings`.
    pub async fn connect(settings: &MongoSettings) -> Result<Self, MongoConnectorError> {
        let uri = settings.connection_uri();
        let configuration_error = |err: mongodb::error::Error| MongoConnectorError::Configuration {
            uri: uri.clone(),
            message: err.to_string(),
        };

        let mut options = ClientOptions::parse(&uri)
            .await
            .map_err(configuration_error)?;
        options.app_name = Some(APP_NAME.to_owned());
        options.connect_timeout = Some(settings.timeout());
        options.server_selection_timeout = Some(settings.timeout());

        let client = Client::with_options(options).map_err(configuration_error)?;
        Ok(Self { client })
    }

    /// Handle to the todos collection.
    pub fn collection(&self) -> Collection<Document> {
        self.client
            .database(DATABASE_NAME)
            .collection::<Document>(COLLECTION_NAME)
    }

    /// Round-trip a `ping` command to confirm the server is reachable.
    pub async fn ping(&self) -> Result<(), TodoRepositoryError> {
        self.client
            .database(DATABASE_NAME)
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|err| map_mongo_error(&err))
    }
}
