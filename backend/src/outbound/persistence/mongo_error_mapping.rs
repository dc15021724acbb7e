//! Classification of MongoDB driver errors into repository errors.

use mongodb::error::{Error as MongoError, ErrorKind};
use tracing::debug;

use crate::domain::ports::TodoRepositoryError;

/// Which repository error a driver failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailureClass {
    Connection,
    Query,
    Corrupt,
}

pub(crate) fn classify(kind: &ErrorKind) -> FailureClass {
    match kind {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::Authentication { .. } => FailureClass::Connection,
        ErrorKind::BsonDeserialization(_) => FailureClass::Corrupt,
        _ => FailureClass::Query,
    }
}

/// Convert a driver error, keeping its text as the repository message.
pub(crate) fn map_mongo_error(error: &MongoError) -> TodoRepositoryError {
    let class = classify(&error.kind);
    debug!(?class, error = %error, "mongodb operation failed");
    let message = error.to_string();
    match class {
        FailureClass::Connection => TodoRepositoryError::connection(message),
        FailureClass::Query => TodoRepositoryError::query(message),
        FailureClass::Corrupt => TodoRepositoryError::corrupt(message),
    }
}
