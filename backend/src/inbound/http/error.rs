//! HTTP adapter mapping for todo errors.
//!
//! Purpose: keep [`TodoError`] HTTP-agnostic while letting handlers turn
//! failures into the error envelope and a status code with `?`. Every
//! [`ApiError`] is logged when it is created, so the operation name and the
//! underlying cause reach the logs even though server-side failures answer
//! with a generic message.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use super::envelope::ApiEnvelope;
use crate::domain::TodoError;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

const DATABASE_ERROR_MESSAGE: &str = "Database error occurred";
const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";
const INVALID_JSON_MESSAGE: &str = "Invalid JSON payload";

/// Handler-level operation, used to label log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListTodos,
    CreateTodo,
    UpdateTodo,
    DeleteTodo,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ListTodos => "fetching todos",
            Self::CreateTodo => "creating todo",
            Self::UpdateTodo => "updating todo",
            Self::DeleteTodo => "deleting todo",
        })
    }
}

/// Failure returned by todo handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The domain service rejected or failed the operation.
    #[error("error {operation}: {source}")]
    Todo {
        operation: Operation,
        #[source]
        source: TodoError,
    },
    /// A required request body member was absent or `null`.
    #[error("{field} field is required")]
    MissingField {
        operation: Operation,
        field: &'static str,
    },
    /// The request body could not be decoded.
    #[error("invalid JSON payload: {detail}")]
    InvalidJson { detail: String },
}

impl ApiError {
    /// Wrap a service failure raised while performing `operation`.
    pub fn todo(operation: Operation, source: TodoError) -> Self {
        match &source {
            TodoError::Validation(_) | TodoError::NotFound { .. } => {
                warn!(operation = %operation, error = %source, "todo request rejected");
            }
            TodoError::Storage(cause) => {
                error!(operation = %operation, error = %cause, "database error");
            }
            TodoError::Unexpected { message } => {
                error!(operation = %operation, error = %message, "unexpected error");
            }
        }
        Self::Todo { operation, source }
    }

    /// Adapter for `map_err` that tags service failures with `operation`.
    pub fn during(operation: Operation) -> impl FnOnce(TodoError) -> Self {
        move |source| Self::todo(operation, source)
    }

    /// A required body member is missing.
    pub fn missing_field(operation: Operation, field: &'static str) -> Self {
        warn!(operation = %operation, field, "required field missing");
        Self::MissingField { operation, field }
    }

    /// The JSON body could not be decoded into the request type.
    pub fn invalid_json(cause: &impl fmt::Display) -> Self {
        warn!(error = %cause, "invalid JSON payload");
        Self::InvalidJson {
            detail: cause.to_string(),
        }
    }

    /// Message placed in the envelope's `error` member.
    pub fn client_message(&self) -> String {
        match self {
            Self::Todo {
                source: TodoError::Storage(_),
                ..
            } => DATABASE_ERROR_MESSAGE.to_owned(),
            Self::Todo {
                source: TodoError::Unexpected { .. },
                ..
            } => UNEXPECTED_ERROR_MESSAGE.to_owned(),
            Self::Todo { source, .. } => source.to_string(),
            Self::MissingField { .. } => self.to_string(),
            Self::InvalidJson { .. } => INVALID_JSON_MESSAGE.to_owned(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Todo { source, .. } => match source {
                TodoError::Validation(_) => StatusCode::BAD_REQUEST,
                TodoError::NotFound { .. } => StatusCode::NOT_FOUND,
                TodoError::Storage(_) | TodoError::Unexpected { .. } => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::MissingField { .. } | Self::InvalidJson { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiEnvelope::failure(self.client_message()))
    }
}
