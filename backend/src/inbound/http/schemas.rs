//! OpenAPI schema definitions for todo API payloads.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers below mirror their JSON shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::TodoRecord`].
#[derive(ToSchema)]
#[schema(as = crate::domain::TodoRecord)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TodoRecordSchema {
    /// Store-assigned identifier, 24 hexadecimal digits.
    #[schema(example = "65f1a2b3c4d5e6f708192a3b")]
    id: String,
    /// Trimmed description, at most 500 characters.
    #[schema(example = "Water the plants")]
    description: String,
    /// Completion flag.
    completed: bool,
    /// Creation time in RFC 3339 UTC, or `null` for legacy todos.
    #[schema(example = "2024-05-01T12:00:00.000Z")]
    created_at: Option<String>,
}

/// Envelope returned by `GET /todos`.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TodoListEnvelopeSchema {
    #[schema(example = true)]
    success: bool,
    data: Vec<TodoRecordSchema>,
    /// Number of todos in `data`.
    count: usize,
}

/// Envelope returned by `POST /todos`.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TodoCreatedEnvelopeSchema {
    #[schema(example = true)]
    success: bool,
    #[schema(example = "Todo created successfully")]
    message: String,
    data: TodoRecordSchema,
}

/// Envelope returned by status updates and deletions.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MessageEnvelopeSchema {
    #[schema(example = true)]
    success: bool,
    #[schema(example = "Todo updated successfully")]
    message: String,
}

/// Envelope returned for every failure.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorEnvelopeSchema {
    #[schema(example = false)]
    success: bool,
    /// Client-facing error message.
    #[schema(example = "Invalid todo ID format")]
    error: String,
}
