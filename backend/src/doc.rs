//! OpenAPI documentation for the todo API.
//!
//! Swagger UI serves this document at `/docs` in debug builds, and the
//! `openapi-dump` binary prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    ErrorEnvelopeSchema, MessageEnvelopeSchema, TodoCreatedEnvelopeSchema,
    TodoListEnvelopeSchema, TodoRecordSchema,
};
use crate::inbound::http::todos::{CreateTodoRequest, UpdateTodoRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo backend API",
        description = "CRUD operations over todos persisted in MongoDB, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::todos::list_todos,
        crate::inbound::http::todos::create_todo,
        crate::inbound::http::todos::update_todo,
        crate::inbound::http::todos::delete_todo,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        TodoRecordSchema,
        TodoListEnvelopeSchema,
        TodoCreatedEnvelopeSchema,
        MessageEnvelopeSchema,
        ErrorEnvelopeSchema,
        CreateTodoRequest,
        UpdateTodoRequest,
    )),
    tags(
        (name = "todos", description = "Todo management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
