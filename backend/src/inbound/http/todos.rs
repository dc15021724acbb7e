//! Todo HTTP handlers.
//!
//! ```text
//! GET    /todos
//! POST   /todos              {"description": "..."}
//! PATCH  /todos/{todo_id}    {"completed": true}
//! DELETE /todos/{todo_id}
//! ```
//!
//! Each path is also served with a trailing slash; see
//! [`crate::inbound::http::configure_todos`].

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::ApiEnvelope;
use crate::inbound::http::error::{ApiError, Operation};
use crate::inbound::http::payload::JsonBody;
use crate::inbound::http::schemas::{
    ErrorEnvelopeSchema, MessageEnvelopeSchema, TodoCreatedEnvelopeSchema, TodoListEnvelopeSchema,
};
use crate::inbound::http::state::HttpState;

const CREATED_MESSAGE: &str = "Todo created successfully";
const UPDATED_MESSAGE: &str = "Todo updated successfully";
const DELETED_MESSAGE: &str = "Todo deleted successfully";

/// Request payload for creating a todo.
///
/// A missing or `null` description, or no body at all, is treated as empty
/// and fails validation.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateTodoRequest {
    #[schema(example = "Water the plants")]
    pub description: Option<String>,
}

/// Request payload for changing a todo's completion flag.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateTodoRequest {
    pub completed: Option<bool>,
}

/// List every todo, newest first.
#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "All todos, newest first", body = TodoListEnvelopeSchema),
        (status = 500, description = "Database error", body = ErrorEnvelopeSchema)
    ),
    tags = ["todos"],
    operation_id = "listTodos"
)]
pub async fn list_todos(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let todos = state
        .todos_query
        .list_all()
        .await
        .map_err(ApiError::during(Operation::ListTodos))?;
    Ok(HttpResponse::Ok().json(ApiEnvelope::listing(todos)))
}

/// Create a new, incomplete todo.
#[utoipa::path(
    post,
    path = "/todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = TodoCreatedEnvelopeSchema),
        (status = 400, description = "Invalid description or payload", body = ErrorEnvelopeSchema),
        (status = 500, description = "Database error", body = ErrorEnvelopeSchema)
    ),
    tags = ["todos"],
    operation_id = "createTodo"
)]
pub async fn create_todo(
    state: web::Data<HttpState>,
    payload: JsonBody<CreateTodoRequest>,
) -> ApiResult<HttpResponse> {
    let CreateTodoRequest { description } = payload.into_inner();
    let record = state
        .todos_command
        .create(description.as_deref().unwrap_or_default())
        .await
        .map_err(ApiError::during(Operation::CreateTodo))?;
    Ok(HttpResponse::Created().json(ApiEnvelope::with_message(record, CREATED_MESSAGE)))
}

/// Set the completion flag of one todo.
#[utoipa::path(
    patch,
    path = "/todos/{todo_id}",
    params(("todo_id" = String, Path, description = "Todo identifier, 24 hex digits")),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Todo updated", body = MessageEnvelopeSchema),
        (status = 400, description = "Missing flag or malformed identifier", body = ErrorEnvelopeSchema),
        (status = 404, description = "No todo with this identifier", body = ErrorEnvelopeSchema),
        (status = 500, description = "Database error", body = ErrorEnvelopeSchema)
    ),
    tags = ["todos"],
    operation_id = "updateTodo"
)]
pub async fn update_todo(
    state: web::Data<HttpState>,
    todo_id: web::Path<String>,
    payload: JsonBody<UpdateTodoRequest>,
) -> ApiResult<HttpResponse> {
    let completed = payload
        .into_inner()
        .completed
        .ok_or_else(|| ApiError::missing_field(Operation::UpdateTodo, "completed"))?;
    state
        .todos_command
        .set_completed(&todo_id, completed)
        .await
        .map_err(ApiError::during(Operation::UpdateTodo))?;
    Ok(HttpResponse::Ok().json(ApiEnvelope::message(UPDATED_MESSAGE)))
}

/// Delete one todo.
#[utoipa::path(
    delete,
    path = "/todos/{todo_id}",
    params(("todo_id" = String, Path, description = "Todo identifier, 24 hex digits")),
    responses(
        (status = 200, description = "Todo deleted", body = MessageEnvelopeSchema),
        (status = 400, description = "Malformed identifier", body = ErrorEnvelopeSchema),
        (status = 404, description = "No todo with this identifier", body = ErrorEnvelopeSchema),
        (status = 500, description = "Database error", body = ErrorEnvelopeSchema)
    ),
    tags = ["todos"],
    operation_id = "deleteTodo"
)]
pub async fn delete_todo(
    state: web::Data<HttpState>,
    todo_id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state
        .todos_command
        .delete(&todo_id)
        .await
        .map_err(ApiError::during(Operation::DeleteTodo))?;
    Ok(HttpResponse::Ok().json(ApiEnvelope::message(DELETED_MESSAGE)))
}

#[cfg(test)]
#[path = "todos_tests.rs"]
mod tests;
