//! HTTP inbound adapter exposing the todo REST endpoints.

pub mod envelope;
pub mod error;
pub mod health;
pub mod payload;
pub mod schemas;
pub mod state;
pub mod todos;

use actix_web::web;

pub use error::{ApiError, ApiResult};

/// Register the todo routes.
///
/// Every route also answers with a trailing slash (`/todos/`,
/// `/todos/{todo_id}/`), the form browser clients tend to send.
pub fn configure_todos(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["/todos", "/todos/"])
            .route(web::get().to(todos::list_todos))
            .route(web::post().to(todos::create_todo)),
    )
    .service(
        web::resource(["/todos/{todo_id}", "/todos/{todo_id}/"])
            .route(web::patch().to(todos::update_todo))
            .route(web::delete().to(todos::delete_todo)),
    );
}
