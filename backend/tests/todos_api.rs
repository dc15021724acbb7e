//! End-to-end behaviour of the todo API over an in-memory store.

use std::sync::Arc;

use actix_web::test::TestRequest;
use rstest::rstest;
use serde_json::{Value, json};
use todo_backend::domain::ports::TodoRepositoryError;
use todo_backend::domain::{Todo, TodoId};
use todo_backend::test_support::InMemoryTodoRepository;

mod support;

use support::{init_app, send};

const ABSENT_ID: &str = "65f1a2b3c4d5e6f708192a3b";

fn created_id(body: &Value) -> String {
    body["data"]["id"]
        .as_str()
        .expect("created todo has an id")
        .to_owned()
}

fn descriptions(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .expect("data is a list")
        .iter()
        .map(|todo| todo["description"].as_str().unwrap_or_default().to_owned())
        .collect()
}

#[rstest]
#[case("Water the plants", "Water the plants")]
#[case("   padded   ", "padded")]
#[case("x", "x")]
#[actix_web::test]
async fn created_todos_are_listed_trimmed(#[case] raw: &str, #[case] expected: &str) {
    let app = init_app(Arc::new(InMemoryTodoRepository::new())).await;

    let (create_status, created) = send(
        &app,
        TestRequest::post()
            .uri("/todos")
            .set_json(json!({ "description": raw })),
    )
    .await;
    assert_eq!(create_status, 201);
    assert_eq!(created["success"], json!(true));
    assert_eq!(created["message"], json!("Todo created successfully"));
    assert_eq!(created["data"]["completed"], json!(false));
    assert_eq!(created["data"]["created_at"], json!("2024-05-01T12:00:00.000Z"));
    assert!(TodoId::parse(&created_id(&created)).is_ok());

    let (list_status, listed) = send(&app, TestRequest::get().uri("/todos")).await;
    assert_eq!(list_status, 200);
    assert_eq!(listed["count"], json!(1));
    assert_eq!(descriptions(&listed), [expected]);
}

#[rstest]
#[case(json!({ "description": "" }), "Description cannot be empty")]
#[case(json!({ "description": "   " }), "Description cannot be empty")]
#[case(json!({}), "Description cannot be empty")]
#[case(json!({ "description": "a".repeat(501) }), "Description exceeds 500 characters")]
#[case(
    json!({ "description": format!("ok{}", " ".repeat(499)) }),
    "Description exceeds 500 characters"
)]
#[actix_web::test]
async fn invalid_descriptions_are_rejected(#[case] payload: Value, #[case] message: &str) {
    let repository = Arc::new(InMemoryTodoRepository::new());
    let app = init_app(repository.clone()).await;

    let (status, body) = send(&app, TestRequest::post().uri("/todos").set_json(payload)).await;

    assert_eq!(status, 400);
    assert_eq!(body, json!({ "success": false, "error": message }));
    assert!(repository.is_empty());
}

#[rstest]
#[actix_web::test]
async fn empty_store_lists_nothing() {
    let app = init_app(Arc::new(InMemoryTodoRepository::new())).await;

    let (status, body) = send(&app, TestRequest::get().uri("/todos")).await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "success": true, "data": [], "count": 0 }));
}

#[rstest]
#[actix_web::test]
async fn listing_is_newest_first() {
    let app = init_app(Arc::new(InMemoryTodoRepository::new())).await;
    for description in ["first", "second", "third"] {
        send(
            &app,
            TestRequest::post()
                .uri("/todos")
                .set_json(json!({ "description": description })),
        )
        .await;
    }

    let (_, body) = send(&app, TestRequest::get().uri("/todos")).await;

    assert_eq!(descriptions(&body), ["third", "second", "first"]);
}

#[rstest]
#[actix_web::test]
async fn completion_flag_round_trips() {
    let app = init_app(Arc::new(InMemoryTodoRepository::new())).await;
    let (_, created) = send(
        &app,
        TestRequest::post()
            .uri("/todos")
            .set_json(json!({ "description": "ship it" })),
    )
    .await;
    let id = created_id(&created);

    let (first_status, body) = send(
        &app,
        TestRequest::patch()
            .uri(&format!("/todos/{id}"))
            .set_json(json!({ "completed": true })),
    )
    .await;
    assert_eq!(first_status, 200);
    assert_eq!(
        body,
        json!({ "success": true, "message": "Todo updated successfully" })
    );

    // Repeating the same value still matches the document.
    let (repeat_status, _) = send(
        &app,
        TestRequest::patch()
            .uri(&format!("/todos/{id}"))
            .set_json(json!({ "completed": true })),
    )
    .await;
    assert_eq!(repeat_status, 200);

    let (_, listed) = send(&app, TestRequest::get().uri("/todos")).await;
    assert_eq!(listed["data"][0]["completed"], json!(true));
}

#[rstest]
#[case(json!({ "completed": true }), 400, "Invalid todo ID format", "not-a-valid-id")]
#[case(json!({ "completed": true }), 404, "Todo with id 65f1a2b3c4d5e6f708192a3b not found", ABSENT_ID)]
#[case(json!({}), 400, "completed field is required", ABSENT_ID)]
#[case(json!({ "completed": "yes" }), 400, "Invalid JSON payload", ABSENT_ID)]
#[actix_web::test]
async fn update_failures_map_to_client_errors(
    #[case] payload: Value,
    #[case] status: u16,
    #[case] message: &str,
    #[case] id: &str,
) {
    let app = init_app(Arc::new(InMemoryTodoRepository::new())).await;

    let (actual, body) = send(
        &app,
        TestRequest::patch()
            .uri(&format!("/todos/{id}"))
            .set_json(payload),
    )
    .await;

    assert_eq!(actual, status);
    assert_eq!(body, json!({ "success": false, "error": message }));
}

#[rstest]
#[actix_web::test]
async fn deleting_twice_reports_not_found() {
    let repository = Arc::new(InMemoryTodoRepository::new());
    let app = init_app(repository.clone()).await;
    let (_, created) = send(
        &app,
        TestRequest::post()
            .uri("/todos")
            .set_json(json!({ "description": "temporary" })),
    )
    .await;
    let id = created_id(&created);

    let (first, first_body) = send(&app, TestRequest::delete().uri(&format!("/todos/{id}"))).await;
    assert_eq!(first, 200);
    assert_eq!(
        first_body,
        json!({ "success": true, "message": "Todo deleted successfully" })
    );
    assert!(repository.is_empty());

    let (second, second_body) = send(&app, TestRequest::delete().uri(&format!("/todos/{id}"))).await;
    assert_eq!(second, 404);
    assert_eq!(
        second_body["error"],
        json!(format!("Todo with id {id} not found"))
    );
}

#[rstest]
#[actix_web::test]
async fn delete_rejects_malformed_id() {
    let app = init_app(Arc::new(InMemoryTodoRepository::new())).await;

    let (status, body) = send(&app, TestRequest::delete().uri("/todos/12345")).await;

    assert_eq!(status, 400);
    assert_eq!(body, json!({ "success": false, "error": "Invalid todo ID format" }));
}

#[rstest]
#[actix_web::test]
async fn trailing_slashes_are_accepted() {
    let app = init_app(Arc::new(InMemoryTodoRepository::new())).await;

    let (create_status, created) = send(
        &app,
        TestRequest::post()
            .uri("/todos/")
            .set_json(json!({ "description": "slash" })),
    )
    .await;
    assert_eq!(create_status, 201);
    let id = created_id(&created);

    let (update_status, _) = send(
        &app,
        TestRequest::patch()
            .uri(&format!("/todos/{id}/"))
            .set_json(json!({ "completed": true })),
    )
    .await;
    assert_eq!(update_status, 200);

    let (list_status, listed) = send(&app, TestRequest::get().uri("/todos/")).await;
    assert_eq!(list_status, 200);
    assert_eq!(listed["count"], json!(1));

    let (delete_status, _) = send(&app, TestRequest::delete().uri(&format!("/todos/{id}/"))).await;
    assert_eq!(delete_status, 200);
}

#[rstest]
#[actix_web::test]
async fn bodiless_create_reports_an_empty_description() {
    let repository = Arc::new(InMemoryTodoRepository::new());
    let app = init_app(repository.clone()).await;

    let (status, body) = send(&app, TestRequest::post().uri("/todos/")).await;

    assert_eq!(status, 400);
    assert_eq!(body, json!({ "success": false, "error": "Description cannot be empty" }));
    assert!(repository.is_empty());
}

#[rstest]
#[actix_web::test]
async fn malformed_json_gets_the_error_envelope() {
    let app = init_app(Arc::new(InMemoryTodoRepository::new())).await;

    let (status, body) = send(
        &app,
        TestRequest::post()
            .uri("/todos")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"description\":"),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body, json!({ "success": false, "error": "Invalid JSON payload" }));
}

#[rstest]
#[case(TodoRepositoryError::connection("server selection timeout"), "Database error occurred")]
#[case(TodoRepositoryError::query("not primary"), "Database error occurred")]
#[case(TodoRepositoryError::corrupt("_id is a string"), "An unexpected error occurred")]
#[actix_web::test]
async fn store_failures_answer_500_without_details(
    #[case] failure: TodoRepositoryError,
    #[case] message: &str,
) {
    let repository = Arc::new(InMemoryTodoRepository::new());
    repository.fail_with(Some(failure));
    let app = init_app(repository).await;

    let (status, body) = send(&app, TestRequest::get().uri("/todos")).await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({ "success": false, "error": message }));
}

#[rstest]
#[actix_web::test]
async fn legacy_documents_render_with_defaults() {
    let legacy = Todo {
        id: ABSENT_ID.to_owned(),
        description: String::new(),
        completed: false,
        created_at: None,
    };
    let app = init_app(Arc::new(InMemoryTodoRepository::with_todos(vec![legacy]))).await;

    let (_, body) = send(&app, TestRequest::get().uri("/todos")).await;

    assert_eq!(
        body["data"],
        json!([{
            "id": ABSENT_ID,
            "description": "",
            "completed": false,
            "created_at": null,
        }])
    );
}

#[rstest]
#[actix_web::test]
async fn todos_keyed_by_other_clients_still_list() {
    let foreign = Todo {
        id: "legacy-1".to_owned(),
        description: "from another client".to_owned(),
        completed: false,
        created_at: None,
    };
    let app = init_app(Arc::new(InMemoryTodoRepository::with_todos(vec![foreign]))).await;

    let (list_status, listed) = send(&app, TestRequest::get().uri("/todos")).await;
    assert_eq!(list_status, 200);
    assert_eq!(listed["data"][0]["id"], json!("legacy-1"));
    assert_eq!(listed["data"][0]["description"], json!("from another client"));

    let (update_status, rejected) = send(
        &app,
        TestRequest::patch()
            .uri("/todos/legacy-1")
            .set_json(json!({ "completed": true })),
    )
    .await;
    assert_eq!(update_status, 400);
    assert_eq!(rejected, json!({ "success": false, "error": "Invalid todo ID format" }));
}

#[rstest]
#[actix_web::test]
async fn responses_carry_a_trace_id() {
    let app = init_app(Arc::new(InMemoryTodoRepository::new())).await;

    let response = actix_web::test::call_service(
        &app,
        TestRequest::get().uri("/todos").to_request(),
    )
    .await;

    assert!(response.headers().contains_key("trace-id"));
}

#[rstest]
#[case("/health/ready")]
#[case("/health/live")]
#[actix_web::test]
async fn health_probes_report_ok(#[case] uri: &str) {
    let app = init_app(Arc::new(InMemoryTodoRepository::new())).await;

    let response =
        actix_web::test::call_service(&app, TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(response.status().as_u16(), 200);
}
