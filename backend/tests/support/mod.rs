//! Shared helpers for HTTP integration tests.

use std::sync::{Arc, Mutex};

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test as actix_test, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use serde_json::Value;
use todo_backend::domain::TodoService;
use todo_backend::inbound::http::health::HealthState;
use todo_backend::inbound::http::state::HttpState;
use todo_backend::server::build_app;
use todo_backend::test_support::InMemoryTodoRepository;

/// Clock advancing one second per reading so creation order is total.
pub struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            next: Mutex::new(start),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().expect("clock lock");
        let now = *next;
        *next = now + chrono::Duration::seconds(1);
        now
    }
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .expect("valid start time")
}

/// Build the production app over `repository`, already marked ready.
pub async fn init_app(
    repository: Arc<InMemoryTodoRepository>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let service = TodoService::new(
        repository,
        Arc::new(SteppingClock::starting_at(start_time())),
    );
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    actix_test::init_service(build_app(
        health,
        web::Data::new(HttpState::from_service(service)),
    ))
    .await
}

/// Send `request` and decode the JSON body.
pub async fn send<S>(app: &S, request: actix_test::TestRequest) -> (u16, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let response = actix_test::call_service(app, request.to_request()).await;
    let status = response.status().as_u16();
    let body = actix_test::read_body_json(response).await;
    (status, body)
}
