//! Backend entry-point: loads configuration, connects the todo store and
//! serves the REST API.

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use todo_backend::domain::TodoService;
use todo_backend::inbound::http::health::HealthState;
use todo_backend::inbound::http::state::HttpState;
use todo_backend::outbound::persistence::{MongoConnector, MongoSettings, MongoTodoRepository};
use todo_backend::server::{ServerConfig, ServerSettings, create_server};

const APP_NAME: &str = "todo-backend";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

fn config_error(e: &impl std::fmt::Display) -> io::Error {
    io::Error::other(format!("configuration error: {e}"))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    init_tracing();

    let mongo_settings =
        MongoSettings::load_from_iter([OsString::from(APP_NAME)]).map_err(|e| config_error(&e))?;
    let server_settings =
        ServerSettings::load_from_iter([OsString::from(APP_NAME)]).map_err(|e| config_error(&e))?;

    let connector = MongoConnector::connect(&mongo_settings)
        .await
        .map_err(io::Error::other)?;
    match connector.ping().await {
        Ok(()) => info!(uri = %mongo_settings.connection_uri(), "connected to MongoDB"),
        Err(e) => warn!(
            uri = %mongo_settings.connection_uri(),
            error = %e,
            "MongoDB unreachable at start-up; requests will fail until it recovers"
        ),
    }

    let service = TodoService::new(
        Arc::new(MongoTodoRepository::new(connector)),
        Arc::new(DefaultClock),
    );
    let config = ServerConfig::from(&server_settings);
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, HttpState::from_service(service), config)?;
    info!(addr = %config.bind_addr(), "todo backend listening");
    server.await
}
