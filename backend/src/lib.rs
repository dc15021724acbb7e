//! Todo backend: a small REST service storing todos in MongoDB.
//!
//! Layout follows a hexagonal split: [`domain`] holds the entity, validation,
//! service and ports; [`inbound`] adapts HTTP onto the driving ports;
//! [`outbound`] implements the repository port against MongoDB; [`server`]
//! wires everything into an actix-web application.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
