//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: MongoDB-backed todo repository and its connector.
//!
//! Adapters are thin translators between domain types and the store's
//! document representation. They contain no business logic.

pub mod persistence;
