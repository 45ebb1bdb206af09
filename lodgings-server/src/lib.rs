//! lodgings-server: paginated CRUD HTTP API for the lodgings collection
//!
//! Storage lives behind the [`store::LodgingStore`] trait with two
//! backends: an in-memory map for tests and single-process deployments,
//! and PostgreSQL for persistent deployments. The HTTP layer never knows
//! which one it is talking to.

pub mod config;
pub mod http;
pub mod models;
pub mod store;

pub use config::{DatabaseConfig, ServerConfig};
pub use http::{run_server, ApiError};
pub use store::{LodgingStore, StoreError};
