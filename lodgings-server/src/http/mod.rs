//! HTTP layer - axum router, handlers, and error mapping
//!
//! JSON in, JSON out. Unknown paths and absent record ids share the
//! same 404 body naming the request path.

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState};
