//! HTTP server layer
//!
//! Axum server with:
//! - CORS matching the game frontend's needs
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses (`{success, error, message}`)

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
