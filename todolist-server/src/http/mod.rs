//! HTTP layer
//!
//! Axum server with:
//! - Server-rendered list pages
//! - Post/redirect/get forms for adding and deleting items
//! - Request tracing and graceful shutdown

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;
pub mod view;

pub use error::PageError;
pub use extractors::PageForm;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
