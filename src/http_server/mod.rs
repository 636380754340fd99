//! # blogd HTTP Server Module
//!
//! Axum-based HTTP layer over the post store. The HTTP layer parses and
//! validates requests, calls into [`crate::store::PostStore`], and maps
//! results and errors to status codes and JSON bodies.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/posts` - List (GET) and create (POST)
//! - `/api/posts/:id` - Update (PUT) and delete (DELETE)
//! - `/api/posts/search` - Substring search (GET)

pub mod config;
pub mod errors;
pub mod post_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use post_routes::{post_routes, AppState};
pub use server::HttpServer;
