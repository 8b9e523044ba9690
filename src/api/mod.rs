//! API Module
//!
//! HTTP handlers and routing for the cache server.
//!
//! # Endpoints
//! - `POST /set` - Store a key-value pair
//! - `GET /get?key=` - Retrieve a value by key
//! - `GET /get-all` - List all live entries
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{cors_layer, create_router};
