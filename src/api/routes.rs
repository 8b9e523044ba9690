//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    http::{
        header::{
            InvalidHeaderValue, ACCEPT, ACCEPT_ENCODING, AUTHORIZATION, CACHE_CONTROL,
            CONTENT_LENGTH, CONTENT_TYPE, ORIGIN,
        },
        HeaderName, HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{
    get_all_handler, get_handler, health_handler, set_handler, stats_handler, AppState,
};

/// Builds the CORS policy: one allowed origin and the methods the
/// browser client uses.
///
/// Fails if `origin` is not a valid header value.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(origin)?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH])
        .allow_headers([
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT_ENCODING,
            HeaderName::from_static("x-csrf-token"),
            AUTHORIZATION,
            ACCEPT,
            ORIGIN,
            CACHE_CONTROL,
            HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers([CONTENT_LENGTH]))
}

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /set` - Store a key-value pair with an optional duration
/// - `GET /get?key=` - Retrieve a value by key
/// - `GET /get-all` - List live entries, newest first
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: the given policy
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/set", post(set_handler))
        .route("/get", get(get_handler))
        .route("/get-all", get(get_all_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
