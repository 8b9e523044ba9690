//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;
use tokio::sync::Mutex;

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use tracing::debug;

use crate::cache::CacheStore;
use crate::error::{CacheError, Result};
use crate::models::{
    set_confirmation, EntryResponse, GetQuery, HealthResponse, SetRequest, StatsResponse,
};

/// Application state shared across all handlers.
///
/// Every engine call, reads included, may mutate the store (lazy expiry),
/// so access goes through an exclusive lock held for the whole call.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<Mutex<CacheStore<String>>>,
}

impl AppState {
    /// Creates a new AppState with the given cache store.
    pub fn new(cache: CacheStore<String>) -> Self {
        Self {
            cache: Arc::new(Mutex::new(cache)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CacheStore::new())
    }
}

/// Handler for POST /set
///
/// Decodes `{key, value, duration}` and stores the pair. The body is parsed
/// as JSON regardless of the request's content type.
pub async fn set_handler(State(state): State<AppState>, body: Bytes) -> Result<String> {
    let req: SetRequest =
        serde_json::from_slice(&body).map_err(|e| CacheError::InvalidRequest(e.to_string()))?;

    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let ttl = req.ttl();
    let message = set_confirmation(&req.key, &req.value);
    debug!(key = %req.key, ?ttl, "set");

    state.cache.lock().await.set(req.key, req.value, ttl);

    Ok(message)
}

/// Handler for GET /get?key=...
///
/// Responds with the JSON-encoded value, or 404 if the key is absent or
/// has expired.
pub async fn get_handler(
    State(state): State<AppState>,
    Query(query): Query<GetQuery>,
) -> Result<Json<String>> {
    let value = state.cache.lock().await.get(&query.key);

    value.map(Json).ok_or(CacheError::NotFound(query.key))
}

/// Handler for GET /get-all
///
/// Lists every live entry, newest first.
pub async fn get_all_handler(State(state): State<AppState>) -> Json<Vec<EntryResponse>> {
    let entries = state.cache.lock().await.list_all();

    Json(entries.into_iter().map(EntryResponse::from).collect())
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.lock().await;
    let stats = cache.stats();
    Json(StatsResponse::new(&stats, cache.capacity()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
