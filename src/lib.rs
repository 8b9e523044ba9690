//! Tiny Cache - A small in-memory HTTP cache
//!
//! Holds at most three entries with per-entry expiry, evicting the oldest
//! insertion when full.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::CacheStore;
pub use config::Config;
