//! Cache Module
//!
//! Bounded in-memory store with per-entry expiry and insertion-order eviction.

mod entry;
mod list;
mod stats;
mod store;
mod ttl;


use std::time::Duration;

// Re-export public types
pub use entry::CacheEntry;
pub use list::RecencyList;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use ttl::Ttl;

// == Public Constants ==
/// Maximum number of entries held at once
pub const CAPACITY: usize = 3;

/// Lifetime applied when a caller supplies no TTL or a zero TTL
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Upper bound on any single TTL (one year)
pub const MAX_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);
