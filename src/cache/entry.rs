//! Cache Entry Module
//!
//! Defines a single cached item and its expiry deadline.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// One cached key/value pair with an absolute expiry deadline.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// Lookup key
    pub key: String,
    /// The stored value
    pub value: V,
    /// Instant after which the entry is dead
    pub expires_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry that dies after `expires_at`.
    pub fn new(key: String, value: V, expires_at: Instant) -> Self {
        Self {
            key,
            value,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks expiry against the given instant.
    ///
    /// Strictly after the deadline: an entry observed exactly at
    /// `expires_at` is still live.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now > self.expires_at
    }

    // == Time To Live ==
    /// Remaining lifetime as of `now`, zero once the deadline has passed.
    pub fn ttl_remaining_at(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}
