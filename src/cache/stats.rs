//! Cache Statistics Module
//!
//! Counters for lookups, evictions, and lazy expiry removals.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups that returned a live value
    pub hits: u64,
    /// Lookups that found nothing or an expired entry
    pub misses: u64,
    /// Entries dropped from the tail to make room on insert
    pub evictions: u64,
    /// Entries removed because their deadline had passed
    pub expirations: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Recorders ==
    /// Counts one lookup that returned a live value.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Counts one lookup that found nothing usable.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Counts one tail eviction.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Adds `count` lazy expiry removals.
    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    // == Total Entries ==
    /// Overwrites the current entry count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
