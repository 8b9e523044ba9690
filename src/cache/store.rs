//! Cache Store Module
//!
//! Main cache engine: a fixed-capacity recency list with lazy TTL expiry.

use std::time::Instant;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, RecencyList, Ttl, CAPACITY};

// == Cache Store ==
/// Bounded cache storage with insertion-order eviction and lazy expiry.
///
/// Entries are kept newest first. Eviction always takes the tail, which is
/// the least recently *inserted* entry: reads never reorder the list.
/// Expired entries are only discovered by a lookup or a sweep; nothing runs
/// in the background.
///
/// The store is not synchronized. Share it behind a lock and hold the guard
/// for the whole call.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Entries, newest first
    entries: RecencyList<V>,
    /// Activity counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store holding at most [`CAPACITY`] entries.
    pub fn new() -> Self {
        Self {
            entries: RecencyList::with_capacity(CAPACITY),
            stats: CacheStats::new(),
            capacity: CAPACITY,
        }
    }

    // == Set ==
    /// Inserts a key-value pair at the head of the recency order.
    ///
    /// [`Ttl::Default`] or a zero lifetime falls back to
    /// [`DEFAULT_TTL`](crate::cache::DEFAULT_TTL). When the store is full,
    /// the tail is evicted first whether or not it has expired. After
    /// insertion every expired entry is swept, so a [`Ttl::Elapsed`] entry
    /// still takes part in eviction but never becomes visible.
    ///
    /// An existing entry with the same key is left in place; it becomes
    /// unreachable behind the new one until it is evicted or expires.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Ttl) {
        self.set_at(key, value, ttl, Instant::now());
    }

    /// [`set`](Self::set) evaluated at a given instant.
    pub fn set_at(&mut self, key: impl Into<String>, value: V, ttl: Ttl, now: Instant) {
        if self.entries.len() >= self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                debug!(key = %evicted.key, "evicted tail entry");
                self.stats.record_eviction();
            }
        }

        match ttl.deadline(now) {
            Some(expires_at) => {
                self.entries.push_front(CacheEntry::new(key.into(), value, expires_at));
            }
            None => {
                // Deadline predates the clock; the sweep would drop it anyway
                self.stats.record_expirations(1);
            }
        }

        self.cleanup_expired_at(now);
    }

    // == Get ==
    /// Returns the value of the newest entry for `key`.
    ///
    /// If that entry has expired it is removed and `None` is returned; older
    /// duplicates of the key are not consulted. The entry keeps its position.
    pub fn get(&mut self, key: &str) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    /// [`get`](Self::get) evaluated at a given instant.
    pub fn get_at(&mut self, key: &str, now: Instant) -> Option<V> {
        let Some(idx) = self.entries.find(|entry| entry.key == key) else {
            self.stats.record_miss();
            return None;
        };

        let expired = self
            .entries
            .get(idx)
            .map_or(true, |entry| entry.is_expired_at(now));

        if expired {
            self.entries.remove(idx);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            debug!(key, "removed expired entry on lookup");
            return None;
        }

        self.stats.record_hit();
        self.entries.get(idx).map(|entry| {
            debug!(key, remaining = ?entry.ttl_remaining_at(now), "cache hit");
            entry.value.clone()
        })
    }

    // == List All ==
    /// Sweeps expired entries, then snapshots the rest newest first.
    pub fn list_all(&mut self) -> Vec<(String, V)> {
        self.list_all_at(Instant::now())
    }

    /// [`list_all`](Self::list_all) evaluated at a given instant.
    pub fn list_all_at(&mut self, now: Instant) -> Vec<(String, V)> {
        self.cleanup_expired_at(now);
        self.entries
            .iter()
            .map(|(_, entry)| (entry.key.clone(), entry.value.clone()))
            .collect()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        self.cleanup_expired_at(Instant::now())
    }

    /// [`cleanup_expired`](Self::cleanup_expired) evaluated at a given instant.
    pub fn cleanup_expired_at(&mut self, now: Instant) -> usize {
        let removed = self.entries.retain(|entry| !entry.is_expired_at(now)).len();
        if removed > 0 {
            self.stats.record_expirations(removed);
            debug!(removed, remaining = self.entries.len(), "swept expired entries");
        }
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the activity counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Number of entries currently held, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Capacity ==
    /// Maximum number of entries held at once.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<V: Clone> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
