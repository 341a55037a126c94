//! Time-bounded cache for fetched NeoWs responses.
//!
//! Entries expire once they are strictly older than the TTL and are evicted
//! lazily on lookup. The cache is a plain owned value; share it across
//! threads by wrapping it in a lock.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::EngineConfig;

/// Cache key for a browse page.
pub fn browse_key(page: u32) -> String {
    format!("browse:{page}")
}

/// Cache key for a single asteroid.
pub fn neo_key(id: &str) -> String {
    format!("neo:{id}")
}

#[derive(Clone, Debug)]
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

#[derive(Clone, Debug)]
pub struct TtlCache<V> {
    ttl: Duration,
    entries: HashMap<String, CacheEntry<V>>,
}

impl<V> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(Duration::from_secs(config.neo_cache_ttl_secs))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        self.insert_at(key, value, Instant::now());
    }

    /// Insert with an explicit timestamp.
    pub fn insert_at(&mut self, key: impl Into<String>, value: V, now: Instant) {
        self.entries.insert(
            key.into(),
            CacheEntry {
                value,
                stored_at: now,
            },
        );
    }

    pub fn get(&mut self, key: &str) -> Option<&V> {
        self.get_at(key, Instant::now())
    }

    /// Look up `key` as of `now`, evicting it if it has expired.
    pub fn get_at(&mut self, key: &str, now: Instant) -> Option<&V> {
        let age = now.saturating_duration_since(self.entries.get(key)?.stored_at);
        if age > self.ttl {
            self.entries.remove(key);
            debug!(key, age_secs = age.as_secs_f64(), "evicted expired cache entry");
            return None;
        }
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Drop every entry that has expired as of `now`.
    pub fn purge_expired(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.stored_at) <= ttl);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
