//! In-process cache store with lazy expiry.

use super::store::{CacheError, CacheResult, CacheStore};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::trace;

struct Entry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|e| e <= now)
    }
}

/// Thread-safe in-memory [`CacheStore`].
///
/// A single lock guards the whole map, so operations on different keys
/// serialize against each other. There is no background sweeper: an expired
/// entry is removed the moment a [`CacheStore::get_raw`] observes it.
pub struct MemoryCacheStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Number of entries currently held, including expired ones not yet observed.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore for MemoryCacheStore {
    fn save_raw(&self, key: &str, value: Vec<u8>, ttl: Option<Duration>) -> CacheResult<()> {
        // A TTL past the clock's range means the entry never expires.
        let expires_at = ttl.and_then(|ttl| Instant::now().checked_add(ttl));

        self.entries
            .lock()
            .insert(key.to_string(), Entry { value, expires_at });

        Ok(())
    }

    fn get_raw(&self, key: &str) -> CacheResult<Vec<u8>> {
        let mut entries = self.entries.lock();

        match entries.get(key) {
            None => return Err(CacheError::NotFound),
            Some(entry) if !entry.is_expired(Instant::now()) => return Ok(entry.value.clone()),
            Some(_) => {}
        }

        trace!(key, "Evicting expired cache entry");
        entries.remove(key);
        Err(CacheError::NotFound)
    }

    fn delete(&self, key: &str) -> CacheResult<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}
