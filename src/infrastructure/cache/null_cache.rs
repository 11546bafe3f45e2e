//! No-op cache implementation for disabled caching.

use super::store::{CacheError, CacheResult, CacheStore};
use std::time::Duration;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Saves are dropped and every lookup misses, so a decorator wrapped around it
/// always reads through to its backend.
///
/// # Use Cases
///
/// - Deployments running with `CACHE_ENABLED=false`
/// - Tests where caching should be bypassed
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore for NullCache {
    fn save_raw(&self, _key: &str, _value: Vec<u8>, _ttl: Option<Duration>) -> CacheResult<()> {
        Ok(())
    }

    fn get_raw(&self, _key: &str) -> CacheResult<Vec<u8>> {
        Err(CacheError::NotFound)
    }

    fn delete(&self, _key: &str) -> CacheResult<()> {
        Ok(())
    }
}
