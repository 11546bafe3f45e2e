//! Cache store trait and error types.

use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The key is absent or its entry has expired.
    #[error("cache key not found")]
    NotFound,

    #[error("cache serialization error: {0}")]
    Serialization(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Key → bytes store with optional per-entry expiry.
///
/// The store is value-type-agnostic: callers hand it opaque bytes, or use the
/// typed helpers on [`CacheStoreExt`] which serialize through JSON.
///
/// Implementations must be thread-safe.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCacheStore`] - in-process map with lazy eviction
/// - [`crate::infrastructure::cache::NullCache`] - no-op implementation for disabled caching
pub trait CacheStore: Send + Sync {
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// With `ttl` set, the entry expires at `now + ttl`; without it the entry only
    /// leaves the store through [`CacheStore::delete`].
    fn save_raw(&self, key: &str, value: Vec<u8>, ttl: Option<Duration>) -> CacheResult<()>;

    /// Returns the bytes stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::NotFound`] if the key is absent or its entry has expired.
    fn get_raw(&self, key: &str) -> CacheResult<Vec<u8>>;

    /// Removes `key`. Deleting an absent key is not an error.
    fn delete(&self, key: &str) -> CacheResult<()>;
}

/// Typed save/get on top of any [`CacheStore`].
pub trait CacheStoreExt: CacheStore {
    /// Serializes `value` and stores it under `key`.
    fn save<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
        ttl: Option<Duration>,
    ) -> CacheResult<()> {
        let buf =
            serde_json::to_vec(value).map_err(|e| CacheError::Serialization(e.to_string()))?;
        self.save_raw(key, buf, ttl)
    }

    /// Loads and deserializes the value stored under `key`.
    fn get<T: DeserializeOwned>(&self, key: &str) -> CacheResult<T> {
        let buf = self.get_raw(key)?;
        serde_json::from_slice(&buf).map_err(|e| CacheError::Serialization(e.to_string()))
    }
}

impl<C: CacheStore + ?Sized> CacheStoreExt for C {}
