//! Caching layer for fast short code lookups.
//!
//! Provides a [`CacheStore`] trait with two implementations:
//! - [`MemoryCacheStore`] - In-process store with per-entry expiry
//! - [`NullCache`] - No-op implementation for disabled caching
//!
//! and [`CachedShortUrlRepository`], the repository decorator that reads
//! through a store and invalidates it on writes.

mod cached_repository;
mod memory_cache;
mod null_cache;
mod store;

pub use cached_repository::{CachedShortUrlRepository, LOOKUP_CACHE_TTL};
pub use memory_cache::MemoryCacheStore;
pub use null_cache::NullCache;
pub use store::{CacheError, CacheResult, CacheStore, CacheStoreExt};
