//! Read-through caching decorator for short URL repositories.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace, warn};

use super::store::{CacheError, CacheStore, CacheStoreExt};
use crate::domain::entities::{NewShortUrl, ShortUrl, ShortUrlFilter};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

/// Lifetime of a cached point lookup.
pub const LOOKUP_CACHE_TTL: Duration = Duration::from_secs(10);

/// A repository decorator that caches point lookups.
///
/// Composes any [`ShortUrlRepository`] with any [`CacheStore`]:
///
/// - `find_by_code` is served from the cache while the entry is fresh; on a miss the
///   inner repository is queried and the result cached for [`LOOKUP_CACHE_TTL`].
///   Inner errors are returned unchanged and never cached.
/// - `update` evicts the cached entry *before* writing through, so a concurrent
///   read cannot repopulate the cache with the pre-update snapshot after the evict.
/// - Everything else passes straight through.
///
/// A failure to populate the cache fails the lookup.
pub struct CachedShortUrlRepository<R: ?Sized, C: ?Sized> {
    inner: Arc<R>,
    cache: Arc<C>,
    ttl: Duration,
}

impl<R, C> CachedShortUrlRepository<R, C>
where
    R: ShortUrlRepository + ?Sized,
    C: CacheStore + ?Sized,
{
    /// Creates a new cached repository decorator using [`LOOKUP_CACHE_TTL`].
    pub fn new(inner: Arc<R>, cache: Arc<C>) -> Self {
        Self::with_ttl(inner, cache, LOOKUP_CACHE_TTL)
    }

    pub(crate) fn with_ttl(inner: Arc<R>, cache: Arc<C>, ttl: Duration) -> Self {
        Self { inner, cache, ttl }
    }

    /// Returns a reference to the inner repository.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns a reference to the cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    fn cached(&self, code: &str) -> Option<ShortUrl> {
        match self.cache.get::<ShortUrl>(code) {
            Ok(short_url) => {
                debug!(code, "Cache HIT");
                Some(short_url)
            }
            Err(CacheError::NotFound) => {
                debug!(code, "Cache MISS");
                None
            }
            Err(e) => {
                warn!(code, error = %e, "Unreadable cache entry, treating as miss");
                None
            }
        }
    }
}

#[async_trait]
impl<R, C> ShortUrlRepository for CachedShortUrlRepository<R, C>
where
    R: ShortUrlRepository + ?Sized,
    C: CacheStore + ?Sized,
{
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        self.inner.create(new_url).await
    }

    async fn find_by_code(&self, code: &str) -> Result<ShortUrl, AppError> {
        if let Some(short_url) = self.cached(code) {
            return Ok(short_url);
        }

        let short_url = self.inner.find_by_code(code).await?;

        self.cache
            .save(&short_url.code, &short_url, Some(self.ttl))?;
        trace!(code, ttl_ms = self.ttl.as_millis() as u64, "Cache SET");

        Ok(short_url)
    }

    async fn update(&self, short_url: &ShortUrl) -> Result<(), AppError> {
        self.cache.delete(&short_url.code)?;
        debug!(code = %short_url.code, "Cache INVALIDATE");

        self.inner.update(short_url).await
    }

    async fn increase_hit_count(&self, code: &str, delta: i64) -> Result<(), AppError> {
        self.inner.increase_hit_count(code, delta).await
    }

    async fn list(
        &self,
        offset: i64,
        size: i64,
        filter: Option<ShortUrlFilter>,
    ) -> Result<(Vec<ShortUrl>, i64), AppError> {
        self.inner.list(offset, size, filter).await
    }
}
