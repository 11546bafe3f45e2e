//! Repository trait for short URL storage.

use crate::domain::entities::{NewShortUrl, ShortUrl, ShortUrlFilter};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable store of short URL records keyed by code.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryShortUrlRepository`] - in-process
/// - [`crate::infrastructure::cache::CachedShortUrlRepository`] - read-through cache decorator
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Persists a new record and returns it with its assigned identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UniqueViolation`] if the code is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a record by code, including expired ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RecordNotFound`] if no record has this code.
    async fn find_by_code(&self, code: &str) -> Result<ShortUrl, AppError>;

    /// Writes a record back by identity (`id`).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RecordNotFound`] if `id` is unset or unknown.
    async fn update(&self, short_url: &ShortUrl) -> Result<(), AppError>;

    /// Atomically adds `delta` to the hit count of `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RecordNotFound`] if no row was affected.
    async fn increase_hit_count(&self, code: &str, delta: i64) -> Result<(), AppError>;

    /// Lists records in stored order.
    ///
    /// Returns the requested page and the number of records matching `filter`
    /// ignoring pagination. A negative `offset` is treated as 0.
    async fn list(
        &self,
        offset: i64,
        size: i64,
        filter: Option<ShortUrlFilter>,
    ) -> Result<(Vec<ShortUrl>, i64), AppError>;
}
