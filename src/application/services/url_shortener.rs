//! The capability surface exposed to callers of the shortener.

use async_trait::async_trait;

use crate::domain::entities::{FindParams, FindResult, ShortUrlInput};
use crate::error::AppError;

/// Operations offered to the transport layer.
///
/// Implemented by the core [`crate::application::services::ShortenerService`]
/// and by decorators such as [`crate::application::services::BlacklistShortener`],
/// which wrap another `UrlShortener` and forward what they do not intercept.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlShortener: Send + Sync {
    /// Creates a short URL and returns its code.
    async fn create(&self, input: ShortUrlInput) -> Result<String, AppError>;

    /// Returns one page of short URLs and the filtered total.
    async fn find_urls(&self, params: FindParams) -> Result<FindResult, AppError>;

    /// Logically deletes a short URL by expiring it.
    async fn delete(&self, code: &str) -> Result<(), AppError>;

    /// Adds one hit to a short URL.
    async fn increase_hit_count(&self, code: &str) -> Result<(), AppError>;

    /// Resolves a code to its full URL, counting the hit.
    async fn get_full_url(&self, code: &str) -> Result<String, AppError>;
}
