//! URL blacklist decorator for the shortener service.

use async_trait::async_trait;
use regex::Regex;
use std::sync::Arc;
use tracing::warn;

use super::url_shortener::UrlShortener;
use crate::domain::entities::{FindParams, FindResult, ShortUrlInput};
use crate::error::AppError;

/// Rejects URLs matching any configured pattern, on both create and resolve.
///
/// - `create` checks the input URL before delegating, so a blocked URL is never
///   persisted.
/// - `get_full_url` delegates first and checks the resolved URL afterwards. The
///   wrapped service has already counted the hit by then, so a blocked resolution
///   still increments the hit count.
/// - `delete`, `increase_hit_count` and `find_urls` pass through unfiltered.
pub struct BlacklistShortener<S: ?Sized> {
    inner: Arc<S>,
    patterns: Vec<Regex>,
}

impl<S: UrlShortener + ?Sized> BlacklistShortener<S> {
    /// Compiles `patterns` and wraps `inner`.
    ///
    /// # Errors
    ///
    /// Returns the first pattern compilation error. Callers treat this as fatal.
    pub fn new<I, P>(inner: Arc<S>, patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { inner, patterns })
    }

    /// Number of compiled patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    fn validate(&self, url: &str) -> Result<(), AppError> {
        if let Some(pattern) = self.patterns.iter().find(|p| p.is_match(url)) {
            warn!(url, pattern = pattern.as_str(), "Blocked URL");
            return Err(AppError::BlockedUrl);
        }
        Ok(())
    }
}

#[async_trait]
impl<S: UrlShortener + ?Sized> UrlShortener for BlacklistShortener<S> {
    async fn create(&self, input: ShortUrlInput) -> Result<String, AppError> {
        self.validate(&input.url)?;
        self.inner.create(input).await
    }

    async fn find_urls(&self, params: FindParams) -> Result<FindResult, AppError> {
        self.inner.find_urls(params).await
    }

    async fn delete(&self, code: &str) -> Result<(), AppError> {
        self.inner.delete(code).await
    }

    async fn increase_hit_count(&self, code: &str) -> Result<(), AppError> {
        self.inner.increase_hit_count(code).await
    }

    async fn get_full_url(&self, code: &str) -> Result<String, AppError> {
        let full_url = self.inner.get_full_url(code).await?;
        self.validate(&full_url)?;
        Ok(full_url)
    }
}
