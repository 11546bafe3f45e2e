//! Core short URL service: creation, resolution, deletion and listing.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{debug, info};

use super::url_shortener::UrlShortener;
use crate::domain::entities::{FindParams, FindResult, NewShortUrl, ShortUrlInput};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::extract_domain::extract_domain;

/// How many hours into the past a deleted record's expiration is moved.
const DELETE_BACKDATE_HOURS: i64 = 1;

/// Service implementing the short URL lifecycle on top of a repository.
///
/// A record is either active or expired. There is no separate deleted state:
/// [`UrlShortener::delete`] backdates the expiration, so deleted codes stay
/// reserved. Collisions on create are reported, never retried.
pub struct ShortenerService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ShortUrlRepository + ?Sized> ShortenerService<R> {
    /// Creates a new shortener service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ShortUrlRepository + ?Sized> UrlShortener for ShortenerService<R> {
    /// # Errors
    ///
    /// - [`AppError::InvalidExpiresIn`] if `expires_in` is negative (checked first)
    ///   or puts the expiration beyond the representable date range
    /// - [`AppError::InvalidUrl`] if the URL is not absolute or has no host
    /// - [`AppError::UniqueViolation`] if the generated code already exists
    async fn create(&self, input: ShortUrlInput) -> Result<String, AppError> {
        if input.expires_in < 0 {
            return Err(AppError::InvalidExpiresIn);
        }

        let expires_at = match input.expires_in {
            0 => None,
            secs => Some(
                Duration::try_seconds(secs)
                    .and_then(|ttl| Utc::now().checked_add_signed(ttl))
                    .ok_or(AppError::InvalidExpiresIn)?,
            ),
        };

        let domain = extract_domain(&input.url)?;
        let code = generate_code()?;

        let created = self
            .repository
            .create(NewShortUrl {
                code,
                full_url: input.url,
                domain,
                expires_at,
            })
            .await?;

        info!(code = %created.code, domain = %created.domain, "Short URL created");
        Ok(created.code)
    }

    async fn find_urls(&self, params: FindParams) -> Result<FindResult, AppError> {
        let (data, total_count) = self
            .repository
            .list(params.offset.max(0), params.size, params.filter)
            .await?;

        Ok(FindResult { data, total_count })
    }

    /// # Errors
    ///
    /// Returns [`AppError::RecordNotFound`] if the lookup fails for any reason.
    async fn delete(&self, code: &str) -> Result<(), AppError> {
        let mut short_url = self.repository.find_by_code(code).await.map_err(|e| {
            debug!(code, error = %e, "Delete lookup failed");
            AppError::RecordNotFound
        })?;

        short_url.expires_at = Some(Utc::now() - Duration::hours(DELETE_BACKDATE_HOURS));
        self.repository.update(&short_url).await?;

        info!(code, "Short URL deleted");
        Ok(())
    }

    async fn increase_hit_count(&self, code: &str) -> Result<(), AppError> {
        self.repository.increase_hit_count(code, 1).await
    }

    /// # Errors
    ///
    /// - [`AppError::RecordNotFound`] if no record has this code
    /// - [`AppError::ShortUrlExpired`] if the record has expired; no hit is counted
    async fn get_full_url(&self, code: &str) -> Result<String, AppError> {
        let short_url = self.repository.find_by_code(code).await?;

        if short_url.is_expired() {
            return Err(AppError::ShortUrlExpired);
        }

        self.repository
            .increase_hit_count(&short_url.code, 1)
            .await?;

        Ok(short_url.full_url)
    }
}
