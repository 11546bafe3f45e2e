//! In-process implementation of the short URL repository.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::entities::{NewShortUrl, ShortUrl, ShortUrlFilter};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

#[derive(Default)]
struct Table {
    rows: Vec<ShortUrl>,
    next_id: i64,
}

/// Insertion-ordered, lock-guarded repository.
///
/// Mirrors the PostgreSQL backend: ids start at 1, codes are unique, hit counts
/// are incremented under the write lock, and listings come back in insertion order.
/// Used when no database is configured and throughout the tests.
#[derive(Default)]
pub struct MemoryShortUrlRepository {
    table: RwLock<Table>,
}

impl MemoryShortUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShortUrlRepository for MemoryShortUrlRepository {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let mut table = self.table.write();

        if table.rows.iter().any(|r| r.code == new_url.code) {
            return Err(AppError::UniqueViolation);
        }

        table.next_id += 1;
        let short_url = ShortUrl {
            id: table.next_id,
            code: new_url.code,
            full_url: new_url.full_url,
            domain: new_url.domain,
            hit_count: 0,
            expires_at: new_url.expires_at,
            created_at: Utc::now(),
        };
        table.rows.push(short_url.clone());

        Ok(short_url)
    }

    async fn find_by_code(&self, code: &str) -> Result<ShortUrl, AppError> {
        self.table
            .read()
            .rows
            .iter()
            .find(|r| r.code == code)
            .cloned()
            .ok_or(AppError::RecordNotFound)
    }

    async fn update(&self, short_url: &ShortUrl) -> Result<(), AppError> {
        if short_url.id == 0 {
            return Err(AppError::RecordNotFound);
        }

        let mut table = self.table.write();
        let row = table
            .rows
            .iter_mut()
            .find(|r| r.id == short_url.id)
            .ok_or(AppError::RecordNotFound)?;

        row.full_url = short_url.full_url.clone();
        row.domain = short_url.domain.clone();
        row.expires_at = short_url.expires_at;

        Ok(())
    }

    async fn increase_hit_count(&self, code: &str, delta: i64) -> Result<(), AppError> {
        let mut table = self.table.write();
        let row = table
            .rows
            .iter_mut()
            .find(|r| r.code == code)
            .ok_or(AppError::RecordNotFound)?;

        row.hit_count += delta;
        Ok(())
    }

    async fn list(
        &self,
        offset: i64,
        size: i64,
        filter: Option<ShortUrlFilter>,
    ) -> Result<(Vec<ShortUrl>, i64), AppError> {
        let offset = offset.max(0) as usize;
        let size = size.max(0) as usize;
        let filter = filter.unwrap_or_default();

        let table = self.table.read();
        let matching: Vec<&ShortUrl> = table.rows.iter().filter(|r| filter.matches(r)).collect();
        let total = matching.len() as i64;

        let page = matching
            .into_iter()
            .skip(offset)
            .take(size)
            .cloned()
            .collect();

        Ok((page, total))
    }
}
