//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl, ShortUrlFilter};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ShortUrlRow {
    id: i64,
    code: String,
    full_url: String,
    domain: String,
    hit_count: i64,
    expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(r: ShortUrlRow) -> Self {
        ShortUrl {
            id: r.id,
            code: r.code,
            full_url: r.full_url,
            domain: r.domain,
            hit_count: r.hit_count,
            expires_at: r.expires_at,
            created_at: r.created_at,
        }
    }
}

/// PostgreSQL repository for the `short_urls` table.
///
/// Uses SQLx prepared statements for SQL injection protection. Unique
/// violations on `code` surface as [`AppError::UniqueViolation`].
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            INSERT INTO short_urls (code, full_url, domain, expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, code, full_url, domain, hit_count, expires_at, created_at
            "#,
        )
        .bind(&new_url.code)
        .bind(&new_url.full_url)
        .bind(&new_url.domain)
        .bind(new_url.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<ShortUrl, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, code, full_url, domain, hit_count, expires_at, created_at
            FROM short_urls
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Into::into).ok_or(AppError::RecordNotFound)
    }

    async fn update(&self, short_url: &ShortUrl) -> Result<(), AppError> {
        if short_url.id == 0 {
            return Err(AppError::RecordNotFound);
        }

        let result = sqlx::query(
            r#"
            UPDATE short_urls
            SET full_url = $2, domain = $3, expires_at = $4
            WHERE id = $1
            "#,
        )
        .bind(short_url.id)
        .bind(&short_url.full_url)
        .bind(&short_url.domain)
        .bind(short_url.expires_at)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::RecordNotFound);
        }

        Ok(())
    }

    async fn increase_hit_count(&self, code: &str, delta: i64) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE short_urls SET hit_count = hit_count + $2 WHERE code = $1")
            .bind(code)
            .bind(delta)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::RecordNotFound);
        }

        Ok(())
    }

    async fn list(
        &self,
        offset: i64,
        size: i64,
        filter: Option<ShortUrlFilter>,
    ) -> Result<(Vec<ShortUrl>, i64), AppError> {
        let filter = filter.unwrap_or_default();

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM short_urls
            WHERE ($1::text IS NULL OR code = $1)
              AND ($2::text IS NULL OR strpos(domain, $2) > 0)
            "#,
        )
        .bind(&filter.code)
        .bind(&filter.keyword)
        .fetch_one(self.pool.as_ref())
        .await?;

        let rows = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, code, full_url, domain, hit_count, expires_at, created_at
            FROM short_urls
            WHERE ($1::text IS NULL OR code = $1)
              AND ($2::text IS NULL OR strpos(domain, $2) > 0)
            ORDER BY id ASC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(&filter.code)
        .bind(&filter.keyword)
        .bind(size.max(0))
        .bind(offset.max(0))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }
}
