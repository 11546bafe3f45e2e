//! ShortUrl entity representing a code → URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored short URL record.
///
/// `code` is unique across all records, including logically deleted ones.
/// `hit_count` only grows. Deletion is expressed by moving `expires_at` into
/// the past, so a record is never physically removed.
///
/// The serde representation is the cache snapshot format and keeps every field,
/// `id` included, so a cached record can still be written back by identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortUrl {
    pub id: i64,
    pub code: String,
    pub full_url: String,
    pub domain: String,
    pub hit_count: i64,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Returns true if the expiration timestamp is at or before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e <= now)
    }

    /// Returns true if the record has expired as of the current time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Input data for persisting a new short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub code: String,
    pub full_url: String,
    pub domain: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Caller input for creating a short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrlInput {
    pub url: String,
    /// Lifetime in seconds. `0` means the record never expires.
    pub expires_in: i64,
}

impl ShortUrlInput {
    pub fn new(url: impl Into<String>, expires_in: i64) -> Self {
        Self {
            url: url.into(),
            expires_in,
        }
    }
}
