//! Public representation of short URL records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{FindResult, ShortUrl};

/// A short URL as returned by the admin listing.
///
/// Identity, domain and creation time stay internal.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlResponse {
    pub code: String,
    pub full_url: String,
    pub hit_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<ShortUrl> for ShortUrlResponse {
    fn from(s: ShortUrl) -> Self {
        Self {
            code: s.code,
            full_url: s.full_url,
            hit_count: s.hit_count,
            expires_at: s.expires_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlListResponse {
    pub data: Vec<ShortUrlResponse>,
    pub total_count: i64,
}

impl From<FindResult> for ShortUrlListResponse {
    fn from(r: FindResult) -> Self {
        Self {
            data: r.data.into_iter().map(Into::into).collect(),
            total_count: r.total_count,
        }
    }
}
