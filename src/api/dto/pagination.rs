//! Pagination and filtering query parameters for the admin listing.

use serde::Deserialize;
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::{FindParams, ShortUrlFilter};

pub const DEFAULT_PAGE_SIZE: i64 = 30;

/// `GET /admin/shortUrls` query string.
///
/// Numbers that fail to parse fall back to their defaults.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListQueryParams {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub offset: Option<i64>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 1000))]
    pub size: Option<i64>,

    pub short_code: Option<String>,
    pub keyword: Option<String>,
}

impl ListQueryParams {
    /// Converts to service parameters. Empty filter strings mean "no filter".
    pub fn into_find_params(self) -> FindParams {
        let non_empty = |s: Option<String>| s.filter(|v| !v.is_empty());

        FindParams {
            offset: self.offset.unwrap_or(0),
            size: self.size.unwrap_or(DEFAULT_PAGE_SIZE),
            filter: Some(ShortUrlFilter {
                code: non_empty(self.short_code),
                keyword: non_empty(self.keyword),
            }),
        }
    }
}
