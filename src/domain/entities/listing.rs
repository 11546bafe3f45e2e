//! Query and result types for paginated short URL listings.

use super::ShortUrl;

/// Narrows a listing.
///
/// `code` matches exactly. `keyword` matches as a case-sensitive substring of the
/// record's domain. Both conditions must hold when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortUrlFilter {
    pub code: Option<String>,
    pub keyword: Option<String>,
}

impl ShortUrlFilter {
    /// Returns true if `record` satisfies every set condition.
    pub fn matches(&self, record: &ShortUrl) -> bool {
        if let Some(code) = &self.code
            && record.code != *code
        {
            return false;
        }

        if let Some(keyword) = &self.keyword
            && !record.domain.contains(keyword.as_str())
        {
            return false;
        }

        true
    }
}

/// Pagination window plus optional filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindParams {
    pub offset: i64,
    pub size: i64,
    pub filter: Option<ShortUrlFilter>,
}

/// One page of records and the filtered total ignoring pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindResult {
    pub data: Vec<ShortUrl>,
    pub total_count: i64,
}
