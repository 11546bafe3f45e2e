//! Handlers for the admin short URL endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::pagination::ListQueryParams;
use crate::api::dto::short_url::ShortUrlListResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists short URLs with pagination and optional filtering.
///
/// # Endpoint
///
/// `GET /admin/shortUrls?offset=0&size=30&shortCode=abc&keyword=example`
///
/// `shortCode` matches exactly; `keyword` is a case-sensitive substring of the
/// stored domain, which is always lowercase. `totalCount` counts every match, ignoring the page window.
///
/// # Errors
///
/// Returns 400 when `size` is outside `1..=1000`.
pub async fn list_short_urls_handler(
    State(state): State<AppState>,
    Query(params): Query<ListQueryParams>,
) -> Result<Json<ShortUrlListResponse>, AppError> {
    params.validate()?;

    let result = state
        .shortener
        .find_urls(params.into_find_params())
        .await?;

    Ok(Json(result.into()))
}

/// Soft-deletes a short URL by expiring it.
///
/// # Endpoint
///
/// `DELETE /admin/shortUrls/{code}`
///
/// Returns `204 No Content`, or 404 if the code is unknown.
pub async fn delete_short_url_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, AppError> {
    state.shortener.delete(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}
