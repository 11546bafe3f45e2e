//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its full URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Resolution goes through the full service stack, so the hit is counted and
/// both expiry and the blacklist are enforced.
///
/// # Responses
///
/// - **302 Found** with `Location` set to the full URL
/// - **404 / 410** with an empty HTML body for unknown or expired codes
/// - any other error uses the JSON error body
pub async fn redirect_handler(Path(code): Path<String>, State(state): State<AppState>) -> Response {
    match state.shortener.get_full_url(&code).await {
        Ok(full_url) => {
            debug!(code, full_url, "Redirecting");
            (StatusCode::FOUND, [(header::LOCATION, full_url)]).into_response()
        }
        Err(e @ (AppError::RecordNotFound | AppError::ShortUrlExpired)) => {
            debug!(code, error = %e, "Short URL unavailable");
            (e.status_code(), Html("")).into_response()
        }
        Err(e) => e.into_response(),
    }
}
