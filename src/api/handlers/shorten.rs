//! Handler for short URL creation.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::domain::entities::ShortUrlInput;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page", "expiresIn": 3600 }
/// ```
///
/// `expiresIn` is in seconds; omit it or send `0` for a link that never expires.
///
/// # Response
///
/// `201 Created` with `{ "url": "<SERVER_HOST>/<code>" }`.
///
/// # Errors
///
/// - 400 for a negative `expiresIn` or an invalid URL
/// - 403 when the URL matches the blacklist
/// - 409 on a code collision
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateShortUrlRequest>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>), AppError> {
    let code = state
        .shortener
        .create(ShortUrlInput::new(payload.url, payload.expires_in))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateShortUrlResponse {
            url: state.short_url(&code),
        }),
    ))
}
