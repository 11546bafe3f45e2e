//! Admin token authentication middleware.

use axum::{
    extract::{FromRequestParts, Query, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde::Deserialize;
use tracing::warn;

use crate::{error::AppError, state::AppState};

/// Compares tokens in time independent of where they first differ.
fn token_matches(provided: &str, expected: &str) -> bool {
    let (a, b) = (provided.as_bytes(), expected.as_bytes());
    let diff = a
        .iter()
        .zip(b)
        .fold(a.len() ^ b.len(), |acc, (x, y)| acc | usize::from(x ^ y));
    diff == 0
}

#[derive(Debug, Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Authenticates admin requests against the configured admin token.
///
/// The token is read from the `token` query parameter or, when that is absent,
/// from the `Authorization` header:
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Errors
///
/// Returns `403 Forbidden` when no token is supplied or it does not match.
///
/// # Example
///
/// ```rust,ignore
/// let admin = Router::new()
///     .route("/shortUrls", get(list_short_urls_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let from_query = Query::<TokenQuery>::try_from_uri(&parts.uri)
        .ok()
        .and_then(|Query(q)| q.token);

    let token = match from_query {
        Some(token) => Some(token),
        None => AuthBearer::from_request_parts(&mut parts, &())
            .await
            .ok()
            .map(|AuthBearer(token)| token),
    };

    if !token.is_some_and(|t| token_matches(&t, &st.admin_token)) {
        warn!(path = %parts.uri.path(), "Rejected admin request");
        return Err(AppError::Forbidden);
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}
