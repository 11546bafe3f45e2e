//! API route configuration.

use crate::api::handlers::{
    delete_short_url_handler, health_handler, list_short_urls_handler, redirect_handler,
    shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Public routes: creation, redirect and health.
///
/// - `POST /`         - Create a short URL
/// - `GET  /health`   - Liveness probe
/// - `GET  /{code}`   - Redirect to the full URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}

/// Admin routes, mounted under `/admin` behind [`crate::api::middleware::auth`].
///
/// - `GET    /shortUrls`         - Paginated, filterable listing
/// - `DELETE /shortUrls/{code}`  - Expire a short URL
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/shortUrls", get(list_short_urls_handler))
        .route("/shortUrls/{code}", delete(delete_short_url_handler))
}
