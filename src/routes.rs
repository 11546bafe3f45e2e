//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`                         - Create a short URL (public)
//! - `GET  /{code}`                   - Redirect (public)
//! - `GET  /health`                   - Liveness probe (public)
//! - `/admin/*`                       - Admin API (admin token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Admin token via Bearer header or `token` query
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes with their middleware, without path normalization.
pub fn router(state: AppState) -> Router {
    let admin_router = api::routes::admin_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .merge(api::routes::public_routes())
        .nest("/admin", admin_router)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service with trailing slashes trimmed before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
