//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`     - Alias redirect (public)
//! - `GET    /`            - Empty alias, answers `alias is empty` (public)
//! - `GET    /health`      - Health check (public)
//! - `POST   /url`         - Save a mapping (Basic auth when configured)
//! - `DELETE /url`         - Remove a mapping (Basic auth when configured)
//! - `POST   /url/remove`  - Remove a mapping (Basic auth when configured)
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned when absent and echoed on the response
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use std::sync::Arc;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler, redirect_root_handler};
use crate::api::middleware::auth::{self, BasicCredentials};
use crate::api::middleware::{request_id, tracing as trace};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path
/// normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `credentials` - when set, save and remove require matching Basic auth
pub fn router(state: AppState, credentials: Option<BasicCredentials>) -> Router {
    let mut url_router = api::routes::url_routes();

    if let Some(credentials) = credentials {
        url_router = url_router.route_layer(middleware::from_fn_with_state(
            Arc::new(credentials),
            auth::layer,
        ));
    }

    Router::new()
        .route("/health", get(health_handler))
        .route("/", get(redirect_root_handler))
        .route("/{alias}", get(redirect_handler))
        .merge(url_router)
        .with_state(state)
        .layer(request_id::propagate_layer())
        .layer(trace::layer())
        .layer(request_id::set_layer())
}

/// Constructs the application router with trailing slashes trimmed.
pub fn app_router(state: AppState, credentials: Option<BasicCredentials>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, credentials))
}
