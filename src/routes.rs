//! Top-level router configuration.
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned when absent and echoed on responses
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{request_id, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routed application with middleware, without path normalization.
pub fn router(state: AppState) -> Router {
    api::routes::routes()
        .with_state(state)
        .layer(request_id::propagate_layer())
        .layer(tracing::layer())
        .layer(request_id::set_layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
