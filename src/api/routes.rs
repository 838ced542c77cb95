//! API route configuration.

use crate::api::handlers::{delete_handler, health_handler, redirect_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All service routes.
///
/// # Endpoints
///
/// - `GET    /health`        - Store health check
/// - `POST   /url`           - Save a mapping
/// - `DELETE /url/{alias}`   - Delete a mapping
/// - `GET    /{alias}`       - Redirect to the mapped URL
///
/// Static segments win over `/{alias}`, so `health` and `url` cannot be
/// resolved by redirect.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/url", post(save_handler))
        .route("/url/{alias}", delete(delete_handler))
        .route("/{alias}", get(redirect_handler))
}
