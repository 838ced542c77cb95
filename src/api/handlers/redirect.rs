//! Handler for alias resolution.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Returns 307 Temporary Redirect so clients keep asking the service; a
/// mapping may later be deleted.
///
/// # Errors
///
/// Returns 404 Not Found if the alias does not exist.
/// Returns 500 Internal Server Error if the store fails.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let url = state.url_service.resolve(&alias).await?;

    debug!(alias = %alias, url = %url, "alias resolved");

    Ok(Redirect::temporary(&url))
}
