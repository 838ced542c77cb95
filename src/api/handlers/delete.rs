//! Handler for administrative deletion.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

/// Deletes the mapping for an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}`
///
/// # Errors
///
/// Returns 404 Not Found if the alias does not exist.
/// Returns 500 Internal Server Error if the store fails.
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.url_service.delete(&alias).await?;

    info!(alias = %alias, "url deleted");

    Ok(StatusCode::NO_CONTENT)
}
