//! Handler for the save endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use tracing::{error, info};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::{AppError, SaveError};
use crate::state::AppState;

/// Maps a URL to an alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://google.com", "alias": "google" }
/// ```
///
/// `alias` is optional. When absent or empty, a random alias is generated.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "alias": "google", "url": "https://google.com" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body cannot be decoded or fails validation
/// - 409 Conflict if the alias is already taken (generated aliases included)
/// - 500 Internal Server Error if the store fails
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveResponse>), AppError> {
    const OP: &str = "api.handlers.save";

    let Json(req) = payload.map_err(|rejection| {
        error!(op = OP, error = %rejection.body_text(), "failed to decode request");
        AppError::bad_request(
            "Failed to decode request",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    info!(op = OP, url = %req.url, alias = ?req.alias, "request body decoded");

    if let Err(e) = req.validate() {
        error!(op = OP, error = %e, "invalid request");
        return Err(e.into());
    }

    match state.url_service.save(&req.url, req.alias.as_deref()).await {
        Ok(alias) => {
            info!(op = OP, url = %req.url, alias = %alias, "url added");
            Ok((
                StatusCode::CREATED,
                Json(SaveResponse { alias, url: req.url }),
            ))
        }
        Err(e @ SaveError::Conflict { .. }) => {
            info!(op = OP, url = %req.url, error = %e, "url already exists");
            Err(e.into())
        }
        Err(e) => {
            error!(op = OP, url = %req.url, error = %e, "failed to save url");
            Err(e.into())
        }
    }
}
