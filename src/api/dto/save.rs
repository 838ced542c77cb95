//! DTOs for the save endpoint.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Request to map a URL to an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The target URL (required, must parse as a URL and be usable as a
    /// `Location` header).
    #[validate(
        url(message = "Invalid URL format"),
        custom(function = "validate_redirect_target")
    )]
    pub url: String,

    /// Optional alias. Absent or empty means "generate one".
    #[serde(default)]
    #[validate(length(max = 255, message = "Alias must be at most 255 characters"))]
    pub alias: Option<String>,
}

/// Response for a created mapping.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub alias: String,
    pub url: String,
}

/// Rejects URLs that cannot be sent back in a `Location` header.
///
/// URL parsing strips tabs and newlines before checking, so the raw string
/// needs a separate check.
fn validate_redirect_target(url: &str) -> Result<(), ValidationError> {
    if HeaderValue::from_str(url).is_ok() {
        return Ok(());
    }

    let mut error = ValidationError::new("control_characters");
    error.message = Some(Cow::Borrowed("URL must not contain control characters"));
    Err(error)
}
