//! Error types for the store, the save use case, and the HTTP layer.
//!
//! - [`StorageError`] - classified failures returned by every store implementation
//! - [`SaveError`] - outcome of a save that did not persist a mapping
//! - [`AppError`] - HTTP-facing error rendered as a JSON body

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure classification shared by all [`crate::domain::repositories::UrlRepository`]
/// implementations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The alias is already taken by another mapping.
    #[error("alias already exists: {alias}")]
    AliasAlreadyExists { alias: String },

    /// No mapping exists for the alias.
    #[error("alias not found: {alias}")]
    NotFound { alias: String },

    /// Any I/O, connectivity, or constraint error not caused by a duplicate alias.
    #[error("storage failure in {op}")]
    Failure {
        op: &'static str,
        #[source]
        source: BoxError,
    },
}

impl StorageError {
    pub fn failure(op: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Failure {
            op,
            source: source.into(),
        }
    }
}

/// Reasons a save request did not produce a new mapping.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("alias already exists: {alias}")]
    Conflict { alias: String },

    #[error("failed to save url")]
    Failed(#[source] StorageError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to HTTP clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Conflict { .. } => (StatusCode::CONFLICT, "conflict"),
            AppError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.status_and_code();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details }
            | AppError::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::AliasAlreadyExists { alias } => {
                AppError::conflict("Alias already exists", json!({ "alias": alias }))
            }
            StorageError::NotFound { alias } => {
                AppError::not_found("Alias not found", json!({ "alias": alias }))
            }
            StorageError::Failure { .. } => AppError::internal("Storage error", json!({})),
        }
    }
}

impl From<SaveError> for AppError {
    fn from(e: SaveError) -> Self {
        match e {
            SaveError::Conflict { alias } => {
                AppError::conflict("Alias already exists", json!({ "alias": alias }))
            }
            SaveError::Failed(_) => AppError::internal("Failed to save url", json!({})),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(e.field_errors()).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Invalid request", details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_storage_conflict_maps_to_409() {
        let err: AppError = StorageError::AliasAlreadyExists {
            alias: "google".to_string(),
        }
        .into();

        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_storage_not_found_maps_to_404() {
        let err: AppError = StorageError::NotFound {
            alias: "missing".to_string(),
        }
        .into();

        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_failure_hides_source() {
        let err: AppError = StorageError::failure(
            "storage.sqlite.save",
            io::Error::other("disk I/O error at /var/lib/secret.db"),
        )
        .into();

        let info = err.to_error_info();
        assert_eq!(info.code, "internal_error");
        assert!(!info.message.contains("secret"));
        assert_eq!(info.details, json!({}));
    }

    #[test]
    fn test_save_failed_maps_to_500() {
        let err: AppError =
            SaveError::Failed(StorageError::failure("storage.sqlite.save", "boom")).into();

        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_failure_display_carries_op() {
        let err = StorageError::failure("storage.sqlite.resolve", "connection reset");
        assert_eq!(err.to_string(), "storage failure in storage.sqlite.resolve");

        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("connection reset"));
    }
}
