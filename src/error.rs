//! Application error taxonomy and its HTTP mapping.
//!
//! Every layer of the shortener (repositories, cache decorator, core service,
//! blacklist decorator) reports failures as an [`AppError`]. Decorators pass
//! errors through or translate them, they never swallow them. The HTTP layer maps
//! each kind to a distinct status code via [`IntoResponse`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::infrastructure::cache::CacheError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to HTTP clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input URL, or one without a host.
    #[error("invalid url")]
    InvalidUrl,

    /// Negative `expiresIn` on create.
    #[error("invalid expires in")]
    InvalidExpiresIn,

    /// No record matches the code, or the update target has no identity.
    #[error("record not found")]
    RecordNotFound,

    /// The code resolves but its expiration has passed.
    #[error("url expired")]
    ShortUrlExpired,

    /// The URL matches a blacklist pattern.
    #[error("blocked url")]
    BlockedUrl,

    /// Short code collision on create.
    #[error("unique constraint failed")]
    UniqueViolation,

    /// Request payload failed validation at the HTTP boundary.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Admin credentials missing or wrong.
    #[error("forbidden")]
    Forbidden,

    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Opaque backend failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status for this error kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl | AppError::InvalidExpiresIn | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::BlockedUrl | AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::RecordNotFound => StatusCode::NOT_FOUND,
            AppError::UniqueViolation => StatusCode::CONFLICT,
            AppError::ShortUrlExpired => StatusCode::GONE,
            AppError::Cache(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable error code and client-facing message.
    ///
    /// Internal failures are reported with a generic message; details stay in logs.
    pub fn to_error_info(&self) -> ErrorInfo {
        let code = match self {
            AppError::InvalidUrl => "invalid_url",
            AppError::InvalidExpiresIn => "invalid_expires_in",
            AppError::RecordNotFound => "not_found",
            AppError::ShortUrlExpired => "expired",
            AppError::BlockedUrl => "blocked_url",
            AppError::UniqueViolation => "conflict",
            AppError::Validation(_) => "validation_error",
            AppError::Forbidden => "forbidden",
            AppError::Cache(_) | AppError::Internal(_) => "internal_error",
        };

        let message = match self {
            AppError::Cache(_) | AppError::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        };

        ErrorInfo { code, message }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::UniqueViolation;
        }

        AppError::Internal(format!("database error: {e}"))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}
