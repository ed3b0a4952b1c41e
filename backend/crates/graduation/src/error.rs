//! Graduation Error Types
//!
//! This module provides graduation-specific error variants that integrate
//! with the unified `kernel::error::AppError` system. Note that "no TA
//! record on file" is not an error: it is a view state handled in the
//! application layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::upstream::UpstreamError;
use thiserror::Error;

/// Graduation-specific result type alias
pub type GraduationResult<T> = Result<T, GraduationError>;

/// Graduation-specific error variants
#[derive(Debug, Error)]
pub enum GraduationError {
    /// Primary view data could not be fetched; the whole view fails
    #[error("Failed to fetch {view} view")]
    FetchFailed {
        view: &'static str,
        #[source]
        source: UpstreamError,
    },

    /// Identity store error during the role-gate lookup
    #[error("Identity store error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GraduationError {
    pub fn fetch_failed(view: &'static str, source: UpstreamError) -> Self {
        GraduationError::FetchFailed { view, source }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GraduationError::FetchFailed { source, .. } => match source {
                UpstreamError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
                _ => StatusCode::BAD_GATEWAY,
            },
            GraduationError::Database(_) | GraduationError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraduationError::FetchFailed { source, .. } => match source {
                UpstreamError::Timeout { .. } => ErrorKind::GatewayTimeout,
                _ => ErrorKind::BadGateway,
            },
            GraduationError::Database(_) | GraduationError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            GraduationError::FetchFailed { view, source } => {
                tracing::error!(view, error = %source, "Primary view fetch failed");
            }
            GraduationError::Database(e) => {
                tracing::error!(error = %e, "Identity store error");
            }
            GraduationError::Internal(msg) => {
                tracing::error!(message = %msg, "Graduation internal error");
            }
        }
    }
}

impl IntoResponse for GraduationError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for GraduationError {
    fn from(err: AppError) -> Self {
        GraduationError::Internal(err.to_string())
    }
}
