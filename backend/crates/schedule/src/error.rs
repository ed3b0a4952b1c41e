//! Schedule Error Types
//!
//! This module provides schedule-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::upstream::UpstreamError;
use thiserror::Error;

/// Schedule-specific result type alias
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Schedule-specific error variants
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Primary view data could not be fetched; the whole view fails
    #[error("Failed to fetch {view} view")]
    FetchFailed {
        view: &'static str,
        #[source]
        source: UpstreamError,
    },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ScheduleError {
    pub fn fetch_failed(view: &'static str, source: UpstreamError) -> Self {
        ScheduleError::FetchFailed { view, source }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ScheduleError::FetchFailed { source, .. } => match source {
                UpstreamError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
                _ => StatusCode::BAD_GATEWAY,
            },
            ScheduleError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScheduleError::FetchFailed { source, .. } => match source {
                UpstreamError::Timeout { .. } => ErrorKind::GatewayTimeout,
                _ => ErrorKind::BadGateway,
            },
            ScheduleError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ScheduleError::FetchFailed { view, source } => {
                tracing::error!(view, error = %source, "Primary view fetch failed");
            }
            ScheduleError::Internal(msg) => {
                tracing::error!(message = %msg, "Schedule internal error");
            }
        }
    }
}

impl IntoResponse for ScheduleError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for ScheduleError {
    fn from(err: AppError) -> Self {
        ScheduleError::Internal(err.to_string())
    }
}
