//! Error handling - RFC 7807 responses for every failure path.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use platzi_core::error::{ApiError, AuthError};
use platzi_shared::ErrorResponse;
use std::fmt;

use crate::render::RenderError;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unauthorized,
    /// Upstream answered with a success status other than the expected one.
    BadImplementation { status: u16 },
    /// Upstream error status, forwarded to the client.
    Upstream { status: u16, detail: String },
    /// Upstream unreachable or its answer unreadable.
    BadGateway(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::BadImplementation { status } => {
                write!(f, "Unexpected upstream status {}", status)
            }
            AppError::Upstream { status, detail } => {
                write!(f, "Upstream error {}: {}", status, detail)
            }
            AppError::BadGateway(msg) => write!(f, "Bad gateway: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::BadImplementation { .. } | AppError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error = match self {
            AppError::BadRequest(detail) => {
                ErrorResponse::new(status.as_u16(), "Bad Request").with_detail(detail)
            }
            AppError::Unauthorized => ErrorResponse::unauthorized(),
            AppError::BadImplementation { status } => {
                tracing::error!(upstream_status = status, "Unexpected upstream status");
                ErrorResponse::bad_implementation()
            }
            AppError::Upstream { detail, .. } => ErrorResponse::new(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Upstream Error"),
            )
            .with_detail(detail),
            AppError::BadGateway(detail) => {
                tracing::error!("Upstream failure: {}", detail);
                ErrorResponse::bad_gateway("The movies service is unavailable")
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(status).json(error)
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status, body } => AppError::Upstream {
                status,
                detail: body,
            },
            ApiError::Transport(_) | ApiError::Decode(_) | ApiError::InvalidUrl(_) => {
                AppError::BadGateway(err.to_string())
            }
        }
    }
}

// Every failed sign-in is a 401, whatever the strategy tripped on.
impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Upstream(cause) => {
                tracing::warn!(error = %cause, "Sign-in failed upstream");
            }
            other => tracing::debug!(error = %other, "Sign-in rejected"),
        }
        AppError::Unauthorized
    }
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
