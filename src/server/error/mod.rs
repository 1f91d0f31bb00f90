//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by services and controllers. Business
//! rule failures carry a human-readable message and map to a stable error kind; storage
//! and internal failures are logged server-side and surfaced as a generic message.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Caller identity or permission failure.
    ///
    /// Delegates to `AuthError::into_response()` for 401 / 403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket bind or serve failure during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Broken invariant inside the codebase.
    #[error(transparent)]
    Internal(#[from] InternalError),

    /// Entity absent. 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// Caller lacks rights over the entity. 403 Forbidden.
    #[error("{0}")]
    Forbidden(String),

    /// Duplicate active reservation, uniqueness violation or transaction write
    /// conflict. 409 Conflict.
    #[error("{0}")]
    Conflict(String),

    /// No seat left on the trip. 409 Conflict with kind `unavailable`.
    #[error("{0}")]
    Unavailable(String),

    /// Status transition not allowed from the current state. 400 Bad Request with
    /// kind `invalid_state`.
    #[error("{0}")]
    InvalidState(String),

    /// Invalid request. 400 Bad Request.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged, a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Stable snake_case tag sent to clients alongside the message.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AuthErr(err) => err.kind(),
            Self::NotFound(_) => "not_found",
            Self::Forbidden(_) => "forbidden",
            Self::Conflict(_) => "conflict",
            Self::Unavailable(_) => "unavailable",
            Self::InvalidState(_) => "invalid_state",
            Self::BadRequest(_) => "bad_request",
            Self::ConfigErr(_)
            | Self::DbErr(_)
            | Self::IoErr(_)
            | Self::Internal(_)
            | Self::InternalError(_) => "internal",
        }
    }

    /// Replaces a database write conflict with the error produced by `on_conflict`.
    ///
    /// Serialization failures, deadlocks and busy SQLite databases are surfaced to the
    /// caller as a retryable business error instead of an internal one. Every other
    /// error is returned unchanged.
    pub fn on_write_conflict(self, on_conflict: impl FnOnce() -> AppError) -> Self {
        match self {
            Self::DbErr(ref err) if crate::server::util::db::is_write_conflict(err) => {
                tracing::debug!("Write conflict: {}", err);
                on_conflict()
            }
            other => other,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `InvalidState`
/// - 403 Forbidden - For `Forbidden`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict` and `Unavailable`
/// - 500 Internal Server Error - For all other error types
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, kind, msg),
            Self::Forbidden(msg) => error_response(StatusCode::FORBIDDEN, kind, msg),
            Self::Conflict(msg) | Self::Unavailable(msg) => {
                error_response(StatusCode::CONFLICT, kind, msg)
            }
            Self::InvalidState(msg) | Self::BadRequest(msg) => {
                error_response(StatusCode::BAD_REQUEST, kind, msg)
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    kind,
                    "Internal server error".to_string(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

pub(crate) fn error_response(status: StatusCode, kind: &str, error: String) -> Response {
    (
        status,
        Json(ErrorDto {
            kind: kind.to_string(),
            error,
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client so storage details never leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal",
            "Internal server error".to_string(),
        )
    }
}
