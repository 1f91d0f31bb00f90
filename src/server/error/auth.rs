use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no usable caller identity header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a valid caller identity")]
    MissingCaller,

    /// The caller identity refers to a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} not found in database")]
    UserNotInDatabase(i32),

    /// The caller lacks a required permission.
    ///
    /// The reason is logged at debug level only. Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

impl AuthError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCaller | Self::UserNotInDatabase(_) => "unauthorized",
            Self::AccessDenied(_, _) => "forbidden",
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; details are logged at debug level.
///
/// # Returns
/// - 401 Unauthorized - For missing or unknown callers
/// - 403 Forbidden - For denied permissions
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let kind = self.kind();
        match self {
            Self::MissingCaller | Self::UserNotInDatabase(_) => error_response(
                StatusCode::UNAUTHORIZED,
                kind,
                "Authentication required".to_string(),
            ),
            Self::AccessDenied(_, _) => error_response(
                StatusCode::FORBIDDEN,
                kind,
                "You do not have permission to perform this action".to_string(),
            ),
        }
    }
}
