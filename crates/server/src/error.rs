//! Unified error handling for the API.
//!
//! Provides a unified `ApiError` type mapping the error taxonomy to HTTP
//! statuses and a JSON `{"message": ...}` body. All route handlers return
//! `Result<T, ApiError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::AuthError;
use crate::store::StoreError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Flat-file store write failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// No bearer token was supplied on a protected route.
    #[error("Missing bearer token")]
    MissingToken,

    /// Valid token, but the caller lacks the admin flag.
    #[error("Admin access required")]
    Forbidden,

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body: `{"message": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Store(_) | Self::Internal(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Auth(err) => match err {
                // Registration and login failures are both 400s, and the
                // two login causes share one message on purpose.
                AuthError::DuplicateEmail
                | AuthError::InvalidCredentials
                | AuthError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
                // A token was supplied but did not verify.
                AuthError::InvalidToken => StatusCode::FORBIDDEN,
                AuthError::PasswordHash | AuthError::TokenSigning | AuthError::Store(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MissingToken => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Auth(err) => match err {
                AuthError::DuplicateEmail => "User already exists".to_owned(),
                AuthError::InvalidCredentials => "Invalid credentials".to_owned(),
                AuthError::InvalidEmail(_) => "Invalid email address".to_owned(),
                AuthError::InvalidToken => "Invalid token".to_owned(),
                AuthError::PasswordHash | AuthError::TokenSigning | AuthError::Store(_) => {
                    "Server error".to_owned()
                }
            },
            Self::Store(_) | Self::Internal(_) => "Server error".to_owned(),
            Self::MissingToken => "Missing bearer token".to_owned(),
            Self::Forbidden => "Admin access required".to_owned(),
            Self::NotFound(what) => format!("{what} not found"),
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            get_status(ApiError::NotFound("Product".to_owned())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(get_status(ApiError::MissingToken), StatusCode::UNAUTHORIZED);
        assert_eq!(get_status(ApiError::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(
            get_status(ApiError::Auth(AuthError::InvalidToken)),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            get_status(ApiError::Auth(AuthError::DuplicateEmail)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(ApiError::Internal("boom".to_owned())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_is_not_exposed() {
        let response = ApiError::Internal("secret detail".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // Body carries only the generic message; the detail stays in logs.
    }
}
