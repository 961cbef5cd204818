//! Bearer-token authentication extractors.
//!
//! Provides extractors for requiring a verified bearer token (and
//! optionally the admin flag) in route handlers.
//!
//! The status split follows the API contract: a request with no
//! `Authorization: Bearer <token>` header at all is rejected with 401,
//! while a supplied-but-invalid (or expired) token is rejected with 403.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

use crate::error::ApiError;
use crate::services::auth::Claims;
use crate::state::AppState;

/// Extractor that requires a verified bearer token.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     CurrentUser(claims): CurrentUser,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", claims.email)
/// }
/// ```
pub struct CurrentUser(pub Claims);

impl<S> FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(ApiError::MissingToken)?;

        let state = AppState::from_ref(state);
        let claims = state.auth().verify_token(&token)?;

        Ok(Self(claims))
    }
}

/// Extractor that requires a verified bearer token with the admin flag.
///
/// Valid non-admin tokens are rejected with 403 `Admin access required`.
pub struct AdminUser(pub Claims);

impl<S> FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentUser(claims) = CurrentUser::from_request_parts(parts, state).await?;

        if !claims.is_admin {
            return Err(ApiError::Forbidden);
        }

        Ok(Self(claims))
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_owned)
}
