//! Registration and login route handlers.

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::error::Result;
use crate::services::auth::AuthResponse;
use crate::state::AppState;

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register a new user and return a signed token plus the public user view.
///
/// # Errors
///
/// Returns 400 if the email is invalid or already registered.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>> {
    let response = state
        .auth()
        .register(&request.name, &request.email, &request.password)
        .await?;
    Ok(Json(response))
}

/// Login with email and password.
///
/// # Errors
///
/// Returns 400 `Invalid credentials` whether the email is unknown or the
/// password is wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let response = state.auth().login(&request.email, &request.password).await?;
    Ok(Json(response))
}
