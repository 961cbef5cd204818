//! Authentication error types.

use thiserror::Error;

use crate::store::StoreError;
use tatvaani_core::EmailError;

/// Errors from the authentication service.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The email is already registered (exact, case-sensitive match).
    #[error("user already exists")]
    DuplicateEmail,

    /// Unknown email or wrong password. The two causes are deliberately
    /// indistinguishable so a caller cannot probe which emails exist.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The email failed structural validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// A bearer token was supplied but its signature (or expiry, when
    /// configured) did not verify.
    #[error("invalid token")]
    InvalidToken,

    /// Password hashing failed.
    #[error("password hashing failed")]
    PasswordHash,

    /// Token signing failed.
    #[error("token signing failed")]
    TokenSigning,

    /// Persisting the user failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
