//! Authentication service.
//!
//! Handles registration, login, and bearer-token issuance/verification.
//!
//! Tokens are HMAC-signed (HS256) with the configured shared secret. By
//! default no `exp` claim is set - tokens never expire, which matches the
//! historical behavior and is a known weakness; set
//! `TATVAANI_TOKEN_TTL_SECS` to issue expiring tokens instead.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use tatvaani_core::{Email, PublicUser, User, UserId};

use crate::config::AuthConfig;
use crate::store::{Collection, FileStore};

/// Claims carried by a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Owning user id.
    pub sub: UserId,
    pub email: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    /// Expiry as a unix timestamp; absent for non-expiring tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

/// A successful register/login result: the signed token plus the redacted
/// user view.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Authentication service.
///
/// Borrows the store and auth configuration for the duration of one
/// request, like every other stateless service in this crate.
pub struct AuthService<'a> {
    store: &'a FileStore,
    config: &'a AuthConfig,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a FileStore, config: &'a AuthConfig) -> Self {
        Self { store, config }
    }

    /// Register a new user with name, email and password.
    ///
    /// The admin flag is granted iff the email exactly equals the
    /// configured bootstrap admin address.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email is structurally invalid.
    /// Returns `AuthError::DuplicateEmail` if the email is already registered.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, AuthError> {
        let email = Email::parse(email)?;

        let mut users: Vec<User> = self.store.read_all(Collection::Users).await;
        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::DuplicateEmail);
        }

        let is_admin = email.as_str() == self.config.admin_email;
        let user = User {
            id: UserId::random(),
            name: name.to_owned(),
            email,
            password: hash_password(password)?,
            is_admin,
            created_at: Utc::now(),
        };

        users.push(user.clone());
        self.store.write_all(Collection::Users, &users).await?;

        tracing::info!(user_id = %user.id, is_admin, "user registered");
        self.respond(&user)
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` whether the email is unknown
    /// or the password does not verify - the uniformity is deliberate.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let users: Vec<User> = self.store.read_all(Collection::Users).await;

        let user = users
            .iter()
            .find(|u| u.email.as_str() == email)
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &user.password)?;

        tracing::info!(user_id = %user.id, "user logged in");
        self.respond(user)
    }

    /// Sign a token for `user` and pair it with the redacted user view.
    fn respond(&self, user: &User) -> Result<AuthResponse, AuthError> {
        Ok(AuthResponse {
            token: self.issue_token(user)?,
            user: PublicUser::from(user),
        })
    }

    /// Issue a signed bearer token for `user`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenSigning` if encoding fails.
    pub fn issue_token(&self, user: &User) -> Result<String, AuthError> {
        #[allow(clippy::cast_sign_loss)] // Utc::now() is far past the epoch
        let exp = self
            .config
            .token_ttl_secs
            .map(|ttl| Utc::now().timestamp() as u64 + ttl);

        let claims = Claims {
            sub: user.id,
            email: user.email.as_str().to_owned(),
            is_admin: user.is_admin,
            exp,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.expose_secret().as_bytes()),
        )
        .map_err(|_| AuthError::TokenSigning)
    }

    /// Verify a bearer token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` if the signature does not verify,
    /// or the token is expired (when a TTL is configured).
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        if self.config.token_ttl_secs.is_none() {
            // Historical tokens carry no exp claim.
            validation.required_spec_claims.clear();
            validation.validate_exp = false;
        }

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.expose_secret().as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
    }
}

/// Hash a password with a random salt.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored hash.
///
/// Any failure - malformed hash included - collapses to
/// `InvalidCredentials` so login stays uniform.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
