//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TATVAANI_HOST` - Bind address (default: 0.0.0.0)
//! - `TATVAANI_PORT` - Listen port (default: 5000)
//! - `TATVAANI_DATA_DIR` - Directory for the JSON collection files (default: ./data)
//! - `TATVAANI_JWT_SECRET` - Token signing secret; falls back to the
//!   historical built-in secret when unset (a warning is logged)
//! - `TATVAANI_TOKEN_TTL_SECS` - Token lifetime in seconds; tokens never
//!   expire when unset
//! - `TATVAANI_ADMIN_EMAIL` - Bootstrap admin address
//!   (default: admin@tatvaani.com)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// The signing secret the original deployment shipped with. Kept as the
/// fallback so existing tokens stay verifiable; override it in any real
/// deployment via `TATVAANI_JWT_SECRET`.
const DEFAULT_JWT_SECRET: &str = "tatvaani_secret_key_2024";

/// Registering with this exact address grants the admin flag.
const DEFAULT_ADMIN_EMAIL: &str = "admin@tatvaani.com";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the JSON collection files
    pub data_dir: PathBuf,
    /// Token signing and verification settings
    pub auth: AuthConfig,
}

/// Token and credential configuration.
///
/// Implements `Debug` manually to redact the signing secret.
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret for signing bearer tokens
    pub jwt_secret: SecretString,
    /// Whether the built-in fallback secret is in use
    pub using_default_secret: bool,
    /// Token lifetime; `None` issues non-expiring tokens
    pub token_ttl_secs: Option<u64>,
    /// Email address that receives the admin flag on registration
    pub admin_email: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("using_default_secret", &self.using_default_secret)
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("admin_email", &self.admin_email)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("TATVAANI_HOST", "0.0.0.0")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("TATVAANI_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("TATVAANI_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("TATVAANI_PORT".to_owned(), e.to_string()))?;
        let data_dir = PathBuf::from(get_env_or_default("TATVAANI_DATA_DIR", "./data"));
        let auth = AuthConfig::from_env()?;

        Ok(Self {
            host,
            port,
            data_dir,
            auth,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl AuthConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let (jwt_secret, using_default_secret) = match std::env::var("TATVAANI_JWT_SECRET") {
            Ok(value) => (SecretString::from(value), false),
            Err(_) => (SecretString::from(DEFAULT_JWT_SECRET), true),
        };

        let token_ttl_secs = match std::env::var("TATVAANI_TOKEN_TTL_SECS") {
            Ok(value) => Some(value.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("TATVAANI_TOKEN_TTL_SECS".to_owned(), e.to_string())
            })?),
            Err(_) => None,
        };

        Ok(Self {
            jwt_secret,
            using_default_secret,
            token_ttl_secs,
            admin_email: get_env_or_default("TATVAANI_ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL),
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
