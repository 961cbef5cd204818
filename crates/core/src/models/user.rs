//! User account models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Email, UserId};

/// A stored user record, including the password hash.
///
/// This is the shape persisted in `users.json`. Never serialize it into an
/// API response; convert to [`PublicUser`] first so the hash stays private.
/// Users are created at registration and never updated or deleted by any
/// exposed operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    /// Salted adaptive password hash. The field is named `password` in the
    /// persisted JSON for compatibility with the collection file format.
    pub password: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// The redacted user view returned by the API (no password hash).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub is_admin: bool,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
        }
    }
}
