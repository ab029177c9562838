// ABOUTME: User types for the credential store
// ABOUTME: Separates the stored record from the redacted client view

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered identity as stored. The password exists only as an Argon2
/// PHC hash; this type is never serialized to clients.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Redacted view of a user returned by register/login. Never carries the
/// password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
