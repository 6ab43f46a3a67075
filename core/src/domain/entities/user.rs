//! User entity representing a registered account in the RentWheels system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rw_shared::utils::validation::is_valid_email;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A registered user as held by the user store.
///
/// Deliberately does not implement `Serialize`: the password digest must
/// never appear in an externally observable projection. Serialize
/// [`UserProfile`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Sequential identifier assigned by the store
    pub id: u64,

    /// Email address, globally unique across all users
    pub email: String,

    /// bcrypt digest of the password
    pub password_hash: String,

    /// Display name, defaults to empty
    pub name: String,

    /// Set at creation, immutable afterwards
    pub created_at: DateTime<Utc>,
}

/// Field bundle for a user about to be inserted; the store assigns the
/// id and creation timestamp.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
}

/// Externally safe projection of a [`User`], digest omitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            created_at: user.created_at,
        }
    }
}

impl User {
    /// Projection with the password digest stripped
    pub fn profile(&self) -> UserProfile {
        UserProfile::from(self)
    }

    /// Validate registration input, collecting every violated rule rather
    /// than failing fast. An empty result means the input is acceptable.
    pub fn validate_registration(email: &str, password: &str) -> Vec<String> {
        let mut errors = Vec::new();

        if email.is_empty() {
            errors.push("Email is required".to_string());
        } else if !is_valid_email(email) {
            errors.push("Email must be valid".to_string());
        }

        if password.is_empty() {
            errors.push("Password is required".to_string());
        } else if password.len() < MIN_PASSWORD_LENGTH {
            errors.push("Password must be at least 6 characters".to_string());
        }

        errors
    }
}
