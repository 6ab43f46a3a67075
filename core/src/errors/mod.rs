//! Domain-specific error types and error handling.
//!
//! Services raise typed failures; the presentation layer translates them to
//! transport-appropriate status codes. Display messages here are the exact
//! strings surfaced to clients.

use thiserror::Error;

/// Token verification and generation errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token format")]
    InvalidFormat,

    #[error("Token generation failed")]
    GenerationFailed,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::InvalidFormat,
        }
    }
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// One or more field rules violated; the message is the comma-joined
    /// aggregate of every violation, not just the first.
    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Email already exists")]
    DuplicateEmail,

    /// A required relational field is absent, distinct from field-level
    /// validation ("User required" / "Car required").
    #[error("{field} required")]
    MissingField { field: &'static str },

    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// Credential mismatch during authentication. Kept distinct from
    /// `NotFound` internally; both map to the same outward message.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Entity exists but the caller is not its owner
    #[error("Access denied")]
    Forbidden,

    /// No resolved identity for a protected operation
    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Build an aggregated validation error from a list of violations
    pub fn validation(violations: Vec<String>) -> Self {
        DomainError::Validation {
            message: violations.join(", "),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_joins_all_violations() {
        let err = DomainError::validation(vec![
            "Email must be valid".to_string(),
            "Password must be at least 6 characters".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: Email must be valid, Password must be at least 6 characters"
        );
    }

    #[test]
    fn missing_field_and_not_found_messages() {
        let err = DomainError::MissingField { field: "Car" };
        assert_eq!(err.to_string(), "Car required");

        let err = DomainError::NotFound { resource: "Rental" };
        assert_eq!(err.to_string(), "Rental not found");
    }

    #[test]
    fn expired_jwt_maps_to_token_expired() {
        let jwt_err =
            jsonwebtoken::errors::Error::from(jsonwebtoken::errors::ErrorKind::ExpiredSignature);
        let err: TokenError = jwt_err.into();
        assert!(matches!(err, TokenError::Expired));
    }
}
