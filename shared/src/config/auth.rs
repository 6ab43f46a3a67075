//! JWT authentication configuration

use serde::{Deserialize, Serialize};

/// Secret used when `JWT_SECRET` is not set. Acceptable for local
/// development only; the server logs a warning when it is in use.
pub const DEFAULT_SECRET: &str = "dev-secret";

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens (HS256)
    pub secret: String,

    /// Token expiry time in seconds
    pub token_expiry_secs: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            token_expiry_secs: 3600, // 1 hour
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Load configuration from the `JWT_SECRET` environment variable,
    /// falling back to the insecure development default.
    pub fn from_env() -> Self {
        match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => Self::new(secret),
            _ => Self::default(),
        }
    }

    /// Check if the insecure default secret is in use (deployment
    /// misconfiguration warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_secret_is_flagged() {
        let config = JwtConfig::default();
        assert!(config.is_using_default_secret());
        assert_eq!(config.token_expiry_secs, 3600);
    }

    #[test]
    fn explicit_secret_is_not_flagged() {
        let config = JwtConfig::new("a-real-secret");
        assert!(!config.is_using_default_secret());
    }
}
