//! JWT issuance and verification

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use rw_shared::config::JwtConfig;

use crate::errors::{DomainResult, TokenError};

/// Claims carried by a bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub id: u64,

    /// User email
    pub email: String,

    /// Issued-at, seconds since epoch
    pub iat: i64,

    /// Expiry, seconds since epoch
    pub exp: i64,
}

/// Service signing and verifying time-limited bearer tokens (HS256)
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_expiry_secs: i64,
}

impl TokenService {
    /// Create a new token service from JWT configuration
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            token_expiry_secs: config.token_expiry_secs,
        }
    }

    /// Sign a token embedding `{id, email}` with the configured expiry
    pub fn issue(&self, id: u64, email: &str) -> DomainResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            id,
            email: email.to_string(),
            iat: now,
            exp: now + self.token_expiry_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed.into())
    }

    /// Verify signature and expiry, returning the decoded claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(&JwtConfig::new("test-secret"))
    }

    #[test]
    fn issued_token_round_trips() {
        let svc = service();
        let token = svc.issue(7, "a@b.com").unwrap();
        assert!(!token.is_empty());

        let claims = svc.verify(&token).unwrap();
        assert_eq!(claims.id, 7);
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = service().issue(1, "a@b.com").unwrap();
        let other = TokenService::new(&JwtConfig::new("other-secret"));

        assert!(matches!(
            other.verify(&token),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = JwtConfig {
            secret: "test-secret".to_string(),
            // Past the default 60s decoding leeway.
            token_expiry_secs: -120,
        };
        let svc = TokenService::new(&config);
        let token = svc.issue(1, "a@b.com").unwrap();

        assert!(matches!(svc.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            service().verify("not-a-jwt"),
            Err(TokenError::InvalidFormat)
        ));
    }
}
