//! Token service - issues and verifies signed identity tokens.
//!
//! Tokens are HS256 JWTs carrying the username in `sub` plus `iat`/`exp`.
//! There is no revocation list: a token stays valid until it expires.

use crate::error::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Lifetime used when the caller does not ask for a specific one.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 15;

/// JWT claims embedded in every token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the token holder
    pub sub: String,
    /// Expiration (seconds since epoch)
    pub exp: i64,
    /// Issued at (seconds since epoch)
    pub iat: i64,
}

/// Signs and verifies tokens with a process-wide secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::default();
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issue a token for `username` that expires after `ttl`
    /// (15 minutes when `None`).
    ///
    /// # Errors
    ///
    /// - `TokenIssue`: signing failed
    pub fn issue(&self, username: &str, ttl: Option<Duration>) -> Result<String, AppError> {
        let now = Utc::now();
        let ttl = ttl.unwrap_or_else(|| Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES));

        let claims = Claims {
            sub: username.to_string(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Verify a token and return the username it was issued for.
    ///
    /// # Errors
    ///
    /// - `Unauthenticated`: bad signature, malformed token, expired, or no `sub` claim
    ///
    /// An empty `sub` is a present claim and verifies like any other username.
    pub fn verify(&self, token: &str) -> Result<String, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "token rejected");
            AppError::Unauthenticated
        })?;

        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_only")
    }

    #[test]
    fn issued_token_verifies_to_username() {
        let tokens = service();
        let token = tokens.issue("alice", None).unwrap();

        assert_eq!(tokens.verify(&token).unwrap(), "alice");
    }

    #[test]
    fn default_ttl_is_fifteen_minutes() {
        let tokens = service();
        let token = tokens.issue("alice", None).unwrap();

        let data = decode::<Claims>(&token, &tokens.decoding_key, &tokens.validation).unwrap();
        assert_eq!(data.claims.exp - data.claims.iat, 15 * 60);
    }

    #[test]
    fn explicit_ttl_is_honoured() {
        let tokens = service();
        let token = tokens.issue("alice", Some(Duration::minutes(60))).unwrap();

        let data = decode::<Claims>(&token, &tokens.decoding_key, &tokens.validation).unwrap();
        assert_eq!(data.claims.exp - data.claims.iat, 60 * 60);
    }

    #[test]
    fn expired_token_is_rejected() {
        let tokens = service();
        let token = tokens.issue("alice", Some(Duration::minutes(-5))).unwrap();

        assert!(matches!(
            tokens.verify(&token),
            Err(AppError::Unauthenticated)
        ));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = TokenService::new("another-secret").issue("alice", None).unwrap();

        assert!(matches!(
            service().verify(&token),
            Err(AppError::Unauthenticated)
        ));
    }

    #[test]
    fn empty_username_round_trips() {
        let tokens = service();
        let token = tokens.issue("", None).unwrap();

        assert_eq!(tokens.verify(&token).unwrap(), "");
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            service().verify("not-a-token"),
            Err(AppError::Unauthenticated)
        ));
        assert!(matches!(service().verify(""), Err(AppError::Unauthenticated)));
    }

    #[test]
    fn token_without_subject_is_rejected() {
        #[derive(Serialize)]
        struct NoSubject {
            exp: i64,
        }

        let token = encode(
            &Header::default(),
            &NoSubject {
                exp: (Utc::now() + Duration::minutes(10)).timestamp(),
            },
            &EncodingKey::from_secret(b"test_secret_key_for_testing_only"),
        )
        .unwrap();

        assert!(matches!(
            service().verify(&token),
            Err(AppError::Unauthenticated)
        ));
    }
}
