//! Bearer-token issue and verification.
//!
//! ARCHITECTURE
//! ============
//! Tokens are stateless HS256 JWTs: verification checks the signature and
//! expiry without any store lookup, so the claims a request carries are
//! trustworthy the moment the middleware has verified them. Nothing here is
//! revocable — ending a session means the client discards its token.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// Decoded claims attached to a request after verification.
///
/// Per-request lifecycle: inserted into the request extensions by the auth
/// middleware, read by handlers, dropped when the request completes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedToken {
    /// Subject (user ID).
    pub sub: Uuid,
    pub email: String,
    /// Display name.
    pub name: String,
    /// Issued at (Unix epoch seconds).
    pub iat: i64,
    /// Expiration (Unix epoch seconds).
    pub exp: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("missing bearer token")]
    Missing,
    #[error("malformed authorization header")]
    Malformed,
    #[error("token rejected: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),
}

/// Issues and verifies bearer tokens with a shared secret.
#[derive(Clone)]
pub struct TokenVerifier {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenVerifier {
    #[must_use]
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // No expiry leeway: an expired token is unauthenticated immediately.
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Issue a signed token for the given identity.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails.
    pub fn issue(&self, sub: Uuid, email: &str, name: &str) -> Result<String, TokenError> {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = VerifiedToken {
            sub,
            email: email.to_owned(),
            name: name.to_owned(),
            iat: now,
            exp: now + self.ttl.whole_seconds(),
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify signature and expiry, returning the decoded claims.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` for tampered, expired, or otherwise
    /// undecodable tokens.
    pub fn verify(&self, token: &str) -> Result<VerifiedToken, TokenError> {
        Ok(decode::<VerifiedToken>(token, &self.decoding, &self.validation)?.claims)
    }
}
