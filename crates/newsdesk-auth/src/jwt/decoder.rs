//! Bearer token inspection.
//!
//! The platform signs its tokens with a secret the client never sees, so
//! the payload is decoded without signature verification and only used to
//! decide whether a stored token is still worth sending.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use newsdesk_core::config::AuthConfig;

use super::claims::TokenClaims;

/// Classification of a stored bearer token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenState {
    /// Decodable and not yet expired.
    Valid(TokenClaims),
    /// Decodable but past its expiry.
    Expired,
    /// Not a decodable JWT.
    Invalid,
}

/// Decodes token payloads and checks their expiry.
#[derive(Clone)]
pub struct TokenInspector {
    /// Tolerated clock skew in seconds.
    leeway_seconds: u64,
    /// Decoding options; signature and expiry checks are off.
    validation: Validation,
}

impl std::fmt::Debug for TokenInspector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenInspector")
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}

impl TokenInspector {
    /// Creates an inspector from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_leeway(config.expiry_leeway_seconds)
    }

    /// Creates an inspector with an explicit leeway.
    pub fn with_leeway(leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;

        Self {
            leeway_seconds,
            validation,
        }
    }

    /// Decodes the payload without checking expiry.
    pub fn decode(&self, token: &str) -> Option<TokenClaims> {
        match decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &self.validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                debug!(error = %e, "Token payload could not be decoded");
                None
            }
        }
    }

    /// Classifies `token` against the current time.
    pub fn inspect(&self, token: &str) -> TokenState {
        self.inspect_at(token, Utc::now().timestamp())
    }

    /// Classifies `token` against `now` (seconds since epoch).
    pub fn inspect_at(&self, token: &str, now: i64) -> TokenState {
        match self.decode(token) {
            Some(claims) if claims.is_expired_at(now, self.leeway_seconds) => TokenState::Expired,
            Some(claims) => TokenState::Valid(claims),
            None => TokenState::Invalid,
        }
    }
}
