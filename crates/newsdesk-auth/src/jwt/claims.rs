//! Claims carried by the platform's bearer tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use newsdesk_entity::user::UserRole;

/// Payload of a platform-issued JWT.
///
/// Only `exp` is required; the platform fills the rest inconsistently
/// between the employee and admin login endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Standard subject claim.
    #[serde(default)]
    pub sub: Option<String>,
    /// User id as the platform writes it.
    #[serde(default)]
    pub id: Option<String>,
    /// Email of the signed-in user.
    #[serde(default)]
    pub email: Option<String>,
    /// Role of the signed-in user, as written by the platform.
    #[serde(default)]
    pub role: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    #[serde(default)]
    pub iat: Option<i64>,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl TokenClaims {
    /// The user id, from `id` or else `sub`.
    pub fn user_id(&self) -> Option<&str> {
        self.id.as_deref().or(self.sub.as_deref())
    }

    /// The role, when it names a known one.
    pub fn role(&self) -> Option<UserRole> {
        self.role.as_deref().and_then(|r| r.parse().ok())
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Whether the token is past its expiry at `now`, tolerating `leeway_seconds`.
    pub fn is_expired_at(&self, now: i64, leeway_seconds: u64) -> bool {
        let leeway = i64::try_from(leeway_seconds).unwrap_or(i64::MAX);
        self.exp < now.saturating_sub(leeway)
    }

    /// Returns the remaining lifetime in seconds at `now` (0 if expired).
    pub fn remaining_seconds(&self, now: i64) -> u64 {
        u64::try_from(self.exp - now).unwrap_or(0)
    }
}
