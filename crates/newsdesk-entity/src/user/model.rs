//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use newsdesk_core::types::UserId;

use super::role::UserRole;
use super::status::AccountStatus;

/// A platform account as held by the client after login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role.
    pub role: UserRole,
    /// When the account was created (or first seen by the client).
    pub created_at: DateTime<Utc>,
    /// Whether an admin blocked the account.
    #[serde(default)]
    pub is_blocked: bool,
}

impl User {
    /// Account status derived from the blocked flag.
    pub fn status(&self) -> AccountStatus {
        AccountStatus::from_blocked(self.is_blocked)
    }

    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// The `user` object returned by the login endpoints.
///
/// Only `id`, `email` and `name` are reliably present; the role is
/// missing from employee logins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginUser {
    /// User identifier.
    #[serde(alias = "_id")]
    pub id: UserId,
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Role, when reported.
    #[serde(default)]
    pub role: Option<UserRole>,
}

impl LoginUser {
    /// Turn the login payload into a session user.
    ///
    /// `portal_role` is used when the payload carries no role, and the
    /// creation time is the moment of login.
    pub fn into_user(self, portal_role: UserRole, now: DateTime<Utc>) -> User {
        User {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role.unwrap_or(portal_role),
            created_at: now,
            is_blocked: false,
        }
    }
}
