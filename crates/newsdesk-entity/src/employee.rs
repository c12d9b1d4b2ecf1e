//! Employee directory rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use newsdesk_core::types::UserId;

use crate::user::{AccountStatus, UserRole};

/// An employee as listed in the admin directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// User id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Contact number.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Role; directory rows are employees unless stated otherwise.
    #[serde(default)]
    pub role: UserRole,
    /// Department.
    #[serde(default)]
    pub department: String,
    /// Beat or specialization.
    #[serde(default)]
    pub specialization: Option<String>,
    /// Account creation.
    pub created_at: DateTime<Utc>,
    /// Last activity.
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,
    /// Whether the account is blocked.
    #[serde(default)]
    pub is_blocked: bool,
    /// Articles written.
    #[serde(default)]
    pub articles_count: u32,
    /// Articles approved.
    #[serde(default)]
    pub approved_count: u32,
    /// Articles pending review.
    #[serde(default)]
    pub pending_count: u32,
    /// Articles rejected.
    #[serde(default)]
    pub rejected_count: u32,
}

impl Employee {
    /// Account status derived from the blocked flag.
    pub fn status(&self) -> AccountStatus {
        AccountStatus::from_blocked(self.is_blocked)
    }

    /// Share of written articles that were approved, in whole percent.
    pub fn performance_score(&self) -> u32 {
        if self.articles_count == 0 {
            return 0;
        }
        let ratio = f64::from(self.approved_count) / f64::from(self.articles_count);
        (ratio * 100.0).round() as u32
    }
}

/// Form for registering a new employee account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Contact number.
    pub phone_number: String,
    /// Role sent to the platform.
    pub role: UserRole,
    /// Initial password.
    pub password: String,
}
