//! Account status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether an account may sign in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Account is active and can log in.
    #[default]
    Active,
    /// Account was blocked by an admin.
    Blocked,
}

impl AccountStatus {
    /// Derive the status from the platform's `isBlocked` flag.
    pub fn from_blocked(is_blocked: bool) -> Self {
        if is_blocked { Self::Blocked } else { Self::Active }
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Blocked => "blocked",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status restriction of the employee directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Every account.
    #[default]
    All,
    /// Only active accounts.
    Active,
    /// Only blocked accounts.
    Blocked,
}

impl StatusFilter {
    /// Whether an account with `status` passes the filter.
    pub fn matches(&self, status: AccountStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status == AccountStatus::Active,
            Self::Blocked => status == AccountStatus::Blocked,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = newsdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "blocked" => Ok(Self::Blocked),
            _ => Err(newsdesk_core::AppError::validation(format!(
                "Invalid status filter: '{s}'. Expected one of: all, active, blocked"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches() {
        assert!(StatusFilter::All.matches(AccountStatus::Blocked));
        assert!(StatusFilter::Active.matches(AccountStatus::Active));
        assert!(!StatusFilter::Active.matches(AccountStatus::Blocked));
        assert_eq!("Blocked".parse::<StatusFilter>().unwrap(), StatusFilter::Blocked);
    }
}
