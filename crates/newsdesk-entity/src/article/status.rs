//! Article moderation status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle of an article through moderation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    /// Saved but not submitted.
    Draft,
    /// Submitted and waiting for an admin.
    Pending,
    /// Published to readers.
    #[default]
    Approved,
    /// Sent back by an admin.
    Rejected,
}

impl ArticleStatus {
    /// Whether readers can see the article.
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Approved)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = newsdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "pending" => Ok(Self::Pending),
            "approved" | "published" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(newsdesk_core::AppError::validation(format!(
                "Invalid article status: '{s}'. Expected one of: draft, pending, approved, rejected"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_published_alias() {
        assert_eq!("Published".parse::<ArticleStatus>().unwrap(), ArticleStatus::Approved);
        assert_eq!("pending".parse::<ArticleStatus>().unwrap(), ArticleStatus::Pending);
        assert!("archived".parse::<ArticleStatus>().is_err());
    }
}
