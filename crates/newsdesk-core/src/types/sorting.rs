//! Sorting options for article lists.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Sort order offered by the admin article tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleSort {
    /// Most recent first.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
    /// Alphabetical by title.
    Title,
    /// Alphabetical by author name.
    Author,
    /// Alphabetical by category.
    Category,
}

impl ArticleSort {
    /// Return the option as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Title => "title",
            Self::Author => "author",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for ArticleSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArticleSort {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "category" => Ok(Self::Category),
            _ => Err(AppError::validation(format!(
                "Invalid sort: '{s}'. Expected one of: newest, oldest, title, author, category"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("Title".parse::<ArticleSort>().unwrap(), ArticleSort::Title);
        assert!("popular".parse::<ArticleSort>().is_err());
    }
}
