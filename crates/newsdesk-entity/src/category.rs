//! News categories.

use serde::{Deserialize, Serialize};

use newsdesk_core::types::CategoryId;

/// A news category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
}

impl Category {
    /// Create a category, deriving the slug from the name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: CategoryId::new(id),
            slug: slugify(&name),
            name,
        }
    }

    /// The categories every installation starts with.
    pub fn defaults() -> Vec<Self> {
        [
            "Politics",
            "Technology",
            "Sports",
            "Business",
            "Entertainment",
            "Health",
        ]
        .iter()
        .enumerate()
        .map(|(i, name)| Self::new((i + 1).to_string(), *name))
        .collect()
    }

    /// Find a default category by case-insensitive name.
    pub fn find_default(name: &str) -> Option<Self> {
        Self::defaults()
            .into_iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }
}

fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let defaults = Category::defaults();
        assert_eq!(defaults.len(), 6);
        assert_eq!(defaults[1].name, "Technology");
        assert_eq!(defaults[1].slug, "technology");
        assert_eq!(defaults[1].id.as_str(), "2");
    }

    #[test]
    fn test_slug_and_lookup() {
        assert_eq!(Category::new("7", "World News").slug, "world-news");
        assert!(Category::find_default("sports").is_some());
        assert!(Category::find_default("Weather").is_none());
    }
}
