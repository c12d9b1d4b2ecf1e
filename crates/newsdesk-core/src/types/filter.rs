//! Filter types applied by the list views.

use serde::{Deserialize, Serialize};

/// Case-insensitive substring search term.
///
/// Keeps the trimmed text as typed for the server and a lowercased copy for
/// local matching. An empty term matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SearchTerm {
    text: String,
    needle: String,
}

impl SearchTerm {
    /// Normalize a raw search box value.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let text = raw.as_ref().trim().to_string();
        let needle = text.to_lowercase();
        Self { text, needle }
    }

    /// Whether the term filters nothing out.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The trimmed term with its original case.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether any of `fields` contains the term.
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        self.is_empty()
            || fields
                .iter()
                .any(|field| field.to_lowercase().contains(&self.needle))
    }

    /// The term as an optional query parameter (`None` when empty).
    pub fn as_query(&self) -> Option<&str> {
        (!self.is_empty()).then_some(self.text.as_str())
    }
}

impl From<String> for SearchTerm {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<SearchTerm> for String {
    fn from(term: SearchTerm) -> Self {
        term.text
    }
}

/// Category restriction; `all` (or empty) disables it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Only the named category, compared case-insensitively.
    Only(String),
}

impl CategoryFilter {
    /// Parse a select-box value.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(trimmed.to_string())
        }
    }

    /// Build from an optional CLI/query value.
    pub fn from_option(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    /// Whether `category` passes the filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => category.eq_ignore_ascii_case(wanted),
        }
    }

    /// The category as an optional query parameter.
    pub fn as_query(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(name) => Some(name.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_term_is_case_insensitive() {
        let term = SearchTerm::new("  Budget ");
        assert!(term.matches_any(&["City BUDGET approved"]));
        assert!(!term.matches_any(&["Sports roundup", "Weather"]));
    }

    #[test]
    fn test_search_query_keeps_original_case() {
        let term = SearchTerm::new("  New York ");
        assert_eq!(term.as_query(), Some("New York"));
        assert_eq!(term.as_str(), "New York");
        assert!(term.matches_any(&["new york council"]));

        let json = serde_json::to_string(&term).unwrap();
        assert_eq!(json, "\"New York\"");
        let back: SearchTerm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, term);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let term = SearchTerm::new("   ");
        assert!(term.is_empty());
        assert!(term.matches_any(&[]));
        assert_eq!(term.as_query(), None);
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(CategoryFilter::parse("ALL"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        let sports = CategoryFilter::parse("Sports");
        assert!(sports.matches("sports"));
        assert!(!sports.matches("Politics"));
        assert_eq!(sports.as_query(), Some("Sports"));
    }
}
