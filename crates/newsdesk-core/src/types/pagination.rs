//! Server-side pagination types for the news endpoints.

use serde::{Deserialize, Serialize};

/// Default `limit` requested from paginated endpoints.
const DEFAULT_LIMIT: usize = 10;
/// Largest `limit` the client will ask for.
const MAX_LIMIT: usize = 100;

/// `page`/`limit` query parameters of a paginated endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: usize,
    /// Number of items per page.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl PageQuery {
    /// Create a page query, clamping both values to sane bounds.
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Query pairs in the order the API expects them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("page", self.page.to_string()), ("limit", self.limit.to_string())]
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Paginated envelope returned by the news endpoints.
///
/// The platform reports `totalPages` on every list and `totalItems` on the
/// authored-articles list only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedNews<T> {
    /// Records of the requested page.
    #[serde(default = "Vec::new")]
    pub news: Vec<T>,
    /// Total number of pages, when reported.
    #[serde(default)]
    pub total_pages: Option<usize>,
    /// Total number of records across pages, when reported.
    #[serde(default)]
    pub total_items: Option<usize>,
}

impl<T> PagedNews<T> {
    /// Page count, treating a missing or zero value as a single page.
    pub fn page_count(&self) -> usize {
        self.total_pages.filter(|&n| n > 0).unwrap_or(1)
    }

    /// Item count, falling back to the number of records on this page.
    pub fn item_count(&self) -> usize {
        self.total_items.unwrap_or(self.news.len())
    }

    /// Convert every record, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedNews<U> {
        PagedNews {
            news: self.news.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            total_items: self.total_items,
        }
    }
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_values() {
        let q = PageQuery::new(0, 1000);
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 100);
        assert_eq!(PageQuery::new(3, 0).limit, 1);
    }

    #[test]
    fn test_envelope_fallbacks() {
        let page: PagedNews<u32> = serde_json::from_str(r#"{"news":[1,2,3]}"#).unwrap();
        assert_eq!(page.page_count(), 1);
        assert_eq!(page.item_count(), 3);

        let page: PagedNews<u32> =
            serde_json::from_str(r#"{"news":[],"totalPages":4,"totalItems":37}"#).unwrap();
        assert_eq!(page.page_count(), 4);
        assert_eq!(page.item_count(), 37);
    }
}
