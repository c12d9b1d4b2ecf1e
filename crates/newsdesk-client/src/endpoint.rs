//! Endpoint URL construction.

use reqwest::Url;

use newsdesk_core::error::AppError;

/// Resolves endpoint paths against the configured base URL.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// Parse the base URL, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let base = Url::parse(base_url).map_err(|e| {
            AppError::configuration(format!("Invalid API base URL '{base_url}': {e}"))
        })?;
        if base.cannot_be_a_base() {
            return Err(AppError::configuration(format!(
                "API base URL '{base_url}' cannot carry paths"
            )));
        }
        Ok(Self { base })
    }

    /// The base URL.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Append `segments` to the base path. Each segment is percent-encoded.
    pub fn url(&self, segments: &[&str]) -> Url {
        self.url_with_query(segments, &[])
    }

    /// Append `segments` and the non-empty query `pairs`.
    pub fn url_with_query(&self, segments: &[&str], pairs: &[(&str, Option<String>)]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        let present: Vec<(&str, &str)> = pairs
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (*key, v)))
            .collect();
        if !present.is_empty() {
            url.query_pairs_mut().extend_pairs(present);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_to_base_path() {
        let endpoints = Endpoints::new("http://localhost:5000/api").unwrap();
        assert_eq!(
            endpoints.url(&["news", "abc", "view"]).as_str(),
            "http://localhost:5000/api/news/abc/view"
        );

        let trailing = Endpoints::new("http://localhost:5000/api/").unwrap();
        assert_eq!(
            trailing.url(&["auth", "v1", "login"]).as_str(),
            "http://localhost:5000/api/auth/v1/login"
        );
    }

    #[test]
    fn test_segments_are_encoded() {
        let endpoints = Endpoints::new("http://h/api").unwrap();
        assert_eq!(
            endpoints.url(&["news", "category", "Arts & Culture"]).as_str(),
            "http://h/api/news/category/Arts%20&%20Culture"
        );
    }

    #[test]
    fn test_query_skips_missing_values() {
        let endpoints = Endpoints::new("http://h/api").unwrap();
        let url = endpoints.url_with_query(
            &["news", "mine"],
            &[
                ("page", Some("2".into())),
                ("search", None),
                ("category", Some("Sports".into())),
            ],
        );
        assert_eq!(url.as_str(), "http://h/api/news/mine?page=2&category=Sports");

        let bare = endpoints.url_with_query(&["news"], &[("search", None)]);
        assert_eq!(bare.as_str(), "http://h/api/news");
    }

    #[test]
    fn test_rejects_bad_base() {
        assert!(Endpoints::new("not a url").is_err());
        assert!(Endpoints::new("mailto:desk@example.com").is_err());
    }
}
