//! News endpoints.

use chrono::Utc;
use reqwest::Method;
use serde::Deserialize;
use tracing::debug;

use newsdesk_core::error::AppError;
use newsdesk_core::types::{ArticleId, CategoryFilter, PageQuery, PagedNews, SearchTerm};
use newsdesk_entity::article::{Article, ArticleDraft, NewsPayload, NewsRecord};

use crate::client::ApiClient;

/// Query of the authored-articles list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MyNewsQuery {
    /// Page and page size.
    pub page: PageQuery,
    /// Free-text search.
    pub search: SearchTerm,
    /// Category restriction.
    pub category: CategoryFilter,
}

impl MyNewsQuery {
    /// Query pairs; empty search and `all` categories are omitted.
    pub fn to_pairs(&self) -> Vec<(&'static str, Option<String>)> {
        let mut pairs: Vec<(&'static str, Option<String>)> = self
            .page
            .to_pairs()
            .into_iter()
            .map(|(k, v)| (k, Some(v)))
            .collect();
        pairs.push(("search", self.search.as_query().map(str::to_string)));
        pairs.push(("category", self.category.as_query().map(str::to_string)));
        pairs
    }
}

#[derive(Debug, Deserialize)]
struct ViewCount {
    #[serde(default)]
    views: Option<u64>,
}

fn page_pairs(query: &PageQuery) -> Vec<(&'static str, Option<String>)> {
    query.to_pairs().into_iter().map(|(k, v)| (k, Some(v))).collect()
}

fn into_articles(page: PagedNews<NewsRecord>) -> PagedNews<Article> {
    let now = Utc::now();
    page.map(|record| record.into_article(now))
}

impl ApiClient {
    /// `GET news?page&limit`, retried on transient failures.
    pub async fn list_news(&self, query: PageQuery) -> Result<PagedNews<Article>, AppError> {
        let url = self.endpoints().url_with_query(&["news"], &page_pairs(&query));
        let page: PagedNews<NewsRecord> = self.get_with_retry("list_news", url).await?;
        debug!(
            page = query.page,
            received = page.news.len(),
            total_pages = page.page_count(),
            "Fetched news page"
        );
        Ok(into_articles(page))
    }

    /// `GET news/{id}`.
    pub async fn get_news(&self, id: &ArticleId) -> Result<Article, AppError> {
        let url = self.endpoints().url(&["news", id.as_str()]);
        let record: NewsRecord = self.send::<(), _>(Method::GET, url, None).await?;
        Ok(record.into_article(Utc::now()))
    }

    /// `POST news/{id}/view`. Returns the new count when reported.
    pub async fn record_view(&self, id: &ArticleId) -> Result<Option<u64>, AppError> {
        let url = self.endpoints().url(&["news", id.as_str(), "view"]);
        let count: ViewCount = self.send::<(), _>(Method::POST, url, None).await?;
        Ok(count.views)
    }

    /// `GET news/category/{category}?limit`.
    pub async fn news_by_category(
        &self,
        category: &str,
        limit: usize,
    ) -> Result<Vec<Article>, AppError> {
        let url = self.endpoints().url_with_query(
            &["news", "category", category],
            &[("limit", Some(limit.to_string()))],
        );
        let page: PagedNews<NewsRecord> = self.send::<(), _>(Method::GET, url, None).await?;
        Ok(into_articles(page).news)
    }

    /// `GET news/mine?page&limit&search&category`.
    pub async fn my_news(&self, query: &MyNewsQuery) -> Result<PagedNews<Article>, AppError> {
        let url = self
            .endpoints()
            .url_with_query(&["news", "mine"], &query.to_pairs());
        let page: PagedNews<NewsRecord> = self.send::<(), _>(Method::GET, url, None).await?;
        Ok(into_articles(page))
    }

    /// `POST news`. Returns the platform's message.
    pub async fn create_news(&self, draft: &ArticleDraft) -> Result<Option<String>, AppError> {
        let url = self.endpoints().url(&["news"]);
        let (_, text) = self
            .send_raw(Method::POST, url, Some(&NewsPayload::from(draft)))
            .await?;
        Ok(super::acknowledgement(&text))
    }

    /// `PUT news/{id}`.
    pub async fn update_news(
        &self,
        id: &ArticleId,
        draft: &ArticleDraft,
    ) -> Result<Option<String>, AppError> {
        let url = self.endpoints().url(&["news", id.as_str()]);
        let (_, text) = self
            .send_raw(Method::PUT, url, Some(&NewsPayload::from(draft)))
            .await?;
        Ok(super::acknowledgement(&text))
    }

    /// `DELETE news/{id}`.
    pub async fn delete_news(&self, id: &ArticleId) -> Result<(), AppError> {
        let url = self.endpoints().url(&["news", id.as_str()]);
        self.send_raw::<()>(Method::DELETE, url, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_my_news_pairs_omit_blank_filters() {
        let query = MyNewsQuery {
            page: PageQuery::new(3, 10),
            search: SearchTerm::new("  "),
            category: CategoryFilter::parse("all"),
        };
        let present: Vec<_> = query
            .to_pairs()
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k, v)))
            .collect();
        assert_eq!(present, vec![("page", "3".to_string()), ("limit", "10".to_string())]);
    }

    #[test]
    fn test_my_news_pairs_carry_filters() {
        let query = MyNewsQuery {
            page: PageQuery::default(),
            search: SearchTerm::new("Budget"),
            category: CategoryFilter::parse("Politics"),
        };
        let pairs = query.to_pairs();
        assert!(pairs.contains(&("search", Some("Budget".to_string()))));
        assert!(pairs.contains(&("category", Some("Politics".to_string()))));
    }
}
