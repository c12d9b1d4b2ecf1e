//! Public news feed.

use tracing::debug;

use newsdesk_client::ApiClient;
use newsdesk_core::config::PaginationConfig;
use newsdesk_core::error::AppError;
use newsdesk_core::pager::PageBar;
use newsdesk_core::types::{CategoryFilter, PageQuery, PagedNews, SearchTerm};
use newsdesk_entity::article::Article;

use crate::listing::{Listing, RangeSummary};

/// The reader-facing feed.
///
/// The platform pages the feed (`server_page`), and the client pages the
/// fetched batch again: the newest few go to the featured slider and the
/// rest are shown `news_feed` per page.
#[derive(Debug, Clone)]
pub struct NewsFeed {
    fetched: Vec<Article>,
    category: CategoryFilter,
    search: SearchTerm,
    featured_count: usize,
    featured: Vec<Article>,
    listing: Listing<Article>,
    server_page: usize,
    server_page_size: usize,
    server_total_pages: usize,
}

impl NewsFeed {
    /// Empty feed sized from configuration.
    pub fn new(config: &PaginationConfig) -> Result<Self, AppError> {
        Ok(Self {
            fetched: Vec::new(),
            category: CategoryFilter::All,
            search: SearchTerm::default(),
            featured_count: config.featured_articles,
            featured: Vec::new(),
            listing: Listing::new(config.news_feed)?,
            server_page: 1,
            server_page_size: config.server_page,
            server_total_pages: 1,
        })
    }

    /// Install a batch fetched for `server_page`.
    pub fn load(&mut self, server_page: usize, page: PagedNews<Article>) {
        self.server_page = server_page.max(1);
        self.server_total_pages = page.page_count();
        self.fetched = page.news;
        debug!(
            server_page = self.server_page,
            server_total_pages = self.server_total_pages,
            fetched = self.fetched.len(),
            "Feed batch loaded"
        );
        self.refresh();
    }

    /// Fetch `server_page` from the platform and install it.
    pub async fn fetch(&mut self, client: &ApiClient, server_page: usize) -> Result<(), AppError> {
        let query = PageQuery::new(server_page, self.server_page_size);
        let page = client.list_news(query).await?;
        self.load(query.page, page);
        Ok(())
    }

    /// Restrict to one category (`all` or empty clears it).
    pub fn set_category(&mut self, raw: &str) {
        self.category = CategoryFilter::parse(raw);
        self.refresh();
    }

    /// Search title, excerpt and body.
    pub fn set_search(&mut self, raw: &str) {
        self.search = SearchTerm::new(raw);
        self.refresh();
    }

    fn refresh(&mut self) {
        let mut visible: Vec<Article> = self
            .fetched
            .iter()
            .filter(|a| a.status.is_published())
            .filter(|a| self.category.matches(&a.category))
            .filter(|a| {
                self.search
                    .matches_any(&[a.title.as_str(), a.excerpt.as_str(), a.content.as_str()])
            })
            .cloned()
            .collect();
        visible.sort_by(|a, b| b.display_date().cmp(&a.display_date()));

        let split = self.featured_count.min(visible.len());
        let regular = visible.split_off(split);
        self.featured = visible;
        self.listing.replace_rows(regular);
    }

    /// Articles of the featured slider.
    pub fn featured(&self) -> &[Article] {
        &self.featured
    }

    /// Regular articles of the current client page.
    pub fn page_items(&self) -> &[Article] {
        self.listing.page_items()
    }

    /// Number of articles that passed the filters, featured included.
    pub fn visible_count(&self) -> usize {
        self.featured.len() + self.listing.len()
    }

    /// Client-side pagination of the regular articles.
    pub fn listing(&self) -> &Listing<Article> {
        &self.listing
    }

    /// Jump to a client page of the regular articles.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.listing.go_to_page(page)
    }

    /// Pagination controls of the regular articles.
    pub fn page_bar(&self) -> PageBar {
        self.listing.page_bar()
    }

    /// Range line of the regular articles.
    pub fn summary(&self) -> Option<RangeSummary> {
        self.listing.summary()
    }

    /// Server page currently loaded.
    pub fn server_page(&self) -> usize {
        self.server_page
    }

    /// Server pages reported by the platform.
    pub fn server_total_pages(&self) -> usize {
        self.server_total_pages
    }

    /// Whether the platform has a following batch.
    pub fn has_more(&self) -> bool {
        self.server_page < self.server_total_pages && !self.fetched.is_empty()
    }

    /// Whether a preceding batch exists.
    pub fn has_previous_batch(&self) -> bool {
        self.server_page > 1
    }

    /// Query of the following batch, if any.
    pub fn next_batch(&self) -> Option<PageQuery> {
        self.has_more()
            .then(|| PageQuery::new(self.server_page + 1, self.server_page_size))
    }

    /// Query of the preceding batch, if any.
    pub fn previous_batch(&self) -> Option<PageQuery> {
        self.has_previous_batch()
            .then(|| PageQuery::new(self.server_page - 1, self.server_page_size))
    }
}
