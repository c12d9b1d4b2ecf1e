//! The employee's own articles, paginated by the platform.

use newsdesk_client::{ApiClient, MyNewsQuery};
use newsdesk_core::config::PaginationConfig;
use newsdesk_core::error::AppError;
use newsdesk_core::pager::{PageBar, Paginator};
use newsdesk_core::types::{ArticleId, CategoryFilter, PageQuery, PagedNews, SearchTerm};
use newsdesk_entity::article::Article;

use crate::listing::RangeSummary;

/// Server-paginated list of the signed-in employee's articles.
///
/// Only the current page is held; the paginator tracks the platform's
/// total so the controls and range line stay correct.
#[derive(Debug, Clone)]
pub struct MyArticles {
    search: SearchTerm,
    category: CategoryFilter,
    rows: Vec<Article>,
    paginator: Paginator,
}

impl MyArticles {
    /// Empty list sized from configuration.
    pub fn new(config: &PaginationConfig) -> Result<Self, AppError> {
        Ok(Self {
            search: SearchTerm::default(),
            category: CategoryFilter::All,
            rows: Vec::new(),
            paginator: Paginator::new(0, config.my_articles)?,
        })
    }

    /// Query for the current page and filters.
    pub fn query(&self) -> MyNewsQuery {
        MyNewsQuery {
            page: PageQuery::new(self.paginator.current_page(), self.paginator.items_per_page()),
            search: self.search.clone(),
            category: self.category.clone(),
        }
    }

    /// Install a page returned by the platform.
    ///
    /// Without `totalItems` the total is taken as the rows before this
    /// page plus the rows on it, so the requested page stays current.
    pub fn apply_page(&mut self, page: PagedNews<Article>) {
        let total = page.total_items.unwrap_or_else(|| {
            self.paginator
                .window()
                .start_index
                .saturating_add(page.news.len())
        });
        self.rows = page.news;
        self.paginator.set_total_items(total);
    }

    /// Fetch the current page and install it.
    pub async fn fetch(&mut self, client: &ApiClient) -> Result<(), AppError> {
        let page = client.my_news(&self.query()).await?;
        self.apply_page(page);
        Ok(())
    }

    /// Change the search; a different term returns to page 1.
    pub fn set_search(&mut self, raw: &str) -> bool {
        let search = SearchTerm::new(raw);
        if search == self.search {
            return false;
        }
        self.search = search;
        self.paginator.reset();
        true
    }

    /// Change the category; a different one returns to page 1.
    pub fn set_category(&mut self, raw: &str) -> bool {
        let category = CategoryFilter::parse(raw);
        if category == self.category {
            return false;
        }
        self.category = category;
        self.paginator.reset();
        true
    }

    /// Request page `page` (a fetch must follow).
    ///
    /// Before the first fetch the total is unknown, so the page is taken
    /// as given unless its offset does not fit in `usize`.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if self.paginator.total_items() == 0 && page > 1 {
            if let Some(total) = page.checked_mul(self.paginator.items_per_page()) {
                self.paginator.set_total_items(total);
            }
        }
        self.paginator.go_to_page(page)
    }

    /// Drop a deleted article from the page and the total.
    pub fn remove(&mut self, id: &ArticleId) -> Option<Article> {
        let index = self.rows.iter().position(|a| &a.id == id)?;
        let removed = self.rows.remove(index);
        self.paginator
            .set_total_items(self.paginator.total_items().saturating_sub(1));
        Some(removed)
    }

    /// Rows of the current page.
    pub fn page_items(&self) -> &[Article] {
        &self.rows
    }

    /// The paginator.
    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Pagination controls.
    pub fn page_bar(&self) -> PageBar {
        self.paginator.page_bar()
    }

    /// Range line for the current page.
    pub fn summary(&self) -> Option<RangeSummary> {
        RangeSummary::from_window(self.paginator.window(), self.paginator.total_items())
    }
}
