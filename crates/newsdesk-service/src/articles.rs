//! Admin table of every article.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use tracing::info;

use newsdesk_core::error::AppError;
use newsdesk_core::pager::PageBar;
use newsdesk_core::types::{ArticleId, ArticleSort, CategoryFilter, SearchTerm};
use newsdesk_entity::article::{Article, ArticleDraft, ArticleStatus, strip_html};

use crate::listing::{Listing, RangeSummary};
use crate::ordering::sort_articles;

/// Header counters of the article table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArticleStats {
    /// Every article.
    pub total: usize,
    /// Approved articles.
    pub published: usize,
    /// Articles awaiting review.
    pub pending: usize,
    /// Articles created in the current calendar month.
    pub this_month: usize,
    /// Mean body length in words.
    pub average_words: usize,
}

/// Admin edit of an article.
#[derive(Debug, Clone, Default)]
pub struct ArticleEdit {
    /// New headline.
    pub title: String,
    /// New summary.
    pub excerpt: String,
    /// New HTML body.
    pub content: String,
    /// New category.
    pub category: String,
    /// New status, if changed.
    pub status: Option<ArticleStatus>,
}

/// Searchable, filterable, sortable table of all articles.
#[derive(Debug, Clone)]
pub struct AllArticles {
    articles: Vec<Article>,
    search: SearchTerm,
    category: CategoryFilter,
    status: Option<ArticleStatus>,
    sort: ArticleSort,
    listing: Listing<Article>,
}

impl AllArticles {
    /// Table over `articles`, `items_per_page` rows per page.
    pub fn new(articles: Vec<Article>, items_per_page: usize) -> Result<Self, AppError> {
        let mut view = Self {
            articles,
            search: SearchTerm::default(),
            category: CategoryFilter::All,
            status: None,
            sort: ArticleSort::default(),
            listing: Listing::new(items_per_page)?,
        };
        view.refresh();
        Ok(view)
    }

    /// Search title, author and body.
    pub fn set_search(&mut self, raw: &str) {
        self.search = SearchTerm::new(raw);
        self.refresh();
    }

    /// Restrict to one category.
    pub fn set_category(&mut self, raw: &str) {
        self.category = CategoryFilter::parse(raw);
        self.refresh();
    }

    /// Restrict to one status (`None` shows all).
    pub fn set_status(&mut self, status: Option<ArticleStatus>) {
        self.status = status;
        self.refresh();
    }

    /// Change the sort order.
    pub fn set_sort(&mut self, sort: ArticleSort) {
        self.sort = sort;
        self.refresh();
    }

    fn refresh(&mut self) {
        let mut rows: Vec<Article> = self
            .articles
            .iter()
            .filter(|a| {
                self.search
                    .matches_any(&[a.title.as_str(), a.author.name.as_str(), a.content.as_str()])
            })
            .filter(|a| self.category.matches(&a.category))
            .filter(|a| self.status.is_none_or(|s| a.status == s))
            .cloned()
            .collect();
        sort_articles(&mut rows, self.sort, Article::display_date);
        self.listing.replace_rows(rows);
    }

    /// Counters over the whole collection, unfiltered.
    pub fn stats(&self, now: DateTime<Utc>) -> ArticleStats {
        let total = self.articles.len();
        let words: usize = self
            .articles
            .iter()
            .map(|a| strip_html(&a.content).split_whitespace().count())
            .sum();

        ArticleStats {
            total,
            published: self.count_status(ArticleStatus::Approved),
            pending: self.count_status(ArticleStatus::Pending),
            this_month: self
                .articles
                .iter()
                .filter(|a| {
                    a.created_at.year() == now.year() && a.created_at.month() == now.month()
                })
                .count(),
            average_words: if total == 0 { 0 } else { (words + total / 2) / total },
        }
    }

    fn count_status(&self, status: ArticleStatus) -> usize {
        self.articles.iter().filter(|a| a.status == status).count()
    }

    /// Delete an article.
    pub fn delete(&mut self, id: &ArticleId) -> Result<Article, AppError> {
        let index = self.position(id)?;
        let removed = self.articles.remove(index);
        info!(article_id = %id, "Article deleted");
        self.refresh();
        Ok(removed)
    }

    /// Apply an admin edit; title, excerpt, body and category are required.
    pub fn update(
        &mut self,
        id: &ArticleId,
        edit: ArticleEdit,
        now: DateTime<Utc>,
    ) -> Result<&Article, AppError> {
        let index = self.position(id)?;

        let draft = ArticleDraft {
            title: edit.title,
            excerpt: edit.excerpt,
            content: edit.content,
            category: edit.category,
            image_url: None,
        };
        draft.validate_for_update()?;

        let article = &mut self.articles[index];
        article.title = draft.title.trim().to_string();
        article.excerpt = draft.excerpt.trim().to_string();
        article.content = draft.content;
        article.category = draft.category.trim().to_string();
        if let Some(status) = edit.status {
            if status.is_published() && article.published_at.is_none() {
                article.published_at = Some(now);
            }
            article.status = status;
        }
        article.updated_at = now;
        info!(article_id = %id, "Article updated");

        self.refresh();
        Ok(&self.articles[index])
    }

    fn position(&self, id: &ArticleId) -> Result<usize, AppError> {
        self.articles
            .iter()
            .position(|a| &a.id == id)
            .ok_or_else(|| AppError::not_found(format!("Article '{id}' not found")))
    }

    /// Every article, unfiltered.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Filtered and sorted rows with their pagination.
    pub fn listing(&self) -> &Listing<Article> {
        &self.listing
    }

    /// Rows of the current page.
    pub fn page_items(&self) -> &[Article] {
        self.listing.page_items()
    }

    /// Jump to a page.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.listing.go_to_page(page)
    }

    /// Pagination controls.
    pub fn page_bar(&self) -> PageBar {
        self.listing.page_bar()
    }

    /// Range line for the current page.
    pub fn summary(&self) -> Option<RangeSummary> {
        self.listing.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::fixtures::{article, at};
    use newsdesk_core::error::ErrorKind;

    fn sample() -> Vec<Article> {
        (1..=25)
            .map(|day| {
                let status = match day % 3 {
                    0 => ArticleStatus::Pending,
                    1 => ArticleStatus::Approved,
                    _ => ArticleStatus::Rejected,
                };
                let category = if day % 2 == 0 { "Sports" } else { "Politics" };
                article(&format!("a{day}"), &format!("Story {day}"), category, status, day as u32)
            })
            .collect()
    }

    #[test]
    fn test_default_order_is_newest_first() {
        let view = AllArticles::new(sample(), 10).unwrap();
        assert_eq!(view.page_items()[0].id.as_str(), "a25");
        assert_eq!(view.listing().paginator().total_pages(), 3);
    }

    #[test]
    fn test_filters_combine_and_reclamp() {
        let mut view = AllArticles::new(sample(), 10).unwrap();
        view.go_to_page(3);

        view.set_status(Some(ArticleStatus::Pending));
        assert_eq!(view.listing().len(), 8);
        assert_eq!(view.listing().paginator().current_page(), 1);

        view.set_category("sports");
        assert!(view.page_items().iter().all(|a| a.category == "Sports"));
        assert!(view.page_items().iter().all(|a| a.status == ArticleStatus::Pending));
        assert_eq!(view.listing().len(), 4);
    }

    #[test]
    fn test_search_matches_author() {
        let mut view = AllArticles::new(sample(), 10).unwrap();
        view.set_search("author a7");
        assert_eq!(view.listing().len(), 1);
    }

    #[test]
    fn test_stats() {
        let view = AllArticles::new(sample(), 10).unwrap();
        let stats = view.stats(at(20));
        assert_eq!(stats.total, 25);
        assert_eq!(stats.published, 9);
        assert_eq!(stats.pending, 8);
        assert_eq!(stats.this_month, 25);
        assert_eq!(stats.average_words, 4);

        let empty = AllArticles::new(Vec::new(), 10).unwrap();
        assert_eq!(empty.stats(at(1)).average_words, 0);
    }

    #[test]
    fn test_delete_reclamps() {
        let mut view = AllArticles::new(sample(), 12).unwrap();
        view.set_sort(ArticleSort::Oldest);
        view.go_to_page(3);
        assert_eq!(view.page_items().len(), 1);

        view.delete(&ArticleId::new("a25")).unwrap();
        assert_eq!(view.listing().paginator().current_page(), 2);

        let err = view.delete(&ArticleId::new("a25")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_update() {
        let mut view = AllArticles::new(sample(), 10).unwrap();
        let id = ArticleId::new("a3");
        let edit = ArticleEdit {
            title: "Fresh headline".into(),
            excerpt: "Fresh excerpt".into(),
            content: "<p>Fresh body</p>".into(),
            category: "Health".into(),
            status: Some(ArticleStatus::Approved),
        };

        let updated = view.update(&id, edit, at(28)).unwrap();
        assert_eq!(updated.title, "Fresh headline");
        assert_eq!(updated.status, ArticleStatus::Approved);
        assert_eq!(updated.updated_at, at(28));
        assert_eq!(updated.published_at, Some(at(28)));

        let err = view.update(&id, ArticleEdit::default(), at(28)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
