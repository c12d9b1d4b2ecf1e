//! Moderation queue of articles awaiting review.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use newsdesk_core::error::AppError;
use newsdesk_core::pager::PageBar;
use newsdesk_core::types::{ArticleId, ArticleSort, CategoryFilter, SearchTerm};
use newsdesk_entity::article::{Article, ArticleStatus};

use crate::listing::{Listing, RangeSummary};
use crate::ordering::sort_articles;

/// Header counters of the moderation queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PendingStats {
    /// Articles still pending.
    pub pending: usize,
    /// Pending articles submitted on the current day.
    pub submitted_today: usize,
    /// Articles ticked for a bulk action.
    pub selected: usize,
}

/// Result of a single or bulk moderation action.
#[derive(Debug, Clone, Default)]
pub struct ModerationOutcome {
    /// Articles that left the queue, with their new status.
    pub moderated: Vec<Article>,
    /// Requested ids that were not in the queue.
    pub missing: Vec<ArticleId>,
}

impl ModerationOutcome {
    /// Number of articles moderated.
    pub fn count(&self) -> usize {
        self.moderated.len()
    }
}

/// Pending-approval queue with selection and bulk actions.
#[derive(Debug, Clone)]
pub struct PendingApprovals {
    queue: Vec<Article>,
    selected: BTreeSet<ArticleId>,
    search: SearchTerm,
    category: CategoryFilter,
    sort: ArticleSort,
    listing: Listing<Article>,
}

impl PendingApprovals {
    /// Queue built from `articles`; anything not pending is dropped.
    pub fn new(articles: Vec<Article>, items_per_page: usize) -> Result<Self, AppError> {
        let mut view = Self {
            queue: articles
                .into_iter()
                .filter(|a| a.status == ArticleStatus::Pending)
                .collect(),
            selected: BTreeSet::new(),
            search: SearchTerm::default(),
            category: CategoryFilter::All,
            sort: ArticleSort::default(),
            listing: Listing::new(items_per_page)?,
        };
        view.refresh();
        Ok(view)
    }

    /// Search title and author.
    pub fn set_search(&mut self, raw: &str) {
        self.search = SearchTerm::new(raw);
        self.refresh();
    }

    /// Restrict to one category.
    pub fn set_category(&mut self, raw: &str) {
        self.category = CategoryFilter::parse(raw);
        self.refresh();
    }

    /// Change the sort order; date orders use the submission time.
    pub fn set_sort(&mut self, sort: ArticleSort) {
        self.sort = sort;
        self.refresh();
    }

    fn refresh(&mut self) {
        let mut rows: Vec<Article> = self
            .queue
            .iter()
            .filter(|a| self.search.matches_any(&[a.title.as_str(), a.author.name.as_str()]))
            .filter(|a| self.category.matches(&a.category))
            .cloned()
            .collect();
        sort_articles(&mut rows, self.sort, |a| a.created_at);
        self.listing.replace_rows(rows);
    }

    /// Tick or untick one article. Returns whether it is now selected.
    pub fn toggle(&mut self, id: &ArticleId) -> bool {
        if self.selected.remove(id) {
            return false;
        }
        if self.queue.iter().any(|a| &a.id == id) {
            self.selected.insert(id.clone());
            return true;
        }
        false
    }

    /// Tick every article on the current page.
    pub fn select_page(&mut self) {
        let on_page = self.listing.page_items().iter().map(|a| a.id.clone());
        self.selected.extend(on_page);
    }

    /// Untick everything.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Whether `id` is ticked.
    pub fn is_selected(&self, id: &ArticleId) -> bool {
        self.selected.contains(id)
    }

    /// Ticked ids in a stable order.
    pub fn selected(&self) -> impl Iterator<Item = &ArticleId> {
        self.selected.iter()
    }

    /// Approve one article.
    pub fn approve(&mut self, id: &ArticleId, now: DateTime<Utc>) -> Result<Article, AppError> {
        let mut outcome = self.moderate(std::slice::from_ref(id), now, |article| {
            article.status = ArticleStatus::Approved;
            article.published_at = Some(now);
        });
        outcome
            .moderated
            .pop()
            .ok_or_else(|| AppError::not_found(format!("Article '{id}' is not pending")))
    }

    /// Reject one article. A blank reason is stored as none.
    pub fn reject(
        &mut self,
        id: &ArticleId,
        reason: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Article, AppError> {
        let reason = Self::rejection_reason(reason);
        let mut outcome = self.moderate(std::slice::from_ref(id), now, |article| {
            article.status = ArticleStatus::Rejected;
            article.rejection_reason = reason.clone();
        });
        outcome
            .moderated
            .pop()
            .ok_or_else(|| AppError::not_found(format!("Article '{id}' is not pending")))
    }

    /// Approve every ticked article.
    pub fn approve_selected(&mut self, now: DateTime<Utc>) -> Result<ModerationOutcome, AppError> {
        let ids = self.take_selection()?;
        let outcome = self.moderate(&ids, now, |article| {
            article.status = ArticleStatus::Approved;
            article.published_at = Some(now);
        });
        info!(count = outcome.count(), "Bulk approval");
        Ok(outcome)
    }

    /// Reject every ticked article with the same optional reason.
    pub fn reject_selected(
        &mut self,
        reason: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<ModerationOutcome, AppError> {
        let reason = Self::rejection_reason(reason);
        let ids = self.take_selection()?;
        let outcome = self.moderate(&ids, now, |article| {
            article.status = ArticleStatus::Rejected;
            article.rejection_reason = reason.clone();
        });
        info!(count = outcome.count(), "Bulk rejection");
        Ok(outcome)
    }

    fn rejection_reason(reason: Option<&str>) -> Option<String> {
        reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
    }

    fn take_selection(&mut self) -> Result<Vec<ArticleId>, AppError> {
        if self.selected.is_empty() {
            return Err(AppError::validation("No articles selected"));
        }
        Ok(std::mem::take(&mut self.selected).into_iter().collect())
    }

    fn moderate(
        &mut self,
        ids: &[ArticleId],
        now: DateTime<Utc>,
        mut apply: impl FnMut(&mut Article),
    ) -> ModerationOutcome {
        let mut outcome = ModerationOutcome::default();
        for id in ids {
            match self.queue.iter().position(|a| &a.id == id) {
                Some(index) => {
                    let mut article = self.queue.remove(index);
                    apply(&mut article);
                    article.updated_at = now;
                    self.selected.remove(id);
                    info!(article_id = %id, status = %article.status, "Article moderated");
                    outcome.moderated.push(article);
                }
                None => {
                    warn!(article_id = %id, "Article not in the pending queue");
                    outcome.missing.push(id.clone());
                }
            }
        }
        self.refresh();
        outcome
    }

    /// Queue counters.
    pub fn stats(&self, now: DateTime<Utc>) -> PendingStats {
        let today = now.date_naive();
        PendingStats {
            pending: self.queue.len(),
            submitted_today: self
                .queue
                .iter()
                .filter(|a| a.created_at.date_naive() == today)
                .count(),
            selected: self.selected.len(),
        }
    }

    /// Filtered and sorted queue with its pagination.
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

    fn queue() -> PendingApprovals {
        let mut articles: Vec<Article> = (1..=12)
            .map(|day| {
                let category = if day % 2 == 0 { "Health" } else { "Business" };
                let title = format!("Pending {day}");
                article(&format!("p{day}"), &title, category, ArticleStatus::Pending, day)
            })
            .collect();
        articles.push(article("live", "Already live", "Health", ArticleStatus::Approved, 3));
        PendingApprovals::new(articles, 5).unwrap()
    }

    fn id(raw: &str) -> ArticleId {
        ArticleId::new(raw)
    }

    #[test]
    fn test_only_pending_articles_are_queued() {
        let view = queue();
        assert_eq!(view.listing().len(), 12);
        assert_eq!(view.page_items()[0].id.as_str(), "p12");
    }

    #[test]
    fn test_approve_removes_from_queue() {
        let mut view = queue();
        let approved = view.approve(&id("p4"), at(20)).unwrap();
        assert_eq!(approved.status, ArticleStatus::Approved);
        assert_eq!(approved.published_at, Some(at(20)));
        assert_eq!(approved.updated_at, at(20));
        assert_eq!(view.listing().len(), 11);

        let err = view.approve(&id("p4"), at(20)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(view.approve(&id("live"), at(20)).unwrap_err().kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_reject_with_and_without_reason() {
        let mut view = queue();
        let rejected = view.reject(&id("p1"), None, at(20)).unwrap();
        assert_eq!(rejected.status, ArticleStatus::Rejected);
        assert_eq!(rejected.rejection_reason, None);
        assert_eq!(rejected.updated_at, at(20));
        assert_eq!(view.listing().len(), 11);

        let rejected = view.reject(&id("p2"), Some("   "), at(20)).unwrap();
        assert_eq!(rejected.rejection_reason, None);

        let rejected = view.reject(&id("p3"), Some("  Needs sources "), at(20)).unwrap();
        assert_eq!(rejected.rejection_reason.as_deref(), Some("Needs sources"));
        assert_eq!(view.listing().len(), 9);
    }

    #[test]
    fn test_toggle_and_select_page() {
        let mut view = queue();
        assert!(view.toggle(&id("p1")));
        assert!(!view.toggle(&id("p1")));
        assert!(!view.toggle(&id("ghost")));

        view.go_to_page(2);
        view.select_page();
        let selected: Vec<&str> = view.selected().map(|i| i.as_str()).collect();
        assert_eq!(selected, vec!["p3", "p4", "p5", "p6", "p7"]);
        assert_eq!(view.stats(at(12)).selected, 5);

        view.clear_selection();
        assert_eq!(view.selected().count(), 0);
    }

    #[test]
    fn test_bulk_approve_reclamps_and_clears_selection() {
        let mut view = queue();
        view.go_to_page(3);
        view.select_page();
        assert_eq!(view.page_items().len(), 2);

        let outcome = view.approve_selected(at(20)).unwrap();
        assert_eq!(outcome.count(), 2);
        assert!(outcome.missing.is_empty());
        assert_eq!(view.listing().len(), 10);
        assert_eq!(view.listing().paginator().current_page(), 2);
        assert_eq!(view.stats(at(20)).selected, 0);

        let err = view.approve_selected(at(20)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_bulk_reject_without_reason() {
        let mut view = queue();
        view.toggle(&id("p2"));
        view.toggle(&id("p8"));

        let outcome = view.reject_selected(None, at(20)).unwrap();
        assert_eq!(outcome.count(), 2);
        assert!(outcome.moderated.iter().all(|a| a.status == ArticleStatus::Rejected));
        assert!(outcome.moderated.iter().all(|a| a.rejection_reason.is_none()));
        assert!(!view.is_selected(&id("p2")));
        assert_eq!(view.listing().len(), 10);

        view.toggle(&id("p5"));
        let outcome = view.reject_selected(Some("Off topic"), at(20)).unwrap();
        assert_eq!(outcome.moderated[0].rejection_reason.as_deref(), Some("Off topic"));
    }

    #[test]
    fn test_filters_and_stats() {
        let mut view = queue();
        view.set_category("health");
        assert_eq!(view.listing().len(), 6);
        view.set_search("pending 1");
        let ids: Vec<&str> = view.page_items().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["p12", "p10"]);

        let stats = view.stats(at(12));
        assert_eq!(stats.pending, 12);
        assert_eq!(stats.submitted_today, 1);
    }
}
