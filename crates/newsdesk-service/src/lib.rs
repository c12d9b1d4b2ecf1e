//! # newsdesk-service
//!
//! List views of Newsdesk. Each view owns its filters and exactly one
//! [`Paginator`](newsdesk_core::Paginator); changing the filtered
//! collection re-clamps the current page instead of leaving it past the end.
//!
//! Views are plain state holders. The async `fetch` helpers pull data
//! through [`ApiClient`](newsdesk_client::ApiClient) and then install it.

pub mod approvals;
pub mod articles;
pub mod employees;
pub mod feed;
pub mod listing;
pub mod my_articles;
mod ordering;

pub use approvals::{ModerationOutcome, PendingApprovals, PendingStats};
pub use articles::{AllArticles, ArticleEdit, ArticleStats};
pub use employees::{DirectoryStats, EmployeeDirectory};
pub use feed::NewsFeed;
pub use listing::{Listing, RangeSummary};
pub use my_articles::MyArticles;
