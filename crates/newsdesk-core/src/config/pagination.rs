//! Page sizes of the list views.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Items per page for each list view.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PaginationConfig {
    /// Public feed, below the featured articles.
    #[serde(default = "default_news_feed")]
    #[validate(range(min = 1))]
    pub news_feed: usize,
    /// Articles pulled out of the feed into the featured slider.
    #[serde(default = "default_featured")]
    pub featured_articles: usize,
    /// `limit` requested from paginated news endpoints.
    #[serde(default = "default_ten")]
    #[validate(range(min = 1, max = 100))]
    pub server_page: usize,
    /// Employee "my articles" list.
    #[serde(default = "default_ten")]
    #[validate(range(min = 1, max = 100))]
    pub my_articles: usize,
    /// Admin article table.
    #[serde(default = "default_ten")]
    #[validate(range(min = 1))]
    pub all_articles: usize,
    /// Admin moderation queue.
    #[serde(default = "default_ten")]
    #[validate(range(min = 1))]
    pub pending_approvals: usize,
    /// Admin employee directory.
    #[serde(default = "default_employees")]
    #[validate(range(min = 1))]
    pub employees: usize,
    /// Related articles shown under an article.
    #[serde(default = "default_related")]
    #[validate(range(min = 1, max = 20))]
    pub related_articles: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            news_feed: default_news_feed(),
            featured_articles: default_featured(),
            server_page: default_ten(),
            my_articles: default_ten(),
            all_articles: default_ten(),
            pending_approvals: default_ten(),
            employees: default_employees(),
            related_articles: default_related(),
        }
    }
}

fn default_news_feed() -> usize {
    6
}

fn default_featured() -> usize {
    4
}

fn default_ten() -> usize {
    10
}

fn default_employees() -> usize {
    8
}

fn default_related() -> usize {
    3
}
