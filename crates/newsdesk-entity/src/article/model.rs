//! Article entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use newsdesk_core::types::{ArticleId, UserId};

use super::status::ArticleStatus;

/// Name and (when known) id of an article's writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Writer id; the public feed does not expose it.
    #[serde(default)]
    pub id: Option<UserId>,
    /// Display name.
    pub name: String,
}

impl Author {
    /// Author known only by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

/// A news article as the views work with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique article identifier.
    pub id: ArticleId,
    /// Headline.
    pub title: String,
    /// Body as HTML.
    pub content: String,
    /// Short summary shown in lists.
    pub excerpt: String,
    /// Optional cover image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Category name.
    pub category: String,
    /// Writer.
    pub author: Author,
    /// Moderation status.
    pub status: ArticleStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// When the article went live.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Admin's reason for a rejection.
    #[serde(default)]
    pub rejection_reason: Option<String>,
    /// Read counter.
    #[serde(default)]
    pub views: u64,
}

impl Article {
    /// Publication date, falling back to the creation date.
    pub fn display_date(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.created_at)
    }

    /// Whether the article was written by `user_id`.
    pub fn is_written_by(&self, user_id: &UserId) -> bool {
        self.author.id.as_ref() == Some(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn article() -> Article {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        Article {
            id: ArticleId::new("a1"),
            title: "Budget talks resume".into(),
            content: "<p>Talks</p>".into(),
            excerpt: "Talks resumed on Monday".into(),
            image_url: None,
            category: "Politics".into(),
            author: Author::named("Ravi"),
            status: ArticleStatus::Pending,
            created_at: created,
            updated_at: created,
            published_at: None,
            rejection_reason: None,
            views: 0,
        }
    }

    #[test]
    fn test_display_date_falls_back_to_created() {
        let mut a = article();
        assert_eq!(a.display_date(), a.created_at);
        let published = Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap();
        a.published_at = Some(published);
        assert_eq!(a.display_date(), published);
    }

    #[test]
    fn test_is_written_by() {
        let mut a = article();
        let uid = UserId::new("u1");
        assert!(!a.is_written_by(&uid));
        a.author.id = Some(uid.clone());
        assert!(a.is_written_by(&uid));
    }
}
