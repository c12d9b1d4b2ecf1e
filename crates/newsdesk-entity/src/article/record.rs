//! Wire format of the news platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use newsdesk_core::types::{ArticleId, UserId};

use super::draft::ArticleDraft;
use super::model::{Article, Author};
use super::status::ArticleStatus;

/// Category assigned when a record carries none.
pub const FALLBACK_CATEGORY: &str = "General";

/// Author name used when a record carries none.
pub const FALLBACK_AUTHOR: &str = "Unknown";

/// A news item as returned by the platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsRecord {
    /// Record id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Headline.
    #[serde(default)]
    pub heading: String,
    /// Summary.
    #[serde(default)]
    pub subheading: Option<String>,
    /// HTML body.
    #[serde(default)]
    pub content: String,
    /// Category name.
    #[serde(default)]
    pub category: Option<String>,
    /// Cover image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Writer's display name.
    #[serde(default)]
    pub employee_name: Option<String>,
    /// Writer's id, present on the employee endpoints.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Publication timestamp (RFC 3339).
    #[serde(default)]
    pub published_date: Option<String>,
    /// Creation timestamp (RFC 3339).
    #[serde(default)]
    pub created_at: Option<String>,
    /// Read counter; sometimes a string, sometimes missing.
    #[serde(default)]
    pub views: Value,
    /// Moderation status; the public feed omits it.
    #[serde(default)]
    pub status: Option<String>,
    /// Rejection reason.
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

impl NewsRecord {
    /// Convert into an [`Article`], filling platform gaps with defaults.
    ///
    /// `now` stands in for missing timestamps.
    pub fn into_article(self, now: DateTime<Utc>) -> Article {
        let published_at = parse_timestamp(self.published_date.as_deref());
        let created_at = parse_timestamp(self.created_at.as_deref())
            .or(published_at)
            .unwrap_or(now);
        let status = self
            .status
            .as_deref()
            .and_then(|s| s.parse::<ArticleStatus>().ok())
            .unwrap_or_default();

        Article {
            id: ArticleId::new(self.id),
            title: self.heading,
            content: self.content,
            excerpt: self.subheading.unwrap_or_default(),
            image_url: self.image_url.filter(|url| !url.is_empty()),
            category: non_blank(self.category).unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
            author: Author {
                id: non_blank(self.employee_id).map(UserId::new),
                name: non_blank(self.employee_name)
                    .unwrap_or_else(|| FALLBACK_AUTHOR.to_string()),
            },
            status,
            created_at,
            updated_at: created_at,
            published_at: published_at.or_else(|| status.is_published().then_some(created_at)),
            rejection_reason: self.rejection_reason,
            views: parse_views(&self.views),
        }
    }
}

/// Outgoing body for creating or updating a news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPayload {
    /// Headline.
    pub heading: String,
    /// Summary.
    pub subheading: String,
    /// HTML body.
    pub content: String,
    /// Category name.
    pub category: String,
    /// Cover image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<&ArticleDraft> for NewsPayload {
    fn from(draft: &ArticleDraft) -> Self {
        Self {
            heading: draft.title.trim().to_string(),
            subheading: draft.excerpt.trim().to_string(),
            content: draft.content.clone(),
            category: draft.category.trim().to_string(),
            image_url: draft
                .image_url
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_views(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_full_record_maps_fields() {
        let record: NewsRecord = serde_json::from_str(
            r#"{
                "_id": "n1",
                "heading": "Rates held steady",
                "subheading": "Central bank pauses",
                "content": "<p>Body</p>",
                "category": "Business",
                "imageUrl": "https://img/1.png",
                "employeeName": "Meera",
                "publishedDate": "2024-05-30T10:00:00Z",
                "views": 42
            }"#,
        )
        .unwrap();

        let article = record.into_article(now());
        assert_eq!(article.id.as_str(), "n1");
        assert_eq!(article.title, "Rates held steady");
        assert_eq!(article.excerpt, "Central bank pauses");
        assert_eq!(article.category, "Business");
        assert_eq!(article.author.name, "Meera");
        assert_eq!(article.status, ArticleStatus::Approved);
        assert_eq!(article.views, 42);
        assert_eq!(
            article.published_at,
            Some(Utc.with_ymd_and_hms(2024, 5, 30, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_sparse_record_gets_defaults() {
        let record: NewsRecord =
            serde_json::from_str(r#"{"_id": "n2", "heading": "Short", "views": "abc"}"#).unwrap();
        let article = record.into_article(now());
        assert_eq!(article.excerpt, "");
        assert_eq!(article.category, FALLBACK_CATEGORY);
        assert_eq!(article.author.name, FALLBACK_AUTHOR);
        assert_eq!(article.views, 0);
        assert_eq!(article.created_at, now());
        assert_eq!(article.display_date(), now());
    }

    #[test]
    fn test_string_views_and_status() {
        let record: NewsRecord = serde_json::from_str(
            r#"{"_id": "n3", "views": "17", "status": "pending", "employeeId": "u9"}"#,
        )
        .unwrap();
        let article = record.into_article(now());
        assert_eq!(article.views, 17);
        assert_eq!(article.status, ArticleStatus::Pending);
        assert_eq!(article.published_at, None);
        assert_eq!(article.author.id, Some(UserId::new("u9")));
    }

    #[test]
    fn test_payload_from_draft_trims() {
        let draft = ArticleDraft {
            title: "  A fine headline ".into(),
            excerpt: "Summary".into(),
            content: "<p>x</p>".into(),
            category: "Sports ".into(),
            image_url: Some("   ".into()),
        };
        let payload = NewsPayload::from(&draft);
        assert_eq!(payload.heading, "A fine headline");
        assert_eq!(payload.category, "Sports");
        assert_eq!(payload.image_url, None);
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("imageUrl").is_none());
    }
}
