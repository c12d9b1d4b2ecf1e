//! Sort orders shared by the admin article views.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use newsdesk_core::types::ArticleSort;
use newsdesk_entity::article::Article;

fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Sort `articles` in place. `date_of` picks the timestamp the date
/// orders use.
pub(crate) fn sort_articles(
    articles: &mut [Article],
    sort: ArticleSort,
    date_of: fn(&Article) -> DateTime<Utc>,
) {
    match sort {
        ArticleSort::Newest => articles.sort_by(|a, b| date_of(b).cmp(&date_of(a))),
        ArticleSort::Oldest => articles.sort_by(|a, b| date_of(a).cmp(&date_of(b))),
        ArticleSort::Title => articles.sort_by(|a, b| text_cmp(&a.title, &b.title)),
        ArticleSort::Author => {
            articles.sort_by(|a, b| text_cmp(&a.author.name, &b.author.name))
        }
        ArticleSort::Category => articles.sort_by(|a, b| text_cmp(&a.category, &b.category)),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{DateTime, TimeZone, Utc};

    use newsdesk_core::types::ArticleId;
    use newsdesk_entity::article::{Article, ArticleStatus, Author};

    /// Article created on `day` March 2024.
    pub fn article(
        id: &str,
        title: &str,
        category: &str,
        status: ArticleStatus,
        day: u32,
    ) -> Article {
        let created = at(day);
        Article {
            id: ArticleId::new(id),
            title: title.to_string(),
            content: format!("<p>{title} body text</p>"),
            excerpt: format!("{title} excerpt"),
            image_url: None,
            category: category.to_string(),
            author: Author::named(format!("Author {id}")),
            status,
            created_at: created,
            updated_at: created,
            published_at: status.is_published().then_some(created),
            rejection_reason: None,
            views: 0,
        }
    }

    pub fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsdesk_entity::article::ArticleStatus;

    fn ids(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_orders() {
        let mut articles = vec![
            fixtures::article("1", "beta", "Sports", ArticleStatus::Approved, 2),
            fixtures::article("2", "Alpha", "Health", ArticleStatus::Approved, 5),
            fixtures::article("3", "gamma", "Business", ArticleStatus::Approved, 1),
        ];

        sort_articles(&mut articles, ArticleSort::Newest, Article::display_date);
        assert_eq!(ids(&articles), vec!["2", "1", "3"]);
        sort_articles(&mut articles, ArticleSort::Oldest, Article::display_date);
        assert_eq!(ids(&articles), vec!["3", "1", "2"]);
        sort_articles(&mut articles, ArticleSort::Title, Article::display_date);
        assert_eq!(ids(&articles), vec!["2", "1", "3"]);
        sort_articles(&mut articles, ArticleSort::Category, Article::display_date);
        assert_eq!(ids(&articles), vec!["3", "2", "1"]);
    }
}
