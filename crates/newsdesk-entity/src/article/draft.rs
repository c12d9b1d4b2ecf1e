//! Article form model and its validation rules.

use serde::{Deserialize, Serialize};

use newsdesk_core::types::FieldErrors;

const MIN_TITLE_CHARS: usize = 10;
const MIN_EXCERPT_CHARS: usize = 20;
const MIN_CONTENT_CHARS: usize = 100;

/// An article being written or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    /// Headline.
    pub title: String,
    /// Summary.
    pub excerpt: String,
    /// HTML body.
    pub content: String,
    /// Category name.
    pub category: String,
    /// Optional cover image.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ArticleDraft {
    /// Body with markup removed and whitespace collapsed.
    pub fn plain_text(&self) -> String {
        strip_html(&self.content)
    }

    /// Words in the plain-text body.
    pub fn word_count(&self) -> usize {
        self.plain_text().split_whitespace().count()
    }

    /// Characters in the plain-text body.
    pub fn char_count(&self) -> usize {
        self.plain_text().chars().count()
    }

    /// Rules for submitting a new article for review.
    pub fn validate_for_submission(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.add("title", "Title is required");
        } else if title.chars().count() < MIN_TITLE_CHARS {
            errors.add(
                "title",
                format!("Title must be at least {MIN_TITLE_CHARS} characters"),
            );
        }

        let excerpt = self.excerpt.trim();
        if excerpt.is_empty() {
            errors.add("excerpt", "Excerpt is required");
        } else if excerpt.chars().count() < MIN_EXCERPT_CHARS {
            errors.add(
                "excerpt",
                format!("Excerpt must be at least {MIN_EXCERPT_CHARS} characters"),
            );
        }

        let text_len = self.char_count();
        if text_len == 0 {
            errors.add("content", "Content is required");
        } else if text_len < MIN_CONTENT_CHARS {
            errors.add(
                "content",
                format!("Content must be at least {MIN_CONTENT_CHARS} characters"),
            );
        }

        if self.category.trim().is_empty() {
            errors.add("category", "Category is required");
        }

        errors.into_result()
    }

    /// Rules for saving edits to an existing article.
    pub fn validate_for_update(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.title.trim().is_empty() {
            errors.add("title", "Title is required");
        }
        if self.excerpt.trim().is_empty() {
            errors.add("excerpt", "Excerpt is required");
        }
        if self.plain_text().is_empty() {
            errors.add("content", "Content is required");
        }
        if self.category.trim().is_empty() {
            errors.add("category", "Category is required");
        }
        errors.into_result()
    }
}

/// Remove tags from `html`, decode the common entities and collapse
/// whitespace.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    let decoded = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}
