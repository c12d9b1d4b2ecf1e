//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use newsdesk_core::pager::{PageBar, PageItem};
use newsdesk_service::RangeSummary;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{item:#?}"),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{json}");
        }
    }
}

/// Print the range line and page bar under a table.
pub fn print_page_footer(summary: Option<RangeSummary>, bar: &PageBar, format: OutputFormat) {
    if format == OutputFormat::Json {
        return;
    }
    if let Some(summary) = summary {
        println!("{summary}");
    }
    if bar.is_needed() {
        println!("{}", render_page_bar(bar));
    }
}

/// Render the page bar as `‹ Prev  … 5 6 [7] 8 9 …  Next ›`.
pub fn render_page_bar(bar: &PageBar) -> String {
    let mut links = Vec::new();
    let mut previous = "";
    let mut next = "";

    for item in &bar.items {
        match item {
            PageItem::Previous { enabled } => previous = if *enabled { "‹ Prev" } else { "" },
            PageItem::Next { enabled } => next = if *enabled { "Next ›" } else { "" },
            PageItem::Ellipsis => links.push("…".to_string()),
            PageItem::Page { number, active: true } => links.push(format!("[{number}]")),
            PageItem::Page { number, .. } => links.push(number.to_string()),
        }
    }

    let mut parts = Vec::with_capacity(3);
    if !previous.is_empty() {
        parts.push(previous.to_string());
    }
    parts.push(links.join(" "));
    if !next.is_empty() {
        parts.push(next.to_string());
    }
    parts.join("  ")
}

/// Shorten `text` to `max` characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<16} {}", format!("{key}:"), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_bar_middle() {
        let bar = PageBar::build(7, 12);
        assert_eq!(render_page_bar(&bar), "‹ Prev  … 5 6 [7] 8 9 …  Next ›");
    }

    #[test]
    fn test_page_bar_edges() {
        assert_eq!(render_page_bar(&PageBar::build(1, 3)), "[1] 2 3  Next ›");
        assert_eq!(render_page_bar(&PageBar::build(12, 12)), "‹ Prev  … 8 9 10 11 [12]");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10), "Short");
        assert_eq!(truncate("A rather long headline", 10), "A rather…");
    }
}
