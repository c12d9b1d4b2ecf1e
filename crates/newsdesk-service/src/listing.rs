//! Client-side paginated collection shared by the list views.

use std::fmt;

use serde::Serialize;

use newsdesk_core::error::AppError;
use newsdesk_core::pager::{PageBar, PageWindow, Paginator};

/// "Showing X to Y of Z" line under a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeSummary {
    /// 1-based position of the first row shown.
    pub first: usize,
    /// 1-based position of the last row shown.
    pub last: usize,
    /// Rows across all pages.
    pub total: usize,
}

impl RangeSummary {
    /// Summary of `window` over `total` rows; `None` when nothing is shown.
    pub fn from_window(window: PageWindow, total: usize) -> Option<Self> {
        window
            .shown_range(total)
            .map(|(first, last)| Self { first, last, total })
    }
}

impl fmt::Display for RangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} to {} of {}", self.first, self.last, self.total)
    }
}

/// Filtered rows plus the paginator over them.
#[derive(Debug, Clone)]
pub struct Listing<T> {
    rows: Vec<T>,
    paginator: Paginator,
}

impl<T> Listing<T> {
    /// Empty listing with `items_per_page` rows per page.
    pub fn new(items_per_page: usize) -> Result<Self, AppError> {
        Ok(Self {
            rows: Vec::new(),
            paginator: Paginator::new(0, items_per_page)?,
        })
    }

    /// Install new rows, keeping the current page where it still exists.
    pub fn replace_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.paginator.set_total_items(self.rows.len());
    }

    /// Every row across pages.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Number of rows across pages.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no row passed the filters.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows of the current page.
    pub fn page_items(&self) -> &[T] {
        self.paginator.page_of(&self.rows)
    }

    /// The paginator.
    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Jump to `page`; out-of-range pages are ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.paginator.go_to_page(page)
    }

    /// Advance one page.
    pub fn next_page(&mut self) -> bool {
        self.paginator.go_to_next_page()
    }

    /// Step back one page.
    pub fn previous_page(&mut self) -> bool {
        self.paginator.go_to_previous_page()
    }

    /// Return to the first page.
    pub fn reset_page(&mut self) {
        self.paginator.reset();
    }

    /// Render model of the pagination controls.
    pub fn page_bar(&self) -> PageBar {
        self.paginator.page_bar()
    }

    /// Range line for the current page.
    pub fn summary(&self) -> Option<RangeSummary> {
        RangeSummary::from_window(self.paginator.window(), self.rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_text() {
        let mut listing = Listing::new(10).unwrap();
        listing.replace_rows((0..25).collect::<Vec<_>>());
        assert_eq!(listing.summary().unwrap().to_string(), "Showing 1 to 10 of 25");
        listing.go_to_page(3);
        assert_eq!(listing.summary().unwrap().to_string(), "Showing 21 to 25 of 25");
        assert_eq!(listing.page_items(), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn test_empty_listing_has_no_summary() {
        let listing: Listing<u8> = Listing::new(10).unwrap();
        assert_eq!(listing.summary(), None);
        assert!(listing.page_items().is_empty());
        assert!(!listing.page_bar().is_needed());
    }

    #[test]
    fn test_replacing_rows_reclamps() {
        let mut listing = Listing::new(5).unwrap();
        listing.replace_rows((0..50).collect::<Vec<_>>());
        listing.go_to_page(10);
        listing.replace_rows((0..12).collect());
        assert_eq!(listing.paginator().current_page(), 3);
        assert_eq!(listing.page_items(), &[10, 11]);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(Listing::<u8>::new(0).is_err());
    }
}
