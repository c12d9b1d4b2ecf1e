//! Pagination controller holding the current page of one list view.

use tracing::trace;

use super::numbers::{PageBar, page_numbers};
use super::window::PageWindow;
use super::{PaginationError, total_pages};

/// Current-page state machine for a single list view.
///
/// Only `current_page` is stored; total pages, the window and the visible
/// page numbers are recomputed on every read. Navigation outside
/// `1..=total_pages` is ignored. Changing the collection size or the page
/// size re-clamps `current_page` into `1..=max(total_pages, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    total_items: usize,
    items_per_page: usize,
    current_page: usize,
}

impl Paginator {
    /// Create a paginator starting on page 1.
    pub fn new(total_items: usize, items_per_page: usize) -> Result<Self, PaginationError> {
        Self::with_initial_page(total_items, items_per_page, 1)
    }

    /// Create a paginator starting on `initial_page`.
    ///
    /// An initial page outside the valid range is clamped into it.
    pub fn with_initial_page(
        total_items: usize,
        items_per_page: usize,
        initial_page: usize,
    ) -> Result<Self, PaginationError> {
        if items_per_page == 0 {
            return Err(PaginationError::ZeroPageSize);
        }

        let mut paginator = Self {
            total_items,
            items_per_page,
            current_page: initial_page,
        };
        paginator.clamp_current_page();
        Ok(paginator)
    }

    /// Current 1-based page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of items in the paginated collection.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Page size.
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Number of pages, `0` for an empty collection.
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.items_per_page)
    }

    /// Slice boundaries of the current page.
    pub fn window(&self) -> PageWindow {
        PageWindow::compute(self.current_page, self.items_per_page)
    }

    /// The items of the current page.
    pub fn page_of<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        self.window().slice(items)
    }

    /// Visible page numbers around the current page.
    pub fn page_numbers(&self) -> Vec<usize> {
        page_numbers(self.current_page, self.total_pages())
    }

    /// Render model for the pagination controls.
    pub fn page_bar(&self) -> PageBar {
        PageBar::build(self.current_page, self.total_pages())
    }

    /// Whether a following page exists.
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Whether a preceding page exists.
    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    /// Jump to `page` if it lies within `1..=total_pages`.
    ///
    /// Returns whether the current page changed.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() {
            trace!(page, total_pages = self.total_pages(), "Ignoring out-of-range page");
            return false;
        }
        let moved = page != self.current_page;
        self.current_page = page;
        moved
    }

    /// Advance one page unless already on the last.
    pub fn go_to_next_page(&mut self) -> bool {
        if self.has_next_page() {
            self.current_page += 1;
            return true;
        }
        false
    }

    /// Step back one page unless already on the first.
    pub fn go_to_previous_page(&mut self) -> bool {
        if self.has_previous_page() {
            self.current_page -= 1;
            return true;
        }
        false
    }

    /// Return to the first page.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Replace the collection size and re-clamp the current page.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.clamp_current_page();
    }

    /// Replace the page size and re-clamp the current page.
    pub fn set_items_per_page(&mut self, items_per_page: usize) -> Result<(), PaginationError> {
        if items_per_page == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        self.items_per_page = items_per_page;
        self.clamp_current_page();
        Ok(())
    }

    fn clamp_current_page(&mut self) {
        let last_page = self.total_pages().max(1);
        let clamped = self.current_page.clamp(1, last_page);
        if clamped != self.current_page {
            trace!(from = self.current_page, to = clamped, "Re-clamping current page");
            self.current_page = clamped;
        }
    }
}
