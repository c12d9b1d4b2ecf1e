//! Client-side pagination engine shared by every list view.
//!
//! - `window`: slice boundaries of the current page
//! - `numbers`: the sliding run of visible page numbers and the page bar render model
//! - `controller`: the [`Paginator`] owning the current page of one view
//!
//! Pages are 1-based. Windows are 0-based half-open index ranges.

pub mod controller;
pub mod numbers;
pub mod window;

pub use controller::Paginator;
pub use numbers::{MAX_VISIBLE_PAGES, PageBar, PageItem, page_numbers};
pub use window::PageWindow;

use thiserror::Error;

/// Errors raised when a paginator is configured with unusable input.
///
/// Navigation never fails; out-of-range page requests are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// A page must hold at least one item.
    #[error("Items per page must be at least 1")]
    ZeroPageSize,
}

/// Number of pages needed to show `total_items` at `items_per_page` each.
///
/// Returns `0` for an empty collection.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn test_total_pages_empty_collection() {
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn test_total_pages_never_divides_by_zero() {
        assert_eq!(total_pages(10, 0), 0);
    }
}
