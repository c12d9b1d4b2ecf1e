//! Visible page-number window and the page bar render model.

use serde::{Deserialize, Serialize};

/// Maximum number of page links shown at once.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Compute the run of page numbers to render as links.
///
/// Keeps `current_page` centered (two pages either side) and clamps to the
/// nearest full run at either end. Returns every page when there are no
/// more than [`MAX_VISIBLE_PAGES`], and nothing when `total_pages == 0`.
pub fn page_numbers(current_page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).collect();
    }

    let half_visible = MAX_VISIBLE_PAGES / 2;
    let mut start_page = current_page.saturating_sub(half_visible).max(1);
    let end_page = start_page
        .saturating_add(MAX_VISIBLE_PAGES - 1)
        .min(total_pages);

    // Also covers a current page past the end, where start exceeds end.
    if end_page.saturating_sub(start_page) < MAX_VISIBLE_PAGES - 1 {
        start_page = (end_page + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
    }

    (start_page..=end_page).collect()
}

/// One element of a rendered page bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageItem {
    /// "Previous" affordance.
    Previous {
        /// Whether clicking it would move.
        enabled: bool,
    },
    /// Gap marker before or after the visible run.
    Ellipsis,
    /// A page link.
    Page {
        /// 1-based page number.
        number: usize,
        /// Whether this is the current page.
        active: bool,
    },
    /// "Next" affordance.
    Next {
        /// Whether clicking it would move.
        enabled: bool,
    },
}

/// Render model for pagination controls.
///
/// Ellipses are derived from the page-number run itself: a leading gap
/// when the run starts after page 1, a trailing gap when it stops before
/// the last page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBar {
    /// Current 1-based page.
    pub current_page: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Items from "Previous" to "Next", in display order.
    pub items: Vec<PageItem>,
}

impl PageBar {
    /// Build the bar for `current_page` of `total_pages`.
    pub fn build(current_page: usize, total_pages: usize) -> Self {
        let numbers = page_numbers(current_page, total_pages);
        let mut items = Vec::with_capacity(numbers.len() + 4);

        items.push(PageItem::Previous {
            enabled: current_page > 1,
        });

        if numbers.first().is_some_and(|&first| first > 1) {
            items.push(PageItem::Ellipsis);
        }

        items.extend(numbers.iter().map(|&number| PageItem::Page {
            number,
            active: number == current_page,
        }));

        if numbers.last().is_some_and(|&last| last < total_pages) {
            items.push(PageItem::Ellipsis);
        }

        items.push(PageItem::Next {
            enabled: current_page < total_pages,
        });

        Self {
            current_page,
            total_pages,
            items,
        }
    }

    /// Whether the controls are worth showing at all.
    pub fn is_needed(&self) -> bool {
        self.total_pages > 1
    }

    /// Whether a gap marker precedes the page links.
    pub fn has_leading_ellipsis(&self) -> bool {
        matches!(self.items.get(1), Some(PageItem::Ellipsis))
    }

    /// Whether a gap marker follows the page links.
    pub fn has_trailing_ellipsis(&self) -> bool {
        self.items.len() >= 2 && matches!(self.items[self.items.len() - 2], PageItem::Ellipsis)
    }

    /// The page numbers contained in the bar.
    pub fn numbers(&self) -> Vec<usize> {
        self.items
            .iter()
            .filter_map(|item| match item {
                PageItem::Page { number, .. } => Some(*number),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_few_pages_lists_all() {
        for total in 0..=MAX_VISIBLE_PAGES {
            let expected: Vec<usize> = (1..=total).collect();
            assert_eq!(page_numbers(1, total), expected);
        }
    }

    #[test]
    fn test_centered_window() {
        assert_eq!(page_numbers(7, 12), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_clamped_at_end() {
        assert_eq!(page_numbers(11, 12), vec![8, 9, 10, 11, 12]);
        assert_eq!(page_numbers(12, 12), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_clamped_at_start() {
        assert_eq!(page_numbers(1, 12), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_numbers(2, 12), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_numbers(3, 12), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_current_past_last_page_clamps_to_end() {
        assert_eq!(page_numbers(20, 12), vec![8, 9, 10, 11, 12]);
        assert_eq!(page_numbers(usize::MAX, 12), vec![8, 9, 10, 11, 12]);
        assert_eq!(page_numbers(9, 3), vec![1, 2, 3]);
    }

    #[test]
    fn test_window_always_full_and_contains_current() {
        for total in 6..=20 {
            for current in 1..=total {
                let numbers = page_numbers(current, total);
                assert_eq!(numbers.len(), MAX_VISIBLE_PAGES);
                assert!(numbers.contains(&current));
                assert!(numbers.windows(2).all(|w| w[1] == w[0] + 1));
                assert!(*numbers.last().unwrap() <= total);
            }
        }
    }

    #[test]
    fn test_window_slides_one_step_at_a_time() {
        let total = 15;
        let mut previous_start = 1;
        for current in 1..=total {
            let start = page_numbers(current, total)[0];
            assert!(start == previous_start || start == previous_start + 1);
            previous_start = start;
        }
    }

    #[test]
    fn test_bar_ellipses_follow_numbers() {
        let bar = PageBar::build(7, 12);
        assert!(bar.has_leading_ellipsis());
        assert!(bar.has_trailing_ellipsis());
        assert_eq!(bar.numbers(), vec![5, 6, 7, 8, 9]);

        let bar = PageBar::build(1, 12);
        assert!(!bar.has_leading_ellipsis());
        assert!(bar.has_trailing_ellipsis());

        let bar = PageBar::build(11, 12);
        assert!(bar.has_leading_ellipsis());
        assert!(!bar.has_trailing_ellipsis());
    }

    #[test]
    fn test_bar_near_end_has_no_trailing_gap() {
        let bar = PageBar::build(10, 12);
        assert_eq!(bar.numbers(), vec![8, 9, 10, 11, 12]);
        assert!(bar.has_leading_ellipsis());
        assert!(!bar.has_trailing_ellipsis());

        let bar = PageBar::build(9, 12);
        assert_eq!(bar.numbers(), vec![7, 8, 9, 10, 11]);
        assert!(bar.has_trailing_ellipsis());
    }

    #[test]
    fn test_bar_past_last_page() {
        let bar = PageBar::build(20, 12);
        assert_eq!(bar.numbers(), vec![8, 9, 10, 11, 12]);
        assert!(bar.has_leading_ellipsis());
        assert!(!bar.has_trailing_ellipsis());
        assert_eq!(bar.items.first(), Some(&PageItem::Previous { enabled: true }));
        assert_eq!(bar.items.last(), Some(&PageItem::Next { enabled: false }));
        assert!(bar.items.iter().all(|item| !matches!(item, PageItem::Page { active: true, .. })));
    }

    #[test]
    fn test_bar_small_collection() {
        let bar = PageBar::build(1, 3);
        assert_eq!(
            bar.items,
            vec![
                PageItem::Previous { enabled: false },
                PageItem::Page { number: 1, active: true },
                PageItem::Page { number: 2, active: false },
                PageItem::Page { number: 3, active: false },
                PageItem::Next { enabled: true },
            ]
        );
        assert!(bar.is_needed());
    }

    #[test]
    fn test_bar_empty_collection() {
        let bar = PageBar::build(1, 0);
        assert!(!bar.is_needed());
        assert_eq!(bar.numbers(), Vec::<usize>::new());
        assert!(!bar.has_leading_ellipsis());
        assert!(!bar.has_trailing_ellipsis());
    }
}
