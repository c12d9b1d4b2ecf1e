//! Page window calculation.

use serde::{Deserialize, Serialize};

/// Half-open index range `[start_index, end_index)` of one page.
///
/// The window is not clamped against the collection length. Use
/// [`PageWindow::slice`] to cut a collection; bounds past the end
/// produce a shorter or empty slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageWindow {
    /// Index of the first item on the page.
    pub start_index: usize,
    /// One past the index of the last item on the page.
    pub end_index: usize,
}

impl PageWindow {
    /// Compute the window for a 1-based page.
    ///
    /// Page `0` is treated as page `1`.
    pub fn compute(current_page: usize, items_per_page: usize) -> Self {
        let start_index = current_page.saturating_sub(1).saturating_mul(items_per_page);
        Self {
            start_index,
            end_index: start_index.saturating_add(items_per_page),
        }
    }

    /// Width of the window (equals the page size).
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    /// Whether the window spans no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cut the window out of `items` with array-slice semantics.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start_index.min(items.len());
        let end = self.end_index.min(items.len());
        &items[start..end]
    }

    /// 1-based positions of the first and last item shown out of `total_items`.
    ///
    /// Returns `None` when the window holds nothing from the collection.
    pub fn shown_range(&self, total_items: usize) -> Option<(usize, usize)> {
        if self.start_index >= total_items {
            return None;
        }
        Some((self.start_index + 1, self.end_index.min(total_items)))
    }
}
