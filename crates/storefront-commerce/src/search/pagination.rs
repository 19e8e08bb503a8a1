//! Page tracking over a result set.

use serde::{Deserialize, Serialize};

/// Default number of products per page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// The current page of a search session.
///
/// `current_page` starts at 1 and never drops below it. There is no upper
/// bound: advancing past the last page is a valid state and
/// [`PageState::slice`] simply returns nothing there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
}

impl PageState {
    /// Start at page 1. A zero page size is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Go back one page, staying on page 1 if already there.
    pub fn previous(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Advance one page without checking the result count.
    pub fn next(&mut self) {
        self.current_page = self.current_page.saturating_add(1);
    }

    /// Jump to a page; 0 is treated as 1.
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Back to page 1.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Offset of the first item on the current page.
    pub fn offset(&self) -> usize {
        (self.current_page - 1).saturating_mul(self.page_size)
    }

    /// The items of `results` on the current page.
    pub fn slice<'a, T>(&self, results: &'a [T]) -> &'a [T] {
        let start = self.offset().min(results.len());
        let end = start.saturating_add(self.page_size).min(results.len());
        &results[start..end]
    }

    /// Summary of the current page against `total` results.
    pub fn summary(&self, total: usize) -> Pagination {
        Pagination::new(self.current_page, self.page_size, total)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Pagination info for the renderer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages (at least 1).
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info. Page 0 is treated as page 1.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(per_page)
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = self.page.saturating_sub(half).max(1);
        let end = start
            .saturating_add(max_visible.saturating_sub(1))
            .min(self.total_pages);
        let start = end.saturating_sub(max_visible.saturating_sub(1)).max(1);

        (start..=end).collect()
    }

    /// Whether the page lies beyond the last page of results.
    pub fn is_past_end(&self) -> bool {
        self.page > self.total_pages
    }

    /// Get start item number (1-indexed), 0 when the page is empty.
    pub fn start_item(&self) -> usize {
        let offset = self.page.saturating_sub(1).saturating_mul(self.per_page);
        if offset >= self.total {
            0
        } else {
            offset + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        if self.start_item() == 0 {
            0
        } else {
            self.page.saturating_mul(self.per_page).min(self.total)
        }
    }
}
