//! Paginated-list wire contract and the client-side pagination controller.
//!
//! Every list endpoint shares the `{ items, total, page, pages }` response
//! shape. [`Pager`] owns the page index the console is looking at and turns
//! it into request parameters; the server's answer is always applied back so
//! the console never extrapolates totals locally.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maximum number of page buttons shown by the page-window control.
const WINDOW: u32 = 5;

/// One page of a paginated list response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub pages: u32,
}

impl<T> Page<T> {
    /// `ceil(total / size)` — the page count the server is expected to report.
    #[must_use]
    pub const fn expected_pages(total: u64, size: u32) -> u32 {
        if size == 0 {
            return 0;
        }
        (total.div_ceil(size as u64)) as u32
    }

    /// Check the response against its invariants for a given page size.
    #[must_use]
    pub fn is_consistent(&self, size: u32) -> bool {
        self.pages == Self::expected_pages(self.total, size) && self.items.len() <= size as usize
    }
}

/// Query parameters for a paginated fetch.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub size: u32,
}

/// Client-side pagination state for one list view.
///
/// `current_page` is 1-based; `page_size` is fixed per view. Totals are only
/// ever learned from responses via [`Pager::apply`].
#[derive(Debug, Clone)]
pub struct Pager {
    current_page: u32,
    page_size: u32,
    total: u64,
    pages: u32,
}

impl Pager {
    #[must_use]
    pub const fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            page_size,
            total: 0,
            pages: 0,
        }
    }

    /// Start on a specific page (e.g. from a `--page` flag). Values below 1
    /// snap to 1.
    #[must_use]
    pub const fn starting_at(page_size: u32, page: u32) -> Self {
        let mut pager = Self::new(page_size);
        pager.current_page = if page < 1 { 1 } else { page };
        pager
    }

    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub const fn pages(&self) -> u32 {
        self.pages
    }

    /// Parameters for the next fetch.
    #[must_use]
    pub const fn query(&self) -> PageQuery {
        PageQuery {
            page: self.current_page,
            size: self.page_size,
        }
    }

    /// Record the server's snapshot. The reported page index wins over the
    /// requested one, so the controller always reflects what is on screen.
    pub fn apply<T>(&mut self, page: &Page<T>) {
        self.total = page.total;
        self.pages = page.pages;
        if page.page >= 1 {
            self.current_page = page.page;
        }
    }

    /// A search-text or status-filter change invalidates the page index;
    /// reset to page 1 before refetching so an out-of-range page is never
    /// requested.
    pub const fn reset_for_filter_change(&mut self) {
        self.current_page = 1;
    }

    /// Jump to page `n`. Out-of-range requests are ignored (the rendered
    /// controls are disabled past the edges) and `false` is returned.
    pub const fn goto(&mut self, n: u32) -> bool {
        if n < 1 || (self.pages > 0 && n > self.pages) {
            return false;
        }
        self.current_page = n;
        true
    }

    pub const fn next(&mut self) -> bool {
        self.goto(self.current_page + 1)
    }

    pub const fn prev(&mut self) -> bool {
        if self.current_page == 1 {
            return false;
        }
        self.goto(self.current_page - 1)
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.pages
    }

    /// Sliding window of at most 5 page numbers centered on the current
    /// page, clamped to `[1, pages]`. Empty when there is at most one page —
    /// the control renders nothing.
    #[must_use]
    pub fn window(&self) -> Vec<u32> {
        if self.pages <= 1 {
            return Vec::new();
        }

        let mut start = self.current_page.saturating_sub(WINDOW / 2).max(1);
        let end = (start + WINDOW - 1).min(self.pages);
        if end - start + 1 < WINDOW {
            start = end.saturating_sub(WINDOW - 1).max(1);
        }

        (start..=end).collect()
    }

    /// 1-based bounds of the entries on the current page, for the
    /// "showing A to B of N entries" footer. `None` when the list is empty.
    #[must_use]
    pub const fn entry_bounds(&self) -> Option<(u64, u64)> {
        if self.total == 0 {
            return None;
        }
        let first = (self.current_page as u64 - 1) * self.page_size as u64 + 1;
        let last = self.current_page as u64 * self.page_size as u64;
        let last = if last > self.total { self.total } else { last };
        Some((first, last))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{Page, Pager};

    fn page_of(total: u64, page: u32, pages: u32) -> Page<u8> {
        Page {
            items: Vec::new(),
            total,
            page,
            pages,
        }
    }

    #[rstest]
    #[case(0, 20, 0)]
    #[case(1, 20, 1)]
    #[case(20, 20, 1)]
    #[case(21, 20, 2)]
    #[case(199, 20, 10)]
    #[case(200, 20, 10)]
    #[case(201, 20, 11)]
    fn expected_pages_is_ceiling_division(
        #[case] total: u64,
        #[case] size: u32,
        #[case] pages: u32,
    ) {
        assert_eq!(Page::<u8>::expected_pages(total, size), pages);
    }

    #[test]
    fn consistency_checks_pages_and_item_count() {
        let page = Page {
            items: vec![1u8, 2, 3],
            total: 43,
            page: 3,
            pages: 3,
        };
        assert!(page.is_consistent(20));
        assert!(!page.is_consistent(2));
    }

    #[test]
    fn filter_change_resets_to_page_one() {
        let mut pager = Pager::new(20);
        pager.apply(&page_of(100, 4, 5));
        assert_eq!(pager.current_page(), 4);

        pager.reset_for_filter_change();
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.query().page, 1);
    }

    #[test]
    fn goto_ignores_out_of_range_pages() {
        let mut pager = Pager::new(20);
        pager.apply(&page_of(100, 2, 5));

        assert!(!pager.goto(0));
        assert!(!pager.goto(6));
        assert_eq!(pager.current_page(), 2);

        assert!(pager.goto(5));
        assert!(!pager.next());
        assert!(pager.prev());
        assert_eq!(pager.current_page(), 4);
    }

    #[test]
    fn goto_is_unbounded_above_before_first_response() {
        // Until a response reports total pages, an explicit --page must pass
        // through; the server clamps by answering with its own page index.
        let mut pager = Pager::new(20);
        assert!(pager.goto(9));
        assert_eq!(pager.query().page, 9);
    }

    #[rstest]
    #[case(1, 10, vec![1, 2, 3, 4, 5])]
    #[case(2, 10, vec![1, 2, 3, 4, 5])]
    #[case(3, 10, vec![1, 2, 3, 4, 5])]
    #[case(4, 10, vec![2, 3, 4, 5, 6])]
    #[case(7, 10, vec![5, 6, 7, 8, 9])]
    #[case(9, 10, vec![6, 7, 8, 9, 10])]
    #[case(10, 10, vec![6, 7, 8, 9, 10])]
    #[case(2, 3, vec![1, 2, 3])]
    fn window_slides_and_clamps(#[case] current: u32, #[case] pages: u32, #[case] want: Vec<u32>) {
        let mut pager = Pager::new(20);
        pager.apply(&page_of(u64::from(pages) * 20, current, pages));
        assert_eq!(pager.window(), want);
    }

    #[test]
    fn window_is_empty_for_single_page() {
        let mut pager = Pager::new(20);
        pager.apply(&page_of(7, 1, 1));
        assert!(pager.window().is_empty());

        pager.apply(&page_of(0, 1, 0));
        assert!(pager.window().is_empty());
    }

    #[test]
    fn entry_bounds_match_footer_arithmetic() {
        let mut pager = Pager::new(20);
        pager.apply(&page_of(43, 3, 3));
        assert_eq!(pager.entry_bounds(), Some((41, 43)));

        pager.apply(&page_of(43, 1, 3));
        assert_eq!(pager.entry_bounds(), Some((1, 20)));

        pager.apply(&page_of(0, 1, 0));
        assert_eq!(pager.entry_bounds(), None);
    }
}
