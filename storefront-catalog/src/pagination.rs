//! Slice arithmetic for paged grids.

use serde::Serialize;

/// Products per page on the listing and category grids.
pub const LISTING_PAGE_SIZE: usize = 12;

/// Cards per page on the blog and services grids.
pub const BROWSE_PAGE_SIZE: usize = 6;

/// Page numbers shown at once in the listing pager.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One page of results. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    /// 1-based index of the first item on this page, or 0 when the page is empty.
    pub fn first_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.per_page + 1
        }
    }

    /// 1-based index of the last item on this page, or 0 when the page is empty.
    pub fn last_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_index() + self.items.len() - 1
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// `Showing 1–12 of 40 products`
    pub fn results_label(&self, noun: &str) -> String {
        format!(
            "Showing {}–{} of {} {}",
            self.first_index(),
            self.last_index(),
            self.total_items,
            noun
        )
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.page, self.total_pages)
    }
}

/// Cut `items` into the requested 1-based page.
///
/// Page 0 is treated as page 1. A page past the end yields no items but keeps
/// the requested number so the pager can still render.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let start = (page - 1).saturating_mul(per_page).min(total_items);
    let end = start.saturating_add(per_page).min(total_items);
    Page {
        items: items[start..end].to_vec(),
        page,
        per_page,
        total_pages,
        total_items,
    }
}

/// The run of page numbers shown in the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
    pub current: usize,
}

impl PageWindow {
    /// Center up to `MAX_VISIBLE_PAGES` numbers on `current`, shifting left
    /// when the run would overflow `total_pages`. A `current` past the end
    /// centers on the last page.
    pub fn new(current: usize, total_pages: usize) -> Self {
        let center = current.min(total_pages.max(1));
        let mut start = center.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
        let mut end = start.saturating_add(MAX_VISIBLE_PAGES - 1);
        if end > total_pages {
            end = total_pages;
            start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
        }
        Self {
            start,
            end,
            current,
        }
    }

    pub fn pages(&self) -> Vec<usize> {
        if self.end < self.start {
            return Vec::new();
        }
        (self.start..=self.end).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_paginate_middle_page() {
        let items: Vec<u32> = (1..=30).collect();
        let page = paginate(&items, 2, 12);
        assert_eq!(page.items.first(), Some(&13));
        assert_eq!(page.items.len(), 12);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.results_label("products"), "Showing 13–24 of 30 products");
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let items: Vec<u32> = (1..=30).collect();
        let page = paginate(&items, 3, 12);
        assert_eq!(page.items.len(), 6);
        assert_eq!(page.last_index(), 30);
        assert!(!page.has_next());
        assert!(page.has_prev());
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(&items, 9, 6);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.first_index(), 0);
    }

    #[test]
    fn test_paginate_empty_input() {
        let page = paginate::<u32>(&[], 1, 12);
        assert_eq!(page.total_pages, 0);
        assert!(page.window().pages().is_empty());
    }

    #[test]
    fn test_window_centers_and_shifts() {
        assert_eq!(PageWindow::new(1, 10).pages(), vec![1, 2, 3, 4, 5]);
        assert_eq!(PageWindow::new(6, 10).pages(), vec![4, 5, 6, 7, 8]);
        assert_eq!(PageWindow::new(10, 10).pages(), vec![6, 7, 8, 9, 10]);
        assert_eq!(PageWindow::new(2, 3).pages(), vec![1, 2, 3]);
    }

    #[test]
    fn test_window_for_page_past_the_end() {
        let items: Vec<u32> = (1..=30).collect();
        let page = paginate(&items, usize::MAX, 12);
        assert!(page.items.is_empty());
        assert_eq!(page.window().pages(), vec![1, 2, 3]);
        assert_eq!(PageWindow::new(usize::MAX, usize::MAX).end, usize::MAX);
    }

    proptest! {
        #[test]
        fn pages_partition_items(len in 0usize..200, per_page in 1usize..20) {
            let items: Vec<usize> = (0..len).collect();
            let total_pages = len.div_ceil(per_page);
            let mut seen = Vec::new();
            for page in 1..=total_pages {
                seen.extend(paginate(&items, page, per_page).items);
            }
            prop_assert_eq!(seen, items);
        }

        #[test]
        fn window_stays_in_bounds(current in 1usize..100, total in 1usize..100) {
            let current = current.min(total);
            let window = PageWindow::new(current, total);
            prop_assert!(window.start >= 1);
            prop_assert!(window.end <= total);
            prop_assert!(window.pages().len() <= MAX_VISIBLE_PAGES);
            prop_assert!(window.pages().contains(&current));
        }
    }
}
