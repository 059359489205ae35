//! Client-side pagination
//!
//! Pages are fixed-size slices of the in-memory record set, addressed by a
//! zero-based index. The paginator never clamps the selected index: a page
//! past the end simply shows no records.

use crate::config::PaginationConfig;

/// Records per page
pub const PAGE_SIZE: usize = 10;

/// One element of the page-control strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// Go to the previous page
    Previous { enabled: bool },

    /// Jump to a page (zero-based)
    Page { index: usize, current: bool },

    /// Elided run of pages
    Break,

    /// Go to the next page
    Next { enabled: bool },
}

/// Page index and page-control layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
    margin_pages: usize,
    page_range: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(2, 5)
    }
}

impl Paginator {
    /// `margin_pages` are always shown at each end of the controls;
    /// `page_range` pages are shown around the current one.
    pub fn new(margin_pages: usize, page_range: usize) -> Self {
        Self {
            current_page: 0,
            margin_pages,
            page_range: page_range.max(1),
        }
    }

    pub fn from_config(config: &PaginationConfig) -> Self {
        Self::new(config.margin_pages, config.page_range)
    }

    pub fn page_size(&self) -> usize {
        PAGE_SIZE
    }

    /// `ceil(record_count / PAGE_SIZE)`
    pub fn page_count(record_count: usize) -> usize {
        record_count.div_ceil(PAGE_SIZE)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Sets the current page to exactly `index`
    pub fn select_page(&mut self, index: usize) {
        self.current_page = index;
    }

    pub fn reset(&mut self) {
        self.current_page = 0;
    }

    /// Absolute index of the first record on the current page
    pub fn first_index(&self) -> usize {
        self.current_page.saturating_mul(PAGE_SIZE)
    }

    /// Records on the current page
    pub fn visible<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        Self::page_slice(records, self.current_page)
    }

    /// `records[page * PAGE_SIZE .. page * PAGE_SIZE + PAGE_SIZE]`, truncated
    /// to the slice length; empty when the page starts past the end
    pub fn page_slice<T>(records: &[T], page: usize) -> &[T] {
        let start = page.saturating_mul(PAGE_SIZE);
        if start >= records.len() {
            return &[];
        }
        let end = start.saturating_add(PAGE_SIZE).min(records.len());
        &records[start..end]
    }

    /// Page-control strip for a record set of `record_count` records
    ///
    /// Empty when there are no pages. Otherwise: previous, the first and
    /// last `margin_pages` pages, a window of `page_range` pages around the
    /// current page, breaks for elided runs, next.
    pub fn controls(&self, record_count: usize) -> Vec<PageControl> {
        let count = Self::page_count(record_count);
        if count == 0 {
            return Vec::new();
        }

        let current = self.current_page;
        let mut controls = vec![PageControl::Previous {
            enabled: current > 0,
        }];

        let (window_start, window_end) = if count <= self.page_range {
            (0, count)
        } else {
            let start = current
                .saturating_sub(self.page_range / 2)
                .min(count - self.page_range);
            (start, start + self.page_range)
        };

        for index in 0..count {
            let in_margin = index < self.margin_pages
                || index >= count.saturating_sub(self.margin_pages);
            let in_window = index >= window_start && index < window_end;

            if in_margin || in_window {
                controls.push(PageControl::Page {
                    index,
                    current: index == current,
                });
            } else if controls.last() != Some(&PageControl::Break) {
                controls.push(PageControl::Break);
            }
        }

        controls.push(PageControl::Next {
            enabled: current + 1 < count,
        });
        controls
    }
}
