//! Page window arithmetic for the user listing

use std::ops::Range;

/// Position within a paginated collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    current: usize,
    page_size: usize,
    total_items: usize,
}

impl PageCursor {
    /// Build a cursor; a zero page size is treated as one
    pub fn new(current: usize, page_size: usize, total_items: usize) -> Self {
        Self {
            current,
            page_size: page_size.max(1),
            total_items,
        }
    }

    /// Read the page index from a raw query value, defaulting to the first page
    pub fn parse_index(raw: Option<&str>) -> usize {
        raw.and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Number of items to skip for the current page
    pub fn offset(&self) -> usize {
        self.current.saturating_mul(self.page_size)
    }

    /// Highest valid page index (0 for an empty collection)
    pub fn last_index(&self) -> usize {
        self.total_pages().saturating_sub(1)
    }

    /// Target of the "previous" button
    pub fn previous_target(&self) -> usize {
        let target = if self.current == 0 {
            0
        } else if self.current == self.last_index() {
            self.total_pages().saturating_sub(2)
        } else {
            self.current - 1
        };

        self.clamp(target)
    }

    /// Target of the "next" button
    pub fn next_target(&self) -> usize {
        let target = if self.current == 0 {
            1
        } else if self.current == self.last_index() {
            self.last_index()
        } else {
            self.current + 1
        };

        self.clamp(target)
    }

    /// One button per page
    pub fn page_indices(&self) -> Range<usize> {
        0..self.total_pages()
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.last_index())
    }
}
