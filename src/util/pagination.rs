//! Fixed-size page window over an in-memory collection.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// 1-based page cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: usize,
    pub per_page: usize,
}

impl Pager {
    #[must_use]
    pub fn new(per_page: usize) -> Self {
        Self { page: 1, per_page: per_page.max(1) }
    }

    /// Number of pages needed for `len` items (zero for an empty collection).
    #[must_use]
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.per_page)
    }

    /// The items visible on the current page.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1).saturating_mul(self.per_page).min(items.len());
        let end = start.saturating_add(self.per_page).min(items.len());
        &items[start..end]
    }

    /// Whether the collection needs pagination controls at all.
    #[must_use]
    pub fn is_paginated(&self, len: usize) -> bool {
        len > self.per_page
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self, len: usize) -> bool {
        self.page < self.page_count(len)
    }

    pub fn next(&mut self, len: usize) {
        if self.has_next(len) {
            self.page += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.has_previous() {
            self.page -= 1;
        }
    }

    /// Pull the cursor back after the collection shrank (e.g. a delete).
    pub fn clamp(&mut self, len: usize) {
        self.page = self.page.min(self.page_count(len)).max(1);
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }
}
