//! Page-count math and navigation affordances for list views

use crate::page::ResourcePage;

/// Pagination state derived from a fetched page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    /// Current page (1-based)
    pub page: u32,

    /// Page size
    pub limit: u32,

    /// Total filtered count, when known
    pub total: Option<u64>,

    /// Items actually returned on the current page
    pub items_on_page: usize,
}

impl Pager {
    /// Derive pagination state from a fetched page
    #[must_use]
    pub fn from_page<T>(page: &ResourcePage<T>) -> Self {
        Self {
            page: page.page,
            limit: page.limit.max(1),
            total: page.total,
            items_on_page: page.len(),
        }
    }

    /// Pager for a view that has not fetched anything yet
    #[must_use]
    pub const fn unloaded(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            total: None,
            items_on_page: 0,
        }
    }

    /// Total number of pages, when the endpoint reports a total
    ///
    /// Always at least 1 so "Page 1 of 1" renders for an empty collection.
    #[must_use]
    pub fn total_pages(&self) -> Option<u32> {
        self.total.map(|total| {
            let limit = u64::from(self.limit.max(1));
            let pages = total.div_ceil(limit);
            u32::try_from(pages.max(1)).unwrap_or(u32::MAX)
        })
    }

    /// Whether a next page exists
    ///
    /// With a known total this is exact; legacy endpoints fall back to the
    /// heuristic that a full page implies more results.
    #[must_use]
    pub fn has_next(&self) -> bool {
        match self.total_pages() {
            Some(pages) => self.page < pages,
            None => self.items_on_page == self.limit as usize && self.limit > 0,
        }
    }

    /// Whether a previous page exists
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Next page number, if one exists
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| self.page.saturating_add(1))
    }

    /// Previous page number, if one exists
    #[must_use]
    pub fn prev_page(&self) -> Option<u32> {
        self.has_prev().then(|| self.page - 1)
    }

    /// Clamp a direct page jump into the valid range
    ///
    /// With a known total the request lands inside `[1, total_pages]`; for a
    /// legacy endpoint there is nothing to clamp against, so only the lower
    /// bound applies.
    #[must_use]
    pub fn clamp(&self, requested: u32) -> u32 {
        let floored = requested.max(1);
        match self.total_pages() {
            Some(pages) => floored.min(pages),
            None => floored,
        }
    }
}
