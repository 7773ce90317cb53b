//! Pagination types
//!
//! Pages are 1-based. A page past the end of the result set is empty,
//! never an error at this layer.

use serde::{Deserialize, Serialize};

/// Maximum items per page
pub const MAX_PER_PAGE: u32 = 100;

/// Default items per page
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Slice `items` down to the `page`-th run of `page_size` entries.
///
/// `start = (page - 1) * page_size`, `end = start + page_size`, clipped to
/// the sequence. Returns an empty vec when `start >= items.len()`.
/// Page 0 spans `[-page_size, 0)`, which clips to nothing.
/// Relative order is preserved.
pub fn paginate<T>(items: Vec<T>, page: u32, page_size: u32) -> Vec<T> {
    if page == 0 {
        return Vec::new();
    }
    let start = (page as usize - 1).saturating_mul(page_size as usize);
    items
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect()
}

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page (max 100)
    pub per_page: u32,
}

impl Pagination {
    /// Page is taken as given (page 0 selects nothing); per page is
    /// clamped to 1..=100.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Apply this page to an ordered result set, keeping the full count.
    pub fn slice<T>(&self, items: Vec<T>) -> Paginated<T> {
        let total = items.len() as i64;
        Paginated {
            items: paginate(items, self.page, self.per_page),
            total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    /// Current page number
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Query parameters for pagination (`?page=N`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<u32>,
}
