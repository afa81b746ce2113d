/// Pagination support for queries
///
/// Standard pagination model used across all bounded contexts
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination parameters for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Number of items skipped before this page
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.page_size as usize)
    }

    pub fn limit(&self) -> usize {
        self.page_size as usize
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, params: &PaginationParams) -> Self {
        let total_pages = if params.page_size == 0 {
            0
        } else {
            total_count.div_ceil(params.page_size as u64) as u32
        };

        Self {
            items,
            total_count,
            page: params.page,
            page_size: params.page_size,
            total_pages,
        }
    }

    /// Slice an already ordered list down to the requested page.
    ///
    /// Pages past the end produce an empty `items` list.
    pub fn paginate(all: Vec<T>, params: &PaginationParams) -> Self {
        let total_count = all.len() as u64;
        let items = all
            .into_iter()
            .skip(params.offset())
            .take(params.limit())
            .collect();

        Self::new(items, total_count, params)
    }

    pub fn empty(params: &PaginationParams) -> Self {
        Self::new(Vec::new(), 0, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_first_page() {
        let result = PaginatedResult::paginate((1..=25).collect(), &PaginationParams::new(1, 10));

        assert_eq!(result.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(result.total_count, 25);
        assert_eq!(result.total_pages, 3);
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let result = PaginatedResult::paginate((1..=25).collect(), &PaginationParams::new(3, 10));
        assert_eq!(result.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(result.page, 3);
    }

    #[test]
    fn test_page_past_end_is_empty_not_error() {
        let result = PaginatedResult::paginate(vec!["a", "b"], &PaginationParams::new(7, 10));
        assert!(result.items.is_empty());
        assert_eq!(result.total_count, 2);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn test_empty_input_yields_valid_envelope() {
        let result = PaginatedResult::<u8>::paginate(Vec::new(), &PaginationParams::default());
        assert_eq!(result, PaginatedResult::empty(&PaginationParams::default()));
        assert_eq!(result.total_pages, 0);
    }
}
