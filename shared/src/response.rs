//! Common response envelopes

use serde::{Deserialize, Serialize};

/// Paginated list response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    /// Total matching rows (before pagination)
    pub total: i64,
    pub total_pages: i64,
}

impl<T> PaginatedResponse<T> {
    /// Build a page, deriving `total_pages` from the page size
    pub fn new(data: Vec<T>, total: i64, limit: i64) -> Self {
        let total_pages = if limit > 0 {
            (total + limit - 1) / limit
        } else {
            0
        };
        Self {
            data,
            total,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let page = PaginatedResponse::new(vec![1, 2, 3], 25, 10);
        assert_eq!(page.total_pages, 3);
        let page = PaginatedResponse::new(vec![1], 30, 10);
        assert_eq!(page.total_pages, 3);
        let page: PaginatedResponse<i32> = PaginatedResponse::new(vec![], 0, 10);
        assert_eq!(page.total_pages, 0);
    }
}
