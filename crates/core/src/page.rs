//! Pagination metadata and list results.

use serde::{Deserialize, Serialize};

const fn default_page() -> u32 {
    1
}

const fn default_limit() -> u32 {
    10
}

/// Pagination metadata as reported by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Page size requested.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Total number of matching entities across all pages.
    #[serde(default)]
    pub count: u64,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            count: 0,
        }
    }
}

impl PageMeta {
    /// Total number of pages, derived as `ceil(count / limit)`.
    ///
    /// Returns 0 when the limit is 0 (a degenerate server response).
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            0
        } else {
            self.count.div_ceil(u64::from(self.limit))
        }
    }
}

/// One page of entities plus its pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Listing<T> {
    /// An empty listing with default metadata.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            meta: PageMeta::default(),
        }
    }
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let meta = PageMeta {
            page: 2,
            limit: 5,
            count: 7,
        };
        assert_eq!(meta.total_pages(), 2);
    }

    #[test]
    fn test_total_pages_exact_division() {
        let meta = PageMeta {
            page: 1,
            limit: 5,
            count: 10,
        };
        assert_eq!(meta.total_pages(), 2);
    }

    #[test]
    fn test_total_pages_zero_limit() {
        let meta = PageMeta {
            page: 1,
            limit: 0,
            count: 7,
        };
        assert_eq!(meta.total_pages(), 0);
    }

    #[test]
    fn test_meta_defaults_for_missing_fields() {
        let meta: PageMeta = serde_json::from_str("{}").expect("defaults apply");
        assert_eq!(meta.page, 1);
        assert_eq!(meta.limit, 10);
        assert_eq!(meta.count, 0);
    }
}
