//! Page Request
//!
//! Zero-indexed window over an ordered listing.

use crate::shared::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    size: i64,
}

impl PageRequest {
    /// Build a page request, clamping `size` to `max_size`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPage` if `page` or `size` is negative.
    pub fn new(page: i64, size: i64, max_size: i64) -> Result<Self, DomainError> {
        if page < 0 {
            return Err(DomainError::InvalidPage(format!("page must not be negative, got {page}")));
        }
        if size < 0 {
            return Err(DomainError::InvalidPage(format!("size must not be negative, got {size}")));
        }
        Ok(Self {
            page,
            size: size.min(max_size.max(0)),
        })
    }

    #[must_use]
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Maximum number of items in the page (SQL `LIMIT`)
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.size
    }

    /// Number of items to skip (SQL `OFFSET`)
    #[must_use]
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_zero_indexed() {
        let first = PageRequest::new(0, 10, 100).unwrap();
        assert_eq!(first.offset(), 0);
        assert_eq!(first.limit(), 10);

        let third = PageRequest::new(2, 10, 100).unwrap();
        assert_eq!(third.offset(), 20);
    }

    #[test]
    fn test_size_is_clamped() {
        let page = PageRequest::new(1, 5_000, 100).unwrap();
        assert_eq!(page.limit(), 100);
        assert_eq!(page.offset(), 100);
    }

    #[test]
    fn test_negative_values_are_rejected() {
        assert!(matches!(PageRequest::new(-1, 10, 100), Err(DomainError::InvalidPage(_))));
        assert!(matches!(PageRequest::new(0, -10, 100), Err(DomainError::InvalidPage(_))));
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let page = PageRequest::new(i64::MAX, 10, 100).unwrap();
        assert_eq!(page.offset(), i64::MAX);
    }
}
