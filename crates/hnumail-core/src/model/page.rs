use serde::{Deserialize, Serialize};

/// One page of a paged listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    default,
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Page<T> {
    /// Items on this page.
    #[serde(deserialize_with = "super::nullable")]
    pub content: Vec<T>,
    /// Item count across all pages.
    #[serde(deserialize_with = "super::nullable")]
    pub total_elements: u64,
    /// Number of pages.
    #[serde(deserialize_with = "super::nullable")]
    pub total_pages: u32,
    /// Zero-based index of this page.
    #[serde(deserialize_with = "super::nullable")]
    pub number: u32,
    /// Requested page size.
    #[serde(deserialize_with = "super::nullable")]
    pub size: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            number: 0,
            size: 0,
        }
    }
}

impl<T> Page<T> {
    /// Whether the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Whether a following page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages
    }

    /// Whether a preceding page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.number > 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_page() {
        let json = r#"{
            "content": [1, 2, 3],
            "pageable": {"pageNumber": 0},
            "totalElements": 23,
            "totalPages": 2,
            "number": 0,
            "size": 20,
            "last": false
        }"#;
        let page: Page<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.total_elements, 23);
        assert!(page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_last_page() {
        let page: Page<i32> =
            serde_json::from_str(r#"{"content":[],"totalPages":2,"number":1}"#).unwrap();
        assert!(page.is_empty());
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn test_page_number_at_limit() {
        let page: Page<i32> = Page {
            number: u32::MAX,
            total_pages: u32::MAX,
            ..Page::default()
        };
        assert!(!page.has_next());
        assert!(page.has_previous());
    }
}
