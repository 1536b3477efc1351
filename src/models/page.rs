// src/models/page.rs

//! A single fetched slice of a server-side collection.

use serde::{Deserialize, Serialize};

/// One page of results plus its position metadata.
///
/// Invariant (server-guaranteed, relied upon by the pagination controller):
/// `0 <= number < total_pages` whenever `total_elements > 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records on this page, in server order
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,

    /// Zero-based page index
    #[serde(default)]
    pub number: u32,

    /// Total number of pages for the current query
    #[serde(default)]
    pub total_pages: u32,

    /// Total number of matching records across all pages
    #[serde(default)]
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_page() {
        let json = r#"{"content":[1,2,3],"number":2,"totalPages":7,"totalElements":65}"#;
        let page: Page<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.number, 2);
        assert_eq!(page.total_pages, 7);
        assert_eq!(page.total_elements, 65);
    }

    #[test]
    fn test_missing_fields_default() {
        let page: Page<i32> = serde_json::from_str("{}").unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
    }
}
