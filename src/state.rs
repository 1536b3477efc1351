// src/state.rs

//! Per-list view state.
//!
//! One `ViewState` per dashboard list, owned by an explicit dashboard state
//! struct and passed into loader and renderer calls. Only input handlers and
//! the loader write to it.

use std::collections::BTreeMap;

use crate::models::Page;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// Sort key sent to the server as `field,direction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: Direction,
}

impl Sort {
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }

    pub fn to_param(&self) -> String {
        format!("{},{}", self.field, self.direction.as_str())
    }
}

/// Pagination, filter, and sort choices driving the next fetch.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Zero-based page index
    pub page: u32,

    /// Rows requested per page
    pub page_size: u32,

    /// Active filter values; an absent key means unfiltered
    filters: BTreeMap<String, String>,

    /// Optional sort key
    pub sort: Option<Sort>,

    /// Written back by the loader after each successful fetch
    pub total_pages: u32,
    pub total_elements: u64,
}

impl ViewState {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 0,
            page_size,
            filters: BTreeMap::new(),
            sort: None,
            total_pages: 0,
            total_elements: 0,
        }
    }

    pub fn with_sort(page_size: u32, sort: Sort) -> Self {
        Self {
            sort: Some(sort),
            ..Self::new(page_size)
        }
    }

    /// Overwrite one filter key and reset to the first page.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.filters.insert(key.into(), value.into());
        self.page = 0;
    }

    /// Remove one filter key and reset to the first page.
    pub fn clear_filter(&mut self, key: &str) {
        self.filters.remove(key);
        self.page = 0;
    }

    /// Drop every filter and reset to the first page.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page = 0;
    }

    /// Active filters in deterministic key order, empty values included.
    pub fn filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Set the page only when `0 <= n < total_pages`; silently ignored
    /// otherwise.
    pub fn set_page(&mut self, n: u32) {
        if n < self.total_pages {
            self.page = n;
        }
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.set_page(self.page - 1);
        }
    }

    /// Write page metadata back after a successful fetch.
    pub fn apply_page<T>(&mut self, page: &Page<T>) {
        self.total_pages = page.total_pages;
        self.total_elements = page.total_elements;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_filter_resets_page() {
        let mut state = ViewState::new(10);
        state.total_pages = 5;
        state.set_page(3);
        state.set_filter("status", "RESOLVED");
        assert_eq!(state.page, 0);
        assert_eq!(
            state.filters().collect::<Vec<_>>(),
            vec![("status", "RESOLVED")]
        );
    }

    #[test]
    fn test_set_page_out_of_range_is_noop() {
        let mut state = ViewState::new(10);
        state.total_pages = 3;
        state.set_page(1);

        state.set_page(3);
        assert_eq!(state.page, 1);
        state.set_page(99);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_set_page_when_no_pages_is_noop() {
        let mut state = ViewState::new(10);
        state.set_page(0);
        assert_eq!(state.page, 0);
        assert_eq!(state.total_pages, 0);
    }

    #[test]
    fn test_prev_page_at_zero_stays() {
        let mut state = ViewState::new(10);
        state.total_pages = 2;
        state.prev_page();
        assert_eq!(state.page, 0);
        state.next_page();
        state.prev_page();
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_apply_page_writes_totals_back() {
        let mut state = ViewState::new(10);
        let page = Page::<i32> {
            content: vec![1],
            number: 0,
            total_pages: 4,
            total_elements: 31,
        };
        state.apply_page(&page);
        assert_eq!(state.total_pages, 4);
        assert_eq!(state.total_elements, 31);
    }

    #[test]
    fn test_sort_param() {
        assert_eq!(Sort::desc("createdAt").to_param(), "createdAt,desc");
    }
}
