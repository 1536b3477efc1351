// src/loader.rs

//! Paginated list loading.
//!
//! Builds the query string from a `ViewState`, fetches one page, and writes
//! the returned totals back into the state. The dashboard-facing variant
//! swallows fetch failures so one failed refresh never tears a dashboard
//! down, and discards responses that lost the race against a newer request.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::Page;
use crate::state::ViewState;

/// Build the query string for a list fetch.
///
/// Always carries `page` and `size`, then `sort` when set, then the active
/// filters in key order. Empty filter values are omitted entirely, never
/// sent as empty-string params.
pub fn query_string(state: &ViewState) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("page", &state.page.to_string());
    query.append_pair("size", &state.page_size.to_string());

    if let Some(sort) = &state.sort {
        query.append_pair("sort", &sort.to_param());
    }

    for (key, value) in state.filters() {
        if !value.trim().is_empty() {
            query.append_pair(key, value);
        }
    }

    query.finish()
}

/// Fetch one page and write its totals back into the view state.
pub async fn fetch_page<T: DeserializeOwned>(
    client: &ApiClient,
    base_path: &str,
    state: &mut ViewState,
) -> Result<Page<T>> {
    let path = format!("{}?{}", base_path, query_string(state));
    let page: Page<T> = client.get(&path).await?;
    state.apply_page(&page);
    Ok(page)
}

/// Refresh a dashboard list.
///
/// Returns `Some(page)` when there is fresh content to repaint and `None`
/// when the prior rendered content should stay in place: either the fetch
/// failed (reported, not raised) or the response arrived after a newer one
/// was already applied. `Unauthorized` is the one error that propagates,
/// because it forces the session teardown.
pub async fn refresh<T: DeserializeOwned>(
    client: &ApiClient,
    base_path: &str,
    state: &mut ViewState,
    guard: &SeqGuard,
) -> Result<Option<Page<T>>> {
    let ticket = guard.begin();
    let path = format!("{}?{}", base_path, query_string(state));
    match client.get::<Page<T>>(&path).await {
        Ok(page) => match apply_if_current(guard, ticket, state, page) {
            Some(page) => Ok(Some(page)),
            None => {
                log::debug!("Discarding stale response for {}", base_path);
                Ok(None)
            }
        },
        Err(e) if e.is_unauthorized() => Err(e),
        Err(e) => {
            log::error!("Failed to load {}: {}", base_path, e);
            Ok(None)
        }
    }
}

/// Write a response back into the view state only when its ticket is still
/// current. A stale response must leave the state fully untouched, totals
/// included, so metadata never disagrees with the displayed content.
fn apply_if_current<T>(
    guard: &SeqGuard,
    ticket: u64,
    state: &mut ViewState,
    page: Page<T>,
) -> Option<Page<T>> {
    if guard.commit(ticket) {
        state.apply_page(&page);
        Some(page)
    } else {
        None
    }
}

/// Monotonic request sequencing for one list.
///
/// Requests already sent are never cancelled, so two in-flight responses can
/// race; `commit` rejects any ticket older than the newest already applied,
/// making the display last-request-sent-wins.
#[derive(Debug, Default)]
pub struct SeqGuard {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl SeqGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket for a request about to be issued.
    pub fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Try to apply the response for `ticket`; false means it is stale.
    pub fn commit(&self, ticket: u64) -> bool {
        self.applied
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |applied| {
                (ticket > applied).then_some(ticket)
            })
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Sort;

    #[test]
    fn test_query_omits_empty_filters() {
        let state = ViewState::new(10);
        assert_eq!(query_string(&state), "page=0&size=10");
    }

    #[test]
    fn test_query_skips_blank_filter_values() {
        let mut state = ViewState::new(10);
        state.set_filter("role", "");
        state.set_filter("status", "  ");
        state.set_filter("search", "acct");
        assert_eq!(query_string(&state), "page=0&size=10&search=acct");
    }

    #[test]
    fn test_query_carries_sort_and_filters_in_order() {
        let mut state = ViewState::with_sort(20, Sort::desc("createdAt"));
        state.set_filter("status", "RESOLVED");
        state.set_filter("department", "3");
        assert_eq!(
            query_string(&state),
            "page=0&size=20&sort=createdAt%2Cdesc&department=3&status=RESOLVED"
        );
    }

    #[test]
    fn test_query_percent_encodes_values() {
        let mut state = ViewState::new(10);
        state.set_filter("search", "broken ac & heating");
        assert_eq!(
            query_string(&state),
            "page=0&size=10&search=broken+ac+%26+heating"
        );
    }

    #[test]
    fn test_seq_guard_accepts_in_order() {
        let guard = SeqGuard::new();
        let first = guard.begin();
        let second = guard.begin();
        assert!(guard.commit(first));
        assert!(guard.commit(second));
    }

    #[test]
    fn test_seq_guard_discards_stale_response() {
        let guard = SeqGuard::new();
        let first = guard.begin();
        let second = guard.begin();

        // The newer request resolves first; the older response must lose.
        assert!(guard.commit(second));
        assert!(!guard.commit(first));
    }

    #[test]
    fn test_stale_response_leaves_totals_untouched() {
        let guard = SeqGuard::new();
        let mut state = ViewState::new(10);
        let first = guard.begin();
        let second = guard.begin();

        let fresh = Page::<i32> {
            content: vec![1, 2],
            number: 0,
            total_pages: 4,
            total_elements: 31,
        };
        assert!(apply_if_current(&guard, second, &mut state, fresh).is_some());
        assert_eq!(state.total_pages, 4);

        let stale = Page::<i32> {
            content: vec![9],
            number: 0,
            total_pages: 9,
            total_elements: 88,
        };
        assert!(apply_if_current(&guard, first, &mut state, stale).is_none());
        assert_eq!(state.total_pages, 4);
        assert_eq!(state.total_elements, 31);
    }
}
