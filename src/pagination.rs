// src/pagination.rs

//! Pagination controls.
//!
//! Computes the visible page-number window and renders the
//! Previous/numbered/Next control line for a list.

use crate::config::SinglePagePolicy;
use crate::state::ViewState;

/// Visible page numbers: a window of `width` pages centered on `current`,
/// clamped to `[0, total - 1]`.
///
/// When the centered window would run past either edge it shifts to stay in
/// bounds rather than shrinking; it is only narrower than `width` when
/// `total < width`.
pub fn window(current: u32, total: u32, width: u32) -> Vec<u32> {
    if total == 0 || width == 0 {
        return Vec::new();
    }

    let start = current.saturating_sub(width / 2);
    let end = (start + width - 1).min(total - 1);
    let start = end.saturating_sub(width - 1);

    (start..=end).collect()
}

/// Render the control line for the current view state.
///
/// Previous is disabled on the first page and Next on the last. With at most
/// one page the configured policy decides between hiding the controls and
/// rendering them inert.
pub fn render_controls(state: &ViewState, width: u32, when_single: SinglePagePolicy) -> String {
    let total = state.total_pages;
    if total <= 1 && when_single == SinglePagePolicy::Hide {
        return String::new();
    }

    let current = state.page;
    let mut out = String::new();

    if current == 0 {
        out.push_str("[prev]");
    } else {
        out.push_str("<prev>");
    }

    for n in window(current, total, width) {
        if n == current {
            out.push_str(&format!(" ({})", n + 1));
        } else {
            out.push_str(&format!("  {} ", n + 1));
        }
    }

    if total == 0 || current == total - 1 {
        out.push_str(" [next]");
    } else {
        out.push_str(" <next>");
    }

    out.push_str(&format!("   {}", range_label(state)));
    out
}

/// "Showing X-Y of Z" label for the current page.
pub fn range_label(state: &ViewState) -> String {
    if state.total_elements == 0 {
        return "No results".to_string();
    }
    let start = u64::from(state.page) * u64::from(state.page_size) + 1;
    let end = (start + u64::from(state.page_size) - 1).min(state.total_elements);
    format!("Showing {}-{} of {}", start, end, state.total_elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_centered() {
        assert_eq!(window(7, 20, 5), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_window_shifts_at_left_edge() {
        assert_eq!(window(0, 20, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(window(1, 20, 5), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_window_shifts_at_right_edge() {
        assert_eq!(window(19, 20, 5), vec![15, 16, 17, 18, 19]);
        assert_eq!(window(18, 20, 5), vec![15, 16, 17, 18, 19]);
    }

    #[test]
    fn test_window_narrower_only_when_total_is_small() {
        assert_eq!(window(1, 3, 5), vec![0, 1, 2]);
        assert_eq!(window(0, 1, 5), vec![0]);
        assert!(window(0, 0, 5).is_empty());
    }

    #[test]
    fn test_controls_hidden_for_single_page() {
        let mut state = ViewState::new(10);
        state.total_pages = 1;
        state.total_elements = 3;
        assert!(render_controls(&state, 5, SinglePagePolicy::Hide).is_empty());
    }

    #[test]
    fn test_controls_disabled_for_single_page() {
        let mut state = ViewState::new(10);
        state.total_pages = 1;
        state.total_elements = 3;
        let line = render_controls(&state, 5, SinglePagePolicy::Disable);
        assert!(line.starts_with("[prev]"));
        assert!(line.contains("[next]"));
    }

    #[test]
    fn test_controls_disable_edges_only() {
        let mut state = ViewState::new(10);
        state.total_pages = 4;
        state.total_elements = 35;
        state.set_page(1);

        let line = render_controls(&state, 5, SinglePagePolicy::Hide);
        assert!(line.starts_with("<prev>"));
        assert!(line.contains("<next>"));
        assert!(line.contains("(2)"));
        assert!(line.contains("Showing 11-20 of 35"));
    }
}
