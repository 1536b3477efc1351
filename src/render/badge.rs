// src/render/badge.rs

//! Badge lookup tables.
//!
//! Status, role, priority, and activity values map through fixed tables to a
//! small set of visual classes. Every table has an explicit fallback
//! ("secondary" / "info-circle") because the server vocabulary can grow
//! without a client redeploy; an unknown value must never raise.

use crate::models::{ComplaintStatus, Priority, Role};

/// Visual class for a complaint status.
pub fn status_class(status: &ComplaintStatus) -> &'static str {
    match status {
        ComplaintStatus::Submitted => "warning",
        ComplaintStatus::InReview => "info",
        ComplaintStatus::Assigned => "primary",
        ComplaintStatus::InProgress => "info",
        ComplaintStatus::Resolved => "success",
        ComplaintStatus::Rejected => "danger",
        ComplaintStatus::Closed => "dark",
        ComplaintStatus::Other(_) => "secondary",
    }
}

/// Visual class for a user role.
pub fn role_class(role: &Role) -> &'static str {
    match role {
        Role::Student => "primary",
        Role::Staff => "info",
        Role::Admin => "danger",
    }
}

/// Visual class for a complaint priority.
pub fn priority_class(priority: &Priority) -> &'static str {
    match priority {
        Priority::Low => "success",
        Priority::Medium => "warning",
        Priority::High => "danger",
    }
}

/// Visual class for an enabled/active toggle.
pub fn enabled_class(enabled: bool) -> &'static str {
    if enabled { "success" } else { "danger" }
}

/// Icon name for a recent-activity entry.
pub fn activity_icon(activity_type: &str) -> &'static str {
    match activity_type {
        "USER_REGISTERED" => "user-plus",
        "COMPLAINT_CREATED" => "file-plus",
        "COMPLAINT_RESOLVED" => "check-circle",
        "USER_ACTIVATED" => "user-check",
        "DEPARTMENT_CREATED" => "building",
        _ => "info-circle",
    }
}

/// Render a bracketed badge, colored by its visual class.
pub fn badge(label: &str, class: &str) -> String {
    match ansi_code(class) {
        Some(code) => format!("\x1b[{code}m[{label}]\x1b[0m"),
        None => format!("[{label}]"),
    }
}

/// ANSI color for a visual class; "secondary" stays uncolored.
fn ansi_code(class: &str) -> Option<u8> {
    match class {
        "primary" => Some(34),
        "info" => Some(36),
        "success" => Some(32),
        "warning" => Some(33),
        "danger" => Some(31),
        "dark" => Some(90),
        _ => None,
    }
}
