// src/render/complaints.rs

//! Complaint list, card, and detail rendering.

use crate::models::{Comment, Complaint};
use crate::render::badge::{badge, priority_class, status_class};
use crate::render::{format_date, table, truncate};

/// Fixed empty-state lines.
pub const EMPTY: &str = "No complaints found";
pub const EMPTY_PUBLIC: &str = "No public complaints found";
pub const EMPTY_COMMENTS: &str = "No comments yet";

/// Render the admin/staff complaints table.
pub fn render_complaints(complaints: &[Complaint], date_format: &str) -> String {
    if complaints.is_empty() {
        return EMPTY.to_string();
    }

    let rows: Vec<Vec<String>> = complaints
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                truncate(&c.title, 32),
                c.student
                    .as_ref()
                    .map_or_else(|| "Unknown".to_string(), |s| s.full_name.clone()),
                c.department
                    .as_ref()
                    .map_or_else(|| "No Department".to_string(), |d| d.name.clone()),
                badge(c.status.as_str(), status_class(&c.status)),
                badge(c.priority.as_str(), priority_class(&c.priority)),
                format_date(c.created_at.as_ref(), date_format),
            ]
        })
        .collect();

    table(
        &["ID", "Title", "Student", "Department", "Status", "Priority", "Created"],
        &rows,
    )
}

/// Render complaint cards for the student views (my complaints / public).
pub fn render_complaint_cards(complaints: &[Complaint], date_format: &str) -> String {
    if complaints.is_empty() {
        return EMPTY_PUBLIC.to_string();
    }

    complaints
        .iter()
        .map(|c| render_card(c, date_format))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_card(c: &Complaint, date_format: &str) -> String {
    let visibility = if c.is_public { "Public" } else { "Private" };
    let mut out = String::new();
    out.push_str(&format!(
        "#{} {} {} {} [{}]\n",
        c.id,
        truncate(&c.title, 48),
        badge(c.status.as_str(), status_class(&c.status)),
        badge(c.priority.as_str(), priority_class(&c.priority)),
        visibility,
    ));
    out.push_str(&format!("    {}\n", truncate(&c.description, 72)));
    out.push_str(&format!(
        "    {} | ▲ {} ▼ {} | {} comment(s) | {}\n",
        c.department
            .as_ref()
            .map_or("No Department", |d| d.name.as_str()),
        c.upvote_count,
        c.downvote_count,
        c.comments.len(),
        format_date(c.created_at.as_ref(), date_format),
    ));
    out
}

/// Render a full complaint with its comment thread and status trail.
pub fn render_complaint_detail(c: &Complaint, date_format: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("Complaint #{}: {}\n", c.id, c.title));
    out.push_str(&format!(
        "Status: {}   Priority: {}   Type: {}   Visibility: {}\n",
        badge(c.status.as_str(), status_class(&c.status)),
        badge(c.priority.as_str(), priority_class(&c.priority)),
        if c.complaint_type.is_empty() { "N/A" } else { &c.complaint_type },
        if c.is_public { "Public" } else { "Private" },
    ));
    out.push_str(&format!(
        "Student: {}   Department: {}\n",
        c.student
            .as_ref()
            .map_or("Unknown", |s| s.full_name.as_str()),
        c.department
            .as_ref()
            .map_or("No Department", |d| d.name.as_str()),
    ));
    out.push_str(&format!(
        "Created: {}   Updated: {}\n",
        format_date(c.created_at.as_ref(), date_format),
        format_date(c.updated_at.as_ref(), date_format),
    ));
    out.push_str(&format!("Votes: ▲ {} ▼ {}\n", c.upvote_count, c.downvote_count));
    out.push('\n');
    out.push_str(&c.description);
    out.push('\n');

    if !c.status_history.is_empty() {
        out.push_str("\nStatus history:\n");
        for entry in &c.status_history {
            out.push_str(&format!(
                "  {} {} by {}{}\n",
                format_date(entry.changed_at.as_ref(), date_format),
                badge(entry.status.as_str(), status_class(&entry.status)),
                entry
                    .changed_by
                    .as_ref()
                    .map_or("system", |u| u.full_name.as_str()),
                entry
                    .comment
                    .as_deref()
                    .map_or_else(String::new, |comment| format!(": {comment}")),
            ));
        }
    }

    out.push_str("\nComments:\n");
    out.push_str(&render_comments(&c.comments, date_format));
    out
}

/// Render a comment thread.
pub fn render_comments(comments: &[Comment], date_format: &str) -> String {
    if comments.is_empty() {
        return format!("  {EMPTY_COMMENTS}\n");
    }
    comments
        .iter()
        .map(|comment| {
            format!(
                "  [{}] {}: {}\n",
                format_date(comment.created_at.as_ref(), date_format),
                comment
                    .author
                    .as_ref()
                    .map_or("Anonymous", |a| a.full_name.as_str()),
                comment.comment,
            )
        })
        .collect()
}

/// CSV export of the current page (staff dashboard).
pub fn to_csv(complaints: &[Complaint], date_format: &str) -> String {
    let mut out = String::from("id,title,student,department,status,priority,created\n");
    for c in complaints {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            c.id,
            csv_field(&c.title),
            csv_field(c.student.as_ref().map_or("Unknown", |s| s.full_name.as_str())),
            csv_field(c.department.as_ref().map_or("", |d| d.name.as_str())),
            c.status.as_str(),
            c.priority.as_str(),
            format_date(c.created_at.as_ref(), date_format),
        ));
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComplaintStatus, Priority, UserRef};

    fn sample_complaint() -> Complaint {
        Complaint {
            id: 17,
            title: "Broken AC".to_string(),
            description: "Room 203 AC has been down for a week".to_string(),
            complaint_type: "MAINTENANCE".to_string(),
            status: ComplaintStatus::Submitted,
            priority: Priority::High,
            is_public: true,
            department: None,
            student: Some(UserRef {
                id: 4,
                full_name: "Tomi Adeyemi".to_string(),
            }),
            upvote_count: 3,
            downvote_count: 1,
            comments: Vec::new(),
            status_history: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_list_renders_empty_state() {
        assert_eq!(render_complaints(&[], "%Y-%m-%d"), EMPTY);
        assert_eq!(render_complaint_cards(&[], "%Y-%m-%d"), EMPTY_PUBLIC);
    }

    #[test]
    fn test_table_has_one_row_per_complaint() {
        let out = render_complaints(&[sample_complaint()], "%Y-%m-%d");
        assert_eq!(out.trim_end().lines().count(), 3);
        assert!(out.contains("Broken AC"));
        assert!(out.contains("SUBMITTED"));
    }

    #[test]
    fn test_card_shows_votes_and_visibility() {
        let out = render_complaint_cards(&[sample_complaint()], "%Y-%m-%d");
        assert!(out.contains("▲ 3 ▼ 1"));
        assert!(out.contains("[Public]"));
    }

    #[test]
    fn test_detail_renders_empty_comment_state() {
        let out = render_complaint_detail(&sample_complaint(), "%Y-%m-%d");
        assert!(out.contains(EMPTY_COMMENTS));
    }

    #[test]
    fn test_csv_escapes_commas_and_quotes() {
        let mut c = sample_complaint();
        c.title = "AC broken, \"again\"".to_string();
        let out = to_csv(&[c], "%Y-%m-%d");
        assert!(out.contains("\"AC broken, \"\"again\"\"\""));
        assert!(out.starts_with("id,title"));
    }
}
