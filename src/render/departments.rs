// src/render/departments.rs

//! Department list rendering.

use crate::models::Department;
use crate::render::badge::{badge, enabled_class};
use crate::render::{table, truncate};

/// Fixed empty-state line for the departments list.
pub const EMPTY: &str = "No departments found";

/// Render the departments table.
pub fn render_departments(departments: &[Department]) -> String {
    if departments.is_empty() {
        return EMPTY.to_string();
    }

    let rows: Vec<Vec<String>> = departments
        .iter()
        .map(|dept| {
            vec![
                dept.id.to_string(),
                dept.name.clone(),
                truncate(dept.description.as_deref().unwrap_or("No description"), 40),
                badge(
                    if dept.active { "Active" } else { "Inactive" },
                    enabled_class(dept.active),
                ),
            ]
        })
        .collect();

    table(&["ID", "Name", "Description", "Status"], &rows)
}

/// Render the numbered department choices for the submission form.
pub fn render_department_choices(departments: &[Department]) -> String {
    let active: Vec<&Department> = departments.iter().filter(|d| d.active).collect();
    if active.is_empty() {
        return "No active departments available".to_string();
    }
    active
        .iter()
        .map(|d| format!("  {} - {}", d.id, d.name))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dept(id: i64, name: &str, active: bool) -> Department {
        Department {
            id,
            name: name.to_string(),
            description: None,
            active,
        }
    }

    #[test]
    fn test_empty_renders_empty_state() {
        assert_eq!(render_departments(&[]), EMPTY);
    }

    #[test]
    fn test_inactive_marked() {
        let out = render_departments(&[dept(1, "Facilities", false)]);
        assert!(out.contains("Inactive"));
        assert!(out.contains("No description"));
    }

    #[test]
    fn test_choices_skip_inactive() {
        let out = render_department_choices(&[
            dept(1, "Facilities", true),
            dept(2, "Archived", false),
        ]);
        assert!(out.contains("Facilities"));
        assert!(!out.contains("Archived"));
    }
}
