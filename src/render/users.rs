// src/render/users.rs

//! User list and detail rendering.

use crate::models::User;
use crate::render::badge::{badge, enabled_class, role_class};
use crate::render::{format_date, table};

/// Fixed empty-state line for the users list.
pub const EMPTY: &str = "No users found";

/// Render the admin users table.
pub fn render_users(users: &[User], date_format: &str) -> String {
    if users.is_empty() {
        return EMPTY.to_string();
    }

    let rows: Vec<Vec<String>> = users
        .iter()
        .map(|user| {
            vec![
                user.id.to_string(),
                user.username.clone(),
                user.full_name.clone(),
                user.email.clone(),
                badge(user.role.as_str(), role_class(&user.role)),
                user.department
                    .as_ref()
                    .map_or_else(|| "No Department".to_string(), |d| d.name.clone()),
                badge(
                    if user.enabled { "Active" } else { "Inactive" },
                    enabled_class(user.enabled),
                ),
                format_date(user.created_at.as_ref(), date_format),
            ]
        })
        .collect();

    table(
        &["ID", "Username", "Full Name", "Email", "Role", "Department", "Status", "Created"],
        &rows,
    )
}

/// Render a single user, one field per line.
pub fn render_user_detail(user: &User, date_format: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("ID:         {}\n", user.id));
    out.push_str(&format!("Username:   {}\n", user.username));
    out.push_str(&format!("Full Name:  {}\n", user.full_name));
    out.push_str(&format!("Email:      {}\n", user.email));
    out.push_str(&format!(
        "Role:       {}\n",
        badge(user.role.as_str(), role_class(&user.role))
    ));
    out.push_str(&format!(
        "Department: {}\n",
        user.department
            .as_ref()
            .map_or("No Department", |d| d.name.as_str())
    ));
    out.push_str(&format!(
        "Status:     {}\n",
        badge(
            if user.enabled { "Active" } else { "Inactive" },
            enabled_class(user.enabled),
        )
    ));
    out.push_str(&format!(
        "Created:    {}\n",
        format_date(user.created_at.as_ref(), date_format)
    ));
    out
}
