// src/render/mod.rs

//! Pure rendering of fetched records into terminal markup.
//!
//! Every function here maps a collection to a `String` deterministically;
//! nothing in this module touches the network or the view state. Empty
//! collections render a fixed empty-state line, distinct from the loading
//! text the dashboards print while a fetch is in flight.

pub mod badge;
pub mod complaints;
pub mod departments;
pub mod stats;
pub mod users;

use chrono::{DateTime, Utc};

/// Format a timestamp, falling back to N/A when absent.
pub fn format_date(date: Option<&DateTime<Utc>>, format: &str) -> String {
    match date {
        Some(d) => d.format(format).to_string(),
        None => "N/A".to_string(),
    }
}

/// Truncate a cell value, appending an ellipsis when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}

/// Render a padded text table with a header row and separator.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let w = visible_width(cell);
            if i < widths.len() && w > widths[i] {
                widths[i] = w;
            }
        }
    }

    let mut out = String::new();
    out.push_str(&render_row(
        &headers.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
        &widths,
    ));
    out.push('\n');
    out.push_str(&widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(row, &widths));
        out.push('\n');
    }
    out
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(visible_width(cell));
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Character width of a cell, ignoring ANSI escape sequences.
fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_absent_is_na() {
        assert_eq!(format_date(None, "%Y-%m-%d"), "N/A");
    }

    #[test]
    fn test_format_date_present() {
        let date: DateTime<Utc> = "2026-03-14T09:30:00Z".parse().unwrap();
        assert_eq!(format_date(Some(&date), "%Y-%m-%d"), "2026-03-14");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long title here", 10), "a very lo…");
    }

    #[test]
    fn test_table_pads_columns() {
        let out = table(
            &["ID", "Name"],
            &[
                vec!["1".to_string(), "Facilities".to_string()],
                vec!["12".to_string(), "IT".to_string()],
            ],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ID  Name");
        assert_eq!(lines[2], "1   Facilities");
        assert_eq!(lines[3], "12  IT");
    }

    #[test]
    fn test_visible_width_ignores_ansi() {
        assert_eq!(visible_width("\x1b[32m[ACTIVE]\x1b[0m"), 8);
    }
}
