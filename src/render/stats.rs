// src/render/stats.rs

//! Overview widget rendering: counters, trends, activity feed.

use crate::models::{Activity, ComplaintStats, QuickStat, UserTrends};
use crate::render::badge::activity_icon;
use crate::render::format_date;

/// Fixed empty-state line for the activity feed.
pub const EMPTY_ACTIVITY: &str = "No recent activity";

/// Render the per-status complaint breakdown.
pub fn render_complaint_stats(stats: &ComplaintStats) -> String {
    let rows = [
        ("Submitted", stats.submitted),
        ("In review", stats.in_review),
        ("Assigned", stats.assigned),
        ("In progress", stats.in_progress),
        ("Resolved", stats.resolved),
        ("Rejected", stats.rejected),
        ("Closed", stats.closed),
    ];

    let mut out = format!("Complaints: {} total\n", stats.total);
    for (label, count) in rows {
        out.push_str(&format!("  {:<12} {:>5}  {}\n", label, count, bar(count, stats.total)));
    }
    out
}

/// Render the registration trend series.
pub fn render_user_trends(trends: &UserTrends) -> String {
    if trends.labels.is_empty() {
        return "No trend data".to_string();
    }
    let max = trends.data.iter().copied().max().unwrap_or(0);
    trends
        .labels
        .iter()
        .zip(trends.data.iter().chain(std::iter::repeat(&0)))
        .map(|(label, count)| format!("  {:<10} {:>4}  {}\n", label, count, bar(*count, max)))
        .collect()
}

/// Render the admin quick stats, each falling back to N/A.
pub fn render_quick_stats(
    resolution: &QuickStat,
    most_active: &QuickStat,
    satisfaction: &QuickStat,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Avg resolution time:    {}\n",
        resolution
            .average_days
            .map_or_else(|| "N/A".to_string(), |d| format!("{d:.1} days")),
    ));
    out.push_str(&format!(
        "Most active department: {}\n",
        most_active.department_name.as_deref().unwrap_or("N/A"),
    ));
    out.push_str(&format!(
        "Satisfaction rate:      {}\n",
        satisfaction
            .rate
            .map_or_else(|| "N/A".to_string(), |r| format!("{r:.0}%")),
    ));
    out
}

/// Render the recent-activity feed.
pub fn render_activity(activities: &[Activity], date_format: &str) -> String {
    if activities.is_empty() {
        return EMPTY_ACTIVITY.to_string();
    }
    activities
        .iter()
        .map(|a| {
            format!(
                "  [{}] ({}) {}\n",
                format_date(a.timestamp.as_ref(), date_format),
                activity_icon(&a.activity_type),
                a.description,
            )
        })
        .collect()
}

/// A proportional bar scaled against the largest value.
fn bar(count: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }
    let width = (count * 20 / max) as usize;
    "#".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_breakdown_mentions_every_status() {
        let stats = ComplaintStats {
            total: 10,
            resolved: 5,
            ..Default::default()
        };
        let out = render_complaint_stats(&stats);
        assert!(out.contains("10 total"));
        assert!(out.contains("Resolved"));
        assert!(out.contains("Rejected"));
    }

    #[test]
    fn test_empty_activity_renders_empty_state() {
        assert_eq!(render_activity(&[], "%Y-%m-%d"), EMPTY_ACTIVITY);
    }

    #[test]
    fn test_activity_uses_icon_fallback() {
        let feed = vec![Activity {
            activity_type: "SOMETHING_NEW".to_string(),
            description: "A thing happened".to_string(),
            timestamp: None,
        }];
        let out = render_activity(&feed, "%Y-%m-%d");
        assert!(out.contains("(info-circle)"));
    }

    #[test]
    fn test_quick_stats_fall_back_to_na() {
        let empty = QuickStat::default();
        let out = render_quick_stats(&empty, &empty, &empty);
        assert_eq!(out.matches("N/A").count(), 3);
    }

    #[test]
    fn test_bar_scales() {
        assert_eq!(bar(10, 10), "#".repeat(20));
        assert_eq!(bar(0, 10), "");
        assert_eq!(bar(5, 0), "");
    }
}
