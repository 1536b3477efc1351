// src/api/stats.rs

//! Aggregate-counter endpoints for the dashboard widgets.

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{Activity, ComplaintStats, QuickStat, UserTrends};

/// Per-status complaint counters.
pub async fn complaints(client: &ApiClient) -> Result<ComplaintStats> {
    client.get("/complaints/stats").await
}

/// Registration trend series.
pub async fn user_trends(client: &ApiClient) -> Result<UserTrends> {
    client.get("/admin/users/stats/trends").await
}

/// Recent activity feed.
pub async fn recent_activity(client: &ApiClient) -> Result<Vec<Activity>> {
    client.get("/admin/activity/recent").await
}

/// Average complaint resolution time.
pub async fn avg_resolution_time(client: &ApiClient) -> Result<QuickStat> {
    client.get("/admin/stats/avg-resolution-time").await
}

/// Department with the most complaints.
pub async fn most_active_department(client: &ApiClient) -> Result<QuickStat> {
    client.get("/admin/stats/most-active-department").await
}

/// Student satisfaction rate.
pub async fn satisfaction_rate(client: &ApiClient) -> Result<QuickStat> {
    client.get("/admin/stats/satisfaction-rate").await
}
