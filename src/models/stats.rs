// src/models/stats.rs

//! Aggregate counters for the dashboard widgets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-status complaint counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintStats {
    #[serde(default)]
    pub total: u64,

    #[serde(default)]
    pub submitted: u64,

    #[serde(default)]
    pub in_review: u64,

    #[serde(default)]
    pub assigned: u64,

    #[serde(default)]
    pub in_progress: u64,

    #[serde(default)]
    pub resolved: u64,

    #[serde(default)]
    pub rejected: u64,

    #[serde(default)]
    pub closed: u64,
}

/// Registration trend series for the admin overview.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserTrends {
    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default)]
    pub data: Vec<u64>,
}

/// One quick-stat payload; the admin endpoints return small one-field
/// objects, so each field is optional and the renderer falls back to N/A.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStat {
    #[serde(default)]
    pub average_days: Option<f64>,

    #[serde(default)]
    pub department_name: Option<String>,

    #[serde(default)]
    pub rate: Option<f64>,
}

/// One entry in the recent-activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type")]
    pub activity_type: String,

    pub description: String,

    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_missing_counters_default_to_zero() {
        let stats: ComplaintStats =
            serde_json::from_str(r#"{"total":12,"resolved":5}"#).unwrap();
        assert_eq!(stats.total, 12);
        assert_eq!(stats.resolved, 5);
        assert_eq!(stats.in_progress, 0);
    }

    #[test]
    fn test_quick_stat_single_field() {
        let stat: QuickStat = serde_json::from_str(r#"{"averageDays":3.4}"#).unwrap();
        assert_eq!(stat.average_days, Some(3.4));
        assert!(stat.department_name.is_none());
    }
}
