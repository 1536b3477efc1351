// src/models/complaint.rs

//! Complaint records and their request bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::department::Department;
use crate::models::user::UserRef;

/// Complaint lifecycle status.
///
/// Server-owned: the client only displays values and submits requested
/// transitions. The vocabulary may grow server-side without a client
/// redeploy, so unknown strings are carried through as `Other` instead of
/// failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComplaintStatus {
    Submitted,
    InReview,
    Assigned,
    InProgress,
    Resolved,
    Rejected,
    Closed,
    Other(String),
}

impl ComplaintStatus {
    /// All statuses a user can pick from when requesting a transition.
    pub const SELECTABLE: [ComplaintStatus; 7] = [
        ComplaintStatus::Submitted,
        ComplaintStatus::InReview,
        ComplaintStatus::Assigned,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
        ComplaintStatus::Rejected,
        ComplaintStatus::Closed,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ComplaintStatus::Submitted => "SUBMITTED",
            ComplaintStatus::InReview => "IN_REVIEW",
            ComplaintStatus::Assigned => "ASSIGNED",
            ComplaintStatus::InProgress => "IN_PROGRESS",
            ComplaintStatus::Resolved => "RESOLVED",
            ComplaintStatus::Rejected => "REJECTED",
            ComplaintStatus::Closed => "CLOSED",
            ComplaintStatus::Other(s) => s,
        }
    }
}

impl From<String> for ComplaintStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "SUBMITTED" => ComplaintStatus::Submitted,
            "IN_REVIEW" => ComplaintStatus::InReview,
            "ASSIGNED" => ComplaintStatus::Assigned,
            "IN_PROGRESS" => ComplaintStatus::InProgress,
            "RESOLVED" => ComplaintStatus::Resolved,
            "REJECTED" => ComplaintStatus::Rejected,
            "CLOSED" => ComplaintStatus::Closed,
            _ => ComplaintStatus::Other(s),
        }
    }
}

impl From<ComplaintStatus> for String {
    fn from(status: ComplaintStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Complaint priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }
}

/// Vote direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoteType {
    Upvote,
    Downvote,
}

/// A complaint as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: i64,
    pub title: String,
    pub description: String,

    /// Category (MAINTENANCE, ACADEMIC, ...), free-form server vocabulary
    #[serde(rename = "type", default)]
    pub complaint_type: String,

    pub status: ComplaintStatus,

    #[serde(default = "default_priority")]
    pub priority: Priority,

    #[serde(default)]
    pub is_public: bool,

    #[serde(default)]
    pub department: Option<Department>,

    /// The complaining student; absent in some anonymized public listings
    #[serde(default, alias = "complainer")]
    pub student: Option<UserRef>,

    #[serde(default)]
    pub upvote_count: u32,

    #[serde(default)]
    pub downvote_count: u32,

    #[serde(default)]
    pub comments: Vec<Comment>,

    #[serde(default)]
    pub status_history: Vec<StatusHistoryEntry>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_priority() -> Priority {
    Priority::Medium
}

/// A comment attached to a complaint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub comment: String,

    #[serde(default)]
    pub author: Option<UserRef>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// One entry in a complaint's status trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusHistoryEntry {
    pub status: ComplaintStatus,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default)]
    pub changed_by: Option<UserRef>,

    #[serde(default)]
    pub changed_at: Option<DateTime<Utc>>,
}

/// Complaint submission body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComplaint {
    pub title: String,
    pub description: String,

    #[serde(rename = "type")]
    pub complaint_type: String,

    pub department_id: i64,
    pub is_public: bool,
    pub priority: Priority,
}

impl NewComplaint {
    /// Required-field check performed before any network call.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::validation("Title is required"));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::validation("Description is required"));
        }
        if self.complaint_type.trim().is_empty() {
            return Err(AppError::validation("Complaint type is required"));
        }
        if self.department_id <= 0 {
            return Err(AppError::validation("Department is required"));
        }
        Ok(())
    }
}

/// Status-transition request body.
///
/// The client never validates the transition; the server owns the state
/// machine SUBMITTED -> IN_REVIEW -> ASSIGNED -> IN_PROGRESS ->
/// {RESOLVED, REJECTED} -> CLOSED.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: ComplaintStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Vote request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub complaint_id: i64,
    pub vote_type: VoteType,
}

/// Vote tally for one complaint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteSummary {
    #[serde(default)]
    pub upvotes: u32,

    #[serde(default)]
    pub downvotes: u32,
}

/// Comment submission body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub complaint_id: i64,
    pub comment: String,
}

impl NewComment {
    pub fn validate(&self) -> Result<()> {
        if self.comment.trim().is_empty() {
            return Err(AppError::validation("Comment text is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_known_round_trip() {
        let status: ComplaintStatus = serde_json::from_str("\"IN_REVIEW\"").unwrap();
        assert_eq!(status, ComplaintStatus::InReview);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"IN_REVIEW\"");
    }

    #[test]
    fn test_status_unknown_survives() {
        let status: ComplaintStatus = serde_json::from_str("\"ESCALATED\"").unwrap();
        assert_eq!(status, ComplaintStatus::Other("ESCALATED".into()));
        assert_eq!(status.as_str(), "ESCALATED");
    }

    #[test]
    fn test_new_complaint_serializes_required_fields() {
        let body = NewComplaint {
            title: "Broken AC".into(),
            description: "Room 203 AC has been down for a week".into(),
            complaint_type: "MAINTENANCE".into(),
            department_id: 3,
            is_public: true,
            priority: Priority::High,
        };
        assert!(body.validate().is_ok());

        let json: serde_json::Value = serde_json::to_value(&body).unwrap();
        assert_eq!(json["title"], "Broken AC");
        assert_eq!(json["type"], "MAINTENANCE");
        assert_eq!(json["departmentId"], 3);
        assert_eq!(json["isPublic"], true);
        assert_eq!(json["priority"], "HIGH");
    }

    #[test]
    fn test_new_complaint_validation_short_circuits() {
        let body = NewComplaint {
            title: "".into(),
            description: "text".into(),
            complaint_type: "MAINTENANCE".into(),
            department_id: 3,
            is_public: false,
            priority: Priority::Low,
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_created_complaint_deserializes_as_submitted() {
        let json = r#"{
            "id": 17,
            "title": "Broken AC",
            "description": "Room 203 AC has been down for a week",
            "type": "MAINTENANCE",
            "status": "SUBMITTED",
            "priority": "HIGH",
            "isPublic": true,
            "department": {"id": 3, "name": "Facilities", "active": true}
        }"#;
        let complaint: Complaint = serde_json::from_str(json).unwrap();
        assert_eq!(complaint.status, ComplaintStatus::Submitted);
        assert_eq!(complaint.priority, Priority::High);
        assert!(complaint.comments.is_empty());
    }

    #[test]
    fn test_status_update_omits_absent_comment() {
        let body = StatusUpdate {
            status: ComplaintStatus::Resolved,
            comment: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"status":"RESOLVED"}"#);
    }
}
