// src/actions.rs

//! Mutating action handlers.
//!
//! Each handler performs exactly one network mutation and reports the
//! outcome. There is no optimistic local update: on success the caller
//! re-runs its list loader and eventual consistency comes purely from the
//! re-fetch; on failure the list state is untouched, so there is nothing to
//! roll back. The returned bool is "refresh needed".

use crate::api::{ApiClient, complaints, departments, users, votes};
use crate::error::Result;
use crate::models::{DepartmentRequest, NewComment, NewComplaint, StatusUpdate, UserUpdate, VoteType};

/// Enable or disable a user account.
pub async fn toggle_user_status(client: &ApiClient, id: i64, enabled: bool) -> Result<bool> {
    let verb = if enabled { "activated" } else { "deactivated" };
    report(
        users::set_enabled(client, id, enabled).await,
        &format!("User {verb} successfully"),
    )
}

/// Save edited user fields.
pub async fn save_user(client: &ApiClient, id: i64, update: &UserUpdate) -> Result<bool> {
    report(
        users::update(client, id, update).await,
        "User updated successfully",
    )
}

/// Activate or deactivate a department.
pub async fn toggle_department_status(client: &ApiClient, id: i64, active: bool) -> Result<bool> {
    let verb = if active { "activated" } else { "deactivated" };
    report(
        departments::set_active(client, id, active).await,
        &format!("Department {verb} successfully"),
    )
}

/// Create a department.
pub async fn create_department(client: &ApiClient, request: &DepartmentRequest) -> Result<bool> {
    report(
        departments::create(client, request).await,
        "Department created successfully",
    )
}

/// Save edited department fields.
pub async fn save_department(
    client: &ApiClient,
    id: i64,
    request: &DepartmentRequest,
) -> Result<bool> {
    report(
        departments::update(client, id, request).await,
        "Department updated successfully",
    )
}

/// Submit a new complaint.
pub async fn submit_complaint(client: &ApiClient, body: &NewComplaint) -> Result<bool> {
    report(
        complaints::create(client, body).await,
        "Complaint submitted successfully",
    )
}

/// Save edits to an existing complaint.
pub async fn save_complaint(client: &ApiClient, id: i64, body: &NewComplaint) -> Result<bool> {
    report(
        complaints::update(client, id, body).await,
        "Complaint updated successfully",
    )
}

/// Delete a complaint.
pub async fn delete_complaint(client: &ApiClient, id: i64) -> Result<bool> {
    report(
        complaints::delete(client, id).await,
        "Complaint deleted successfully",
    )
}

/// Request a status transition. The target status comes from the fixed
/// select list; the server validates whether the transition is legal.
pub async fn update_complaint_status(
    client: &ApiClient,
    id: i64,
    update: &StatusUpdate,
) -> Result<bool> {
    report(
        complaints::update_status(client, id, update).await,
        "Complaint status updated successfully",
    )
}

/// Cast a vote on a public complaint.
pub async fn cast_vote(client: &ApiClient, complaint_id: i64, vote_type: VoteType) -> Result<bool> {
    report(
        votes::vote(client, complaint_id, vote_type).await,
        "Vote recorded",
    )
}

/// Post a comment on a complaint.
pub async fn post_comment(client: &ApiClient, body: &NewComment) -> Result<bool> {
    report(
        complaints::add_comment(client, body).await,
        "Comment posted",
    )
}

/// Map one mutation outcome onto the notification surface.
///
/// Success and ordinary failure are terminal here; only `Unauthorized`
/// propagates, because it must unwind the dashboard loop.
fn report<T>(result: Result<T>, success_message: &str) -> Result<bool> {
    match result {
        Ok(_) => {
            println!("✓ {success_message}");
            Ok(true)
        }
        Err(e) if e.is_unauthorized() => Err(e),
        Err(e) => {
            log::error!("{}", e);
            println!("✗ {e}");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_report_success_requests_refresh() {
        assert!(report(Ok(1), "done").unwrap());
    }

    #[test]
    fn test_report_failure_skips_refresh() {
        let result: Result<i32> = Err(AppError::api(400, "bad"));
        assert!(!report(result, "done").unwrap());
    }

    #[test]
    fn test_report_unauthorized_propagates() {
        let result: Result<i32> = Err(AppError::unauthorized("expired"));
        assert!(report(result, "done").unwrap_err().is_unauthorized());
    }
}
