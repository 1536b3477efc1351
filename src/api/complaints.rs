// src/api/complaints.rs

//! Complaint endpoints, including comments on a complaint.

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{Comment, Complaint, NewComment, NewComplaint, StatusUpdate};

/// List paths used by the paginated loader.
pub const LIST_PATH: &str = "/complaints";
pub const MY_LIST_PATH: &str = "/complaints/my-complaints";
pub const PUBLIC_LIST_PATH: &str = "/complaints/public";

/// Fetch one complaint with comments and status history.
pub async fn get(client: &ApiClient, id: i64) -> Result<Complaint> {
    client.get(&format!("/complaints/{id}")).await
}

/// Submit a new complaint.
pub async fn create(client: &ApiClient, body: &NewComplaint) -> Result<Complaint> {
    body.validate()?;
    client.post("/complaints", body).await
}

/// Edit an existing complaint (students, own complaints only).
pub async fn update(client: &ApiClient, id: i64, body: &NewComplaint) -> Result<Complaint> {
    body.validate()?;
    client.put(&format!("/complaints/{id}"), body).await
}

/// Delete a complaint.
pub async fn delete(client: &ApiClient, id: i64) -> Result<()> {
    client.delete(&format!("/complaints/{id}")).await
}

/// Request a status transition, optionally with a comment.
pub async fn update_status(
    client: &ApiClient,
    id: i64,
    update: &StatusUpdate,
) -> Result<Complaint> {
    client.put(&format!("/complaints/{id}/status"), update).await
}

/// Fetch the comment thread for a complaint.
pub async fn comments(client: &ApiClient, id: i64) -> Result<Vec<Comment>> {
    client.get(&format!("/complaints/{id}/comments")).await
}

/// Post a comment on a complaint.
pub async fn add_comment(client: &ApiClient, body: &NewComment) -> Result<Comment> {
    body.validate()?;
    client.post("/comments", body).await
}
