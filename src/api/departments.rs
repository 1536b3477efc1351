// src/api/departments.rs

//! Department endpoints.

use serde_json::json;

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{Department, DepartmentRequest};

/// Fetch the full department list (small, unpaginated).
pub async fn list(client: &ApiClient) -> Result<Vec<Department>> {
    client.get("/departments").await
}

/// Fetch one department.
pub async fn get(client: &ApiClient, id: i64) -> Result<Department> {
    client.get(&format!("/departments/{id}")).await
}

/// Create a department.
pub async fn create(client: &ApiClient, request: &DepartmentRequest) -> Result<Department> {
    request.validate()?;
    client.post("/departments", request).await
}

/// Update a department.
pub async fn update(
    client: &ApiClient,
    id: i64,
    request: &DepartmentRequest,
) -> Result<Department> {
    request.validate()?;
    client.put(&format!("/departments/{id}"), request).await
}

/// Activate or deactivate a department through the dedicated status endpoint.
pub async fn set_active(client: &ApiClient, id: i64, active: bool) -> Result<Department> {
    client
        .put(
            &format!("/departments/{id}/status"),
            &json!({ "active": active }),
        )
        .await
}
