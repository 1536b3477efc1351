// src/api/users.rs

//! Admin user-management endpoints.

use serde_json::json;

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{User, UserUpdate};

/// List path used by the paginated loader.
pub const LIST_PATH: &str = "/admin/users";

/// Fetch one user.
pub async fn get(client: &ApiClient, id: i64) -> Result<User> {
    client.get(&format!("/admin/users/{id}")).await
}

/// Update a user's profile fields.
pub async fn update(client: &ApiClient, id: i64, update: &UserUpdate) -> Result<User> {
    update.validate()?;
    client.put(&format!("/admin/users/{id}"), update).await
}

/// Enable or disable an account through the dedicated status endpoint.
pub async fn set_enabled(client: &ApiClient, id: i64, enabled: bool) -> Result<User> {
    client
        .put(
            &format!("/admin/users/{id}/status"),
            &json!({ "enabled": enabled }),
        )
        .await
}
