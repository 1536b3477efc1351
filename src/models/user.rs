// src/models/user.rs

//! User account records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::department::Department;
use crate::models::session::Role;

/// A full user record as returned by the admin endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,

    #[serde(default)]
    pub department: Option<Department>,

    /// Toggled through the dedicated /status endpoint
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Slim embedded reference to a user (complaint author, comment author).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: i64,
    pub full_name: String,
}

/// Admin edit-user request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub full_name: String,
    pub email: String,
    pub role: Role,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
}

impl UserUpdate {
    /// Required-field check performed before any network call.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.full_name.trim().is_empty() {
            return Err(crate::error::AppError::validation("Full name is required"));
        }
        if self.email.trim().is_empty() {
            return Err(crate::error::AppError::validation("Email is required"));
        }
        Ok(())
    }
}
