// src/models/session.rs

//! Authenticated session data.

use serde::{Deserialize, Serialize};

/// User role as issued by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Staff,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Staff => "STAFF",
            Role::Admin => "ADMIN",
        }
    }
}

/// The user half of an authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub role: Role,

    /// Department name, present for staff accounts
    #[serde(default)]
    pub department: Option<String>,
}

/// Bearer token plus the cached user it belongs to.
///
/// Persisted locally between runs; destroyed on logout or any 401.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

/// Login request body.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        let json = "\"ADMIN\"";
        let role: Role = serde_json::from_str(json).unwrap();
        assert_eq!(role, Role::Admin);
        assert_eq!(serde_json::to_string(&role).unwrap(), json);
    }

    #[test]
    fn test_session_user_camel_case() {
        let json = r#"{"id":1,"username":"amina","fullName":"Amina Yusuf","role":"STAFF","department":"IT Services"}"#;
        let user: SessionUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.full_name, "Amina Yusuf");
        assert_eq!(user.department.as_deref(), Some("IT Services"));
    }
}
