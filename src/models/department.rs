// src/models/department.rs

//! Department records.

use serde::{Deserialize, Serialize};

/// A department that complaints can be routed to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Toggled through the dedicated /status endpoint
    #[serde(default)]
    pub active: bool,
}

/// Create/update request body for a department.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentRequest {
    pub name: String,
    pub description: String,
}

impl DepartmentRequest {
    /// Required-field check performed before any network call.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.name.trim().is_empty() {
            return Err(crate::error::AppError::validation(
                "Department name is required",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_blank_name() {
        let req = DepartmentRequest {
            name: "   ".into(),
            description: "desc".into(),
        };
        assert!(req.validate().is_err());
    }
}
