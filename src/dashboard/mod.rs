// src/dashboard/mod.rs

//! Interactive role dashboards.
//!
//! Each dashboard is a command loop over an explicit state struct: user
//! input mutates the view state, the loader re-queries the API, and the
//! renderers repaint. A failed refresh leaves the previous content on
//! screen; only an unauthorized error unwinds the loop.

pub mod admin;
pub mod staff;
pub mod student;

use serde::de::DeserializeOwned;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::api::{ApiClient, auth};
use crate::error::{AppError, Result};
use crate::loader::{self, SeqGuard};
use crate::models::{Role, SessionUser};
use crate::state::ViewState;

/// Line reader over stdin for the command loops.
pub type InputLines = Lines<BufReader<Stdin>>;

pub fn input_lines() -> InputLines {
    BufReader::new(tokio::io::stdin()).lines()
}

/// One paginated list: its path, view state, sequence guard, and the last
/// rendered snapshot (kept so a failed refresh leaves content in place).
pub struct ListView<T> {
    path: String,
    pub state: ViewState,
    guard: SeqGuard,
    pub content: Vec<T>,
}

impl<T: DeserializeOwned> ListView<T> {
    pub fn new(path: impl Into<String>, state: ViewState) -> Self {
        Self {
            path: path.into(),
            state,
            guard: SeqGuard::new(),
            content: Vec::new(),
        }
    }

    /// Re-fetch the current page. Returns true when fresh content landed;
    /// false means the prior snapshot stays (failure or stale response).
    pub async fn reload(&mut self, client: &ApiClient) -> Result<bool> {
        match loader::refresh(client, &self.path, &mut self.state, &self.guard).await? {
            Some(page) => {
                self.content = page.content;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Verify the local session carries the expected role, confirming against
/// the server. A missing session is an authorization failure; a role
/// mismatch is plain access denial and keeps the session intact.
pub async fn require_role(client: &ApiClient, role: Role) -> Result<SessionUser> {
    if client.session().is_none() {
        return Err(AppError::unauthorized("no session, please log in first"));
    }

    let user = auth::me(client).await?;
    if user.role != role {
        return Err(AppError::validation(format!(
            "Access denied. {} privileges required.",
            role.as_str()
        )));
    }
    Ok(user)
}

/// Read one follow-up input line for a form field.
pub async fn ask(lines: &mut InputLines, prompt: &str) -> Result<String> {
    use std::io::Write;
    print!("{prompt}: ");
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?.unwrap_or_default().trim().to_string())
}

/// A numeric argument out of a command like `page 3` or `view 17`.
pub fn parse_id(arg: Option<&str>) -> Option<i64> {
    arg.and_then(|s| s.parse().ok())
}

/// Report one failed fetch to the user. Only `Unauthorized` propagates,
/// because it must unwind the dashboard loop; everything else is terminal
/// here and the loop keeps running.
pub fn notify_failure(e: AppError) -> Result<()> {
    if e.is_unauthorized() {
        return Err(e);
    }
    log::error!("{}", e);
    println!("✗ {e}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(Some("17")), Some(17));
        assert_eq!(parse_id(Some("x")), None);
        assert_eq!(parse_id(None), None);
    }

    #[test]
    fn test_notify_failure_propagates_unauthorized_only() {
        let err = notify_failure(AppError::unauthorized("expired")).unwrap_err();
        assert!(err.is_unauthorized());
        assert!(notify_failure(AppError::api(500, "boom")).is_ok());
        assert!(notify_failure(AppError::validation("missing title")).is_ok());
    }
}
