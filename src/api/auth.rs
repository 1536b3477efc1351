// src/api/auth.rs

//! Authentication endpoints.

use crate::api::ApiClient;
use crate::error::{AppError, Result};
use crate::models::{Credentials, Registration, Session, SessionUser};

/// Log in and persist the returned session.
pub async fn login(client: &mut ApiClient, credentials: &Credentials) -> Result<Session> {
    if credentials.username.trim().is_empty() || credentials.password.is_empty() {
        return Err(AppError::validation("Username and password are required"));
    }

    let session: Session = client.post("/auth/login", credentials).await?;
    client.set_session(session.clone()).await?;
    Ok(session)
}

/// Register a new student account and persist the returned session.
pub async fn register(client: &mut ApiClient, registration: &Registration) -> Result<Session> {
    if registration.username.trim().is_empty()
        || registration.password.is_empty()
        || registration.full_name.trim().is_empty()
        || registration.email.trim().is_empty()
    {
        return Err(AppError::validation("All registration fields are required"));
    }

    let session: Session = client.post("/auth/register", registration).await?;
    client.set_session(session.clone()).await?;
    Ok(session)
}

/// Fetch the current session user from the server.
pub async fn me(client: &ApiClient) -> Result<SessionUser> {
    client.get("/auth/me").await
}

/// Drop the local session.
pub async fn logout(client: &mut ApiClient) -> Result<()> {
    client.clear_session().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_login_rejects_blank_credentials() {
        let config = crate::config::Config::default();
        let mut client = ApiClient::new(&config).await.unwrap();
        let err = login(
            &mut client,
            &Credentials {
                username: "  ".into(),
                password: "pw".into(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
