// src/api/client.rs

//! HTTP client for the SCRS backend.
//!
//! Wraps reqwest with bearer-token injection, response-envelope decoding,
//! and the global 401 policy: any unauthorized response evicts the stored
//! session before the error surfaces.

use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::Session;
use crate::session::SessionStore;

/// The `{success, data, message}` wrapper every API response follows.
#[derive(Debug, serde::Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct Envelope<T> {
    #[serde(default)]
    success: bool,

    #[serde(default)]
    data: Option<T>,

    #[serde(default)]
    message: Option<String>,
}

/// Authenticated client over the SCRS REST API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: SessionStore,
    session: Option<Session>,
}

impl ApiClient {
    /// Create a configured client and load any persisted session.
    pub async fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(&config.api.user_agent)
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()?;

        let store = SessionStore::new(&config.session.file);
        let session = store.load().await?;

        Ok(Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            store,
            session,
        })
    }

    /// The current session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Install and persist a fresh session (login/register).
    pub async fn set_session(&mut self, session: Session) -> Result<()> {
        self.store.save(&session).await?;
        self.session = Some(session);
        Ok(())
    }

    /// Drop the session locally and on disk (logout).
    pub async fn clear_session(&mut self) -> Result<()> {
        self.session = None;
        self.store.clear().await
    }

    /// GET a JSON payload.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, None::<&()>).await
    }

    /// POST a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// PUT a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// DELETE, discarding any data payload.
    ///
    /// Delete responses often carry a message-only envelope, so absence of
    /// data is not an error here.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.raw_request::<serde_json::Value, ()>(Method::DELETE, path, None)
            .await?;
        Ok(())
    }

    /// Perform a request, requiring a data payload in the envelope.
    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        match self.raw_request(method, path, body).await? {
            Some(data) => Ok(data),
            None => Err(AppError::api(200, "Response envelope carried no data")),
        }
    }

    /// Perform a request against the API and decode its envelope.
    async fn raw_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>> {
        let url = format!("{}{}", self.base_url, path);

        let mut builder = self.http.request(method, &url);
        if let Some(session) = &self.session {
            builder = builder.bearer_auth(&session.token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let result = decode_envelope(status, &text);
        if let Err(e) = &result {
            if e.is_unauthorized() {
                // Global policy: a 401 anywhere tears the session down.
                if let Err(clear_err) = self.store.clear().await {
                    log::warn!("Failed to clear session after 401: {}", clear_err);
                }
            }
        }
        result
    }
}

/// Decode one response into the caller's payload type.
///
/// A non-2xx status is a failure even when the body parses; the
/// server-supplied message is preferred over the generic fallback.
/// `Ok(None)` means a successful envelope without a data payload.
fn decode_envelope<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<Option<T>> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(AppError::unauthorized(
            "session rejected by the server, please log in again",
        ));
    }

    let envelope: Envelope<T> = serde_json::from_str(body).map_err(|e| {
        if status.is_success() {
            AppError::Json(e)
        } else {
            AppError::api(status.as_u16(), format!("HTTP error {}", status.as_u16()))
        }
    })?;

    if !status.is_success() || !envelope.success {
        let message = envelope
            .message
            .unwrap_or_else(|| format!("HTTP error {}", status.as_u16()));
        return Err(AppError::api(status.as_u16(), message));
    }

    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_envelope() {
        let body = r#"{"success":true,"data":{"id":1,"name":"Facilities","active":true}}"#;
        let dept: Option<crate::models::Department> =
            decode_envelope(StatusCode::OK, body).unwrap();
        assert_eq!(dept.unwrap().name, "Facilities");
    }

    #[test]
    fn test_decode_prefers_server_message_on_failure() {
        let body = r#"{"success":false,"data":null,"message":"Title already taken"}"#;
        let err = decode_envelope::<serde_json::Value>(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert_eq!(err.to_string(), "API error (400): Title already taken");
    }

    #[test]
    fn test_decode_falls_back_to_http_error() {
        let err =
            decode_envelope::<serde_json::Value>(StatusCode::BAD_GATEWAY, "not json").unwrap_err();
        assert_eq!(err.to_string(), "API error (502): HTTP error 502");
    }

    #[test]
    fn test_decode_success_status_false_envelope_is_failure() {
        // A 200 with success=false is still a failure.
        let body = r#"{"success":false,"message":"Vote already recorded"}"#;
        let err = decode_envelope::<serde_json::Value>(StatusCode::OK, body).unwrap_err();
        assert!(err.to_string().contains("Vote already recorded"));
    }

    #[test]
    fn test_decode_401_is_unauthorized_regardless_of_body() {
        let err = decode_envelope::<serde_json::Value>(
            StatusCode::UNAUTHORIZED,
            r#"{"success":true,"data":{}}"#,
        )
        .unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_decode_message_only_envelope_is_ok_none() {
        let data: Option<serde_json::Value> =
            decode_envelope(StatusCode::OK, r#"{"success":true,"message":"Deleted"}"#).unwrap();
        assert!(data.is_none());
    }

    #[tokio::test]
    async fn test_401_response_evicts_persisted_session() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        use crate::models::{Role, SessionUser};

        // One-shot server answering every request with a 401.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            let body = r#"{"success":false,"message":"Token expired"}"#;
            let response = format!(
                "HTTP/1.1 401 Unauthorized\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
        });

        let tmp = tempfile::TempDir::new().unwrap();
        let session_path = tmp.path().join("session.json");
        let store = SessionStore::new(&session_path);
        store
            .save(&Session {
                token: "tok-stale".to_string(),
                user: SessionUser {
                    id: 1,
                    username: "amina".to_string(),
                    full_name: "Amina Yusuf".to_string(),
                    role: Role::Staff,
                    department: None,
                },
            })
            .await
            .unwrap();

        let mut config = Config::default();
        config.api.base_url = format!("http://{addr}");
        config.session.file = session_path.to_string_lossy().into_owned();

        let client = ApiClient::new(&config).await.unwrap();
        assert!(client.session().is_some());

        let err = client.get::<serde_json::Value>("/auth/me").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(store.load().await.unwrap().is_none());
    }
}
