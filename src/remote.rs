//! HTTP client for the MindEase backend.
//!
//! Thin wrapper issuing one-shot JSON POSTs to `/login/`, `/signup/` and
//! `/chatbot/`. No retry, no backoff; timeouts are left at the transport
//! default. Pure parsing lives in `parse_chat_response` for testability.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by remote calls.
///
/// The UI collapses all variants into a single generic failure message per
/// endpoint; the distinction exists for debug logging only.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Could not build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
    /// Network-level failure (connection refused, DNS, etc.).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("server returned status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Parse(String),
}

/// Which credential endpoint to hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    /// POST `/login/`.
    Login,
    /// POST `/signup/`.
    Signup,
}

impl AuthKind {
    /// Returns the endpoint path for this kind.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login/",
            Self::Signup => "/signup/",
        }
    }
}

/// Credentials captured from the auth form at submission time.
///
/// Ephemeral: constructed per submission, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    /// Account name.
    pub username: String,
    /// Plain-text password (the backend hashes it).
    pub password: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    response: String,
}

/// Client for the MindEase backend endpoints.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteClient {
    /// Creates a client for the given base URL (e.g. `http://localhost:8000`).
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::ClientBuild`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| RemoteError::ClientBuild(e.to_string()))?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }

    /// Submits credentials to `/login/` or `/signup/`.
    ///
    /// Any HTTP success status counts as success; the response body is not
    /// consumed beyond that.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Transport`] on a network failure or
    /// [`RemoteError::Status`] on a non-success status.
    pub async fn submit_credentials(
        &self,
        kind: AuthKind,
        creds: &Credentials,
    ) -> Result<(), RemoteError> {
        let url = format!("{}{}", self.base_url, kind.path());
        let response = self
            .http
            .post(&url)
            .json(creds)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RemoteError::Status(status.as_u16()))
        }
    }

    /// Submits a chat message to `/chatbot/` and returns the bot's reply.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Transport`] on a network failure,
    /// [`RemoteError::Status`] on a non-success status, or
    /// [`RemoteError::Parse`] if the body lacks a `response` string.
    pub async fn submit_chat_message(&self, text: &str) -> Result<String, RemoteError> {
        let url = format!("{}/chatbot/", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&ChatRequest { text })
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }

        parse_chat_response(&body)
    }
}

/// Parses the `/chatbot/` response body, `{"response": "..."}`.
fn parse_chat_response(json: &str) -> Result<String, RemoteError> {
    let parsed: ChatResponse =
        serde_json::from_str(json).map_err(|e| RemoteError::Parse(e.to_string()))?;
    Ok(parsed.response)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Spawns a loopback server that answers exactly one request with the
    /// given status line and body, then closes. Returns the base URL.
    async fn one_shot_server(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            // Drain the request headers and body before answering.
            let mut buf = vec![0u8; 8192];
            let mut read = 0;
            loop {
                let n = socket.read(&mut buf[read..]).await.unwrap();
                read += n;
                let head = String::from_utf8_lossy(&buf[..read]);
                if let Some(header_end) = head.find("\r\n\r\n") {
                    let content_length = head
                        .lines()
                        .find_map(|l| l.to_ascii_lowercase().strip_prefix("content-length:").map(str::to_owned))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if read >= header_end + 4 + content_length {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }
            let response = format!(
                "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn auth_kind_paths() {
        assert_eq!(AuthKind::Login.path(), "/login/");
        assert_eq!(AuthKind::Signup.path(), "/signup/");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = RemoteClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn parse_chat_response_extracts_text() {
        let reply = parse_chat_response(r#"{"response": "Hello there"}"#).unwrap();
        assert_eq!(reply, "Hello there");
    }

    #[test]
    fn parse_chat_response_rejects_missing_field() {
        let err = parse_chat_response(r#"{"message": "nope"}"#).unwrap_err();
        assert!(matches!(err, RemoteError::Parse(_)));
    }

    #[test]
    fn parse_chat_response_rejects_invalid_json() {
        let err = parse_chat_response("<html>504</html>").unwrap_err();
        assert!(matches!(err, RemoteError::Parse(_)));
    }

    #[tokio::test]
    async fn login_success_on_2xx() {
        let base = one_shot_server("HTTP/1.1 200 OK", r#"{"message": "Login successful"}"#).await;
        let client = RemoteClient::new(base).unwrap();
        let creds = Credentials {
            username: "ada".into(),
            password: "hunter2".into(),
        };
        assert!(client.submit_credentials(AuthKind::Login, &creds).await.is_ok());
    }

    #[tokio::test]
    async fn login_failure_on_401() {
        let base = one_shot_server(
            "HTTP/1.1 401 Unauthorized",
            r#"{"detail": "Incorrect username or password"}"#,
        )
        .await;
        let client = RemoteClient::new(base).unwrap();
        let creds = Credentials {
            username: "ada".into(),
            password: "wrong".into(),
        };
        let err = client
            .submit_credentials(AuthKind::Login, &creds)
            .await
            .unwrap_err();
        assert!(matches!(err, RemoteError::Status(401)));
    }

    #[tokio::test]
    async fn signup_conflict_maps_to_status_error() {
        let base = one_shot_server(
            "HTTP/1.1 400 Bad Request",
            r#"{"detail": "Username already registered"}"#,
        )
        .await;
        let client = RemoteClient::new(base).unwrap();
        let creds = Credentials {
            username: "ada".into(),
            password: "hunter2".into(),
        };
        let err = client
            .submit_credentials(AuthKind::Signup, &creds)
            .await
            .unwrap_err();
        assert!(matches!(err, RemoteError::Status(400)));
    }

    #[tokio::test]
    async fn chat_returns_bot_reply() {
        let base = one_shot_server("HTTP/1.1 200 OK", r#"{"response": "You are not alone."}"#).await;
        let client = RemoteClient::new(base).unwrap();
        let reply = client.submit_chat_message("I feel low").await.unwrap();
        assert_eq!(reply, "You are not alone.");
    }

    #[tokio::test]
    async fn chat_malformed_body_is_a_parse_error() {
        let base = one_shot_server("HTTP/1.1 200 OK", r#"{"unexpected": true}"#).await;
        let client = RemoteClient::new(base).unwrap();
        let err = client.submit_chat_message("hello").await.unwrap_err();
        assert!(matches!(err, RemoteError::Parse(_)));
    }

    #[tokio::test]
    async fn chat_transport_error_when_unreachable() {
        // Bind then drop a listener so the port is very likely closed.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = RemoteClient::new(format!("http://{addr}")).unwrap();
        let err = client.submit_chat_message("hello").await.unwrap_err();
        assert!(matches!(err, RemoteError::Transport(_)));
    }
}
