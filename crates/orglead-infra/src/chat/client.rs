//! HttpChatBackend -- concrete [`ChatBackend`] over reqwest.
//!
//! Sends `POST {base_url}/chat` with `{"text": ...}` and reads
//! `{"response": ...}` back. Every call is bounded by the configured request
//! timeout; connection establishment has its own shorter bound.

use std::time::Duration;

use orglead_core::chat::backend::ChatBackend;
use orglead_types::chat::{ChatReply, ChatRequest};
use orglead_types::config::ChatBackendConfig;
use orglead_types::error::ChatError;

pub struct HttpChatBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpChatBackend {
    /// Build a backend client from configuration.
    pub fn new(config: &ChatBackendConfig) -> Result<Self, ChatError> {
        Self::with_timeouts(
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
            Duration::from_secs(config.connect_timeout_secs),
        )
    }

    /// Build a backend client with explicit timeouts.
    pub fn with_timeouts(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| ChatError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Sort a transport failure into the chat error taxonomy.
fn classify(e: reqwest::Error) -> ChatError {
    if e.is_timeout() {
        ChatError::Timeout
    } else if e.is_connect() {
        ChatError::Unreachable(e.to_string())
    } else {
        ChatError::Transport(e.to_string())
    }
}

/// Interpret a successful response body. Blank or JSON `null` means "no
/// response".
fn parse_reply(body: &[u8]) -> Result<Option<ChatReply>, ChatError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ChatError::Malformed(format!("body is not JSON: {e}")))?;
    if value.is_null() {
        return Ok(None);
    }

    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| ChatError::Malformed(format!("missing or invalid \"response\": {e}")))
}

impl ChatBackend for HttpChatBackend {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, text: &str) -> Result<Option<ChatReply>, ChatError> {
        let body = ChatRequest {
            text: text.to_string(),
        };

        let response = self
            .client
            .post(self.url("/chat"))
            .json(&body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ChatError::Status {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let bytes = response.bytes().await.map_err(classify)?;
        parse_reply(&bytes)
    }

    async fn health(&self) -> Result<(), ChatError> {
        let response = self
            .client
            .get(self.url("/health"))
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ChatError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }
}
