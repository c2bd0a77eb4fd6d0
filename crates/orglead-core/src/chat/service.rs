//! Chat proxy service.
//!
//! Forwards a free-text prompt to the backend and extracts the reply text.
//! An empty reply body is not an error: it yields
//! [`NO_RESPONSE_FALLBACK`]. Every other failure surfaces as a typed
//! [`ChatError`] so callers can tell a timeout from an unreachable or
//! misbehaving backend.

use orglead_types::chat::{BackendStatus, NO_RESPONSE_FALLBACK};
use orglead_types::error::ChatError;

use super::backend::ChatBackend;

pub struct ChatService<B: ChatBackend> {
    backend: B,
}

impl<B: ChatBackend> ChatService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Relay `text` to the backend and return its reply.
    pub async fn process_input(&self, text: &str) -> Result<String, ChatError> {
        match self.backend.send(text).await {
            Ok(Some(reply)) => Ok(reply.response),
            Ok(None) => {
                tracing::warn!(backend = %self.backend.base_url(), "chat backend returned an empty body");
                Ok(NO_RESPONSE_FALLBACK.to_string())
            }
            Err(e) => {
                tracing::error!(backend = %self.backend.base_url(), error = %e, "chat request failed");
                Err(e)
            }
        }
    }

    /// Report whether the backend answers its health probe.
    pub async fn backend_status(&self) -> BackendStatus {
        match self.backend.health().await {
            Ok(()) => BackendStatus::Ok,
            Err(e) => {
                tracing::debug!(error = %e, "chat backend health probe failed");
                BackendStatus::Unavailable
            }
        }
    }
}
