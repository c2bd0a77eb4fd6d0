//! ChatBackend trait definition.
//!
//! The external natural-language service is an opaque collaborator. The
//! reqwest-based adapter lives in orglead-infra; tests substitute fakes.

use orglead_types::chat::ChatReply;
use orglead_types::error::ChatError;

/// Trait for the remote chat service.
pub trait ChatBackend: Send + Sync {
    /// Base address of the backend, for diagnostics.
    fn base_url(&self) -> &str;

    /// Send one prompt and wait for the reply.
    ///
    /// `Ok(None)` means the backend answered successfully but with an
    /// empty body.
    fn send(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Option<ChatReply>, ChatError>> + Send;

    /// Probe whether the backend is up.
    fn health(&self) -> impl std::future::Future<Output = Result<(), ChatError>> + Send;
}
