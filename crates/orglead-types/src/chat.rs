//! Payloads exchanged with the external chat backend.

use serde::{Deserialize, Serialize};

/// Returned to the caller when the backend answers with an empty body.
pub const NO_RESPONSE_FALLBACK: &str = "Error: no response from Python bot";

/// Body of `POST /chat` on the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

/// Reply from the backend. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Reachability of the chat backend as reported by `GET /api/chat/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendStatus {
    Ok,
    Unavailable,
}
