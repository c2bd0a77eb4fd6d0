//! Chat proxy handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use orglead_core::chat::backend::ChatBackend;
use orglead_types::chat::BackendStatus;

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/chat - Relay a raw text prompt, answer with the reply text.
pub async fn chat(State(state): State<AppState>, prompt: String) -> Result<String, AppError> {
    Ok(state.chat_service.process_input(&prompt).await?)
}

/// GET /api/chat/health - Report whether the chat backend is reachable.
pub async fn chat_health(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let status = state.chat_service.backend_status().await;
    let code = match status {
        BackendStatus::Ok => StatusCode::OK,
        BackendStatus::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        code,
        Json(serde_json::json!({
            "status": status,
            "backend": state.chat_service.backend().base_url(),
        })),
    )
}
