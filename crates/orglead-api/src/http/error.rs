//! Application error type mapping domain failures to HTTP responses.
//!
//! Account failures keep the uniform [`AccountResponse`] body and its
//! established message text, but now carry a matching status code. Chat
//! failures are plain text.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use orglead_types::error::{AccountError, ChatError};
use orglead_types::user::{AccountResponse, messages};

/// Which account endpoint produced an error; selects the not-found text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountOperation {
    Create,
    Login,
    Update,
    Delete,
}

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    Account {
        op: AccountOperation,
        error: AccountError,
    },
    Chat(ChatError),
    /// Malformed request body or path parameter.
    Validation(String),
}

impl AppError {
    /// Adapter for `map_err` on account service results.
    pub fn account(op: AccountOperation) -> impl Fn(AccountError) -> AppError {
        move |error| AppError::Account { op, error }
    }
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

fn account_failure(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(AccountResponse::message_only(message))).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Account { op, error } => match error {
                AccountError::NotFound => {
                    let message = match op {
                        AccountOperation::Update => messages::UPDATE_NOT_FOUND.to_string(),
                        AccountOperation::Delete => messages::DELETE_NOT_FOUND.to_string(),
                        AccountOperation::Create | AccountOperation::Login => {
                            messages::fail(&error)
                        }
                    };
                    account_failure(StatusCode::NOT_FOUND, message)
                }
                AccountError::InvalidCredentials => {
                    account_failure(StatusCode::UNAUTHORIZED, messages::INCORRECT_CREDENTIALS)
                }
                AccountError::Persistence(reason) => {
                    tracing::error!(operation = ?op, %reason, "account operation failed");
                    account_failure(StatusCode::INTERNAL_SERVER_ERROR, messages::fail(reason))
                }
            },
            AppError::Validation(reason) => {
                account_failure(StatusCode::BAD_REQUEST, messages::fail(reason))
            }
            AppError::Chat(error) => {
                let status = match error {
                    ChatError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                    _ => StatusCode::BAD_GATEWAY,
                };
                (status, error.to_string()).into_response()
            }
        }
    }
}
