use thiserror::Error;

/// Errors from account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("account not found")]
    NotFound,

    /// Unknown email and wrong password both map here.
    #[error("incorrect credentials")]
    InvalidCredentials,

    #[error("{0}")]
    Persistence(String),
}

/// Errors from the chat proxy.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat backend timed out")]
    Timeout,

    #[error("chat backend unreachable: {0}")]
    Unreachable(String),

    #[error("chat backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed chat backend response: {0}")]
    Malformed(String),

    #[error("chat transport error: {0}")]
    Transport(String),
}

/// Errors from repository operations (used by trait definitions in orglead-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}
