use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;

/// Server-assigned account identifier (SQLite rowid, never reused).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted account record.
///
/// Deliberately not `Serialize`: the credential hash must never reach the
/// wire. Use [`AccountResponse`] for API output.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An account record that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /user/create` and `PUT /user/update/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Body of `POST /user/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Outcome messages carried in [`AccountResponse::message`].
///
/// The text is part of the public contract; clients match on it.
pub mod messages {
    pub const CREATED: &str = "User created successfully!";
    pub const LOGGED_IN: &str = "User successfully logged in!";
    pub const INCORRECT_CREDENTIALS: &str = "Incorrect credentials!";
    pub const UPDATED: &str = "Account Updated Successfully!";
    pub const UPDATE_NOT_FOUND: &str = "Unable To Update Account! Unable To Find Account!";
    pub const DELETED: &str = "Account Successfully Deleted";
    pub const DELETE_NOT_FOUND: &str = "Unable To Delete Account! Unable To Find Account!";

    /// Message for a failure whose cause is reported verbatim.
    pub fn fail(reason: impl std::fmt::Display) -> String {
        format!("Fail: {reason}")
    }
}

/// Uniform JSON payload returned by every account endpoint.
///
/// Identity fields are `null` on failure paths and after delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub message: String,
    pub id: Option<UserId>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl AccountResponse {
    /// A response carrying the account's public fields.
    pub fn with_user(message: impl Into<String>, user: &User) -> Self {
        Self {
            message: message.into(),
            id: Some(user.id),
            email: Some(user.email.clone()),
            first_name: Some(user.first_name.clone()),
            last_name: Some(user.last_name.clone()),
        }
    }

    /// A response carrying only a message.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
            email: None,
            first_name: None,
            last_name: None,
        }
    }
}
