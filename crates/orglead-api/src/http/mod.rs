//! HTTP layer for the OrgLead backend.
//!
//! Axum routes for account management (`/user/...`) and the chat proxy
//! (`/api/chat`), with CORS and request tracing.

pub mod error;
pub mod handlers;
pub mod router;
