//! Shared domain types for the OrgLead backend.
//!
//! Account records and their wire DTOs, chat exchange payloads, error
//! enums and configuration types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod user;
