//! Infrastructure layer for the OrgLead backend.
//!
//! Contains implementations of the port traits defined in `orglead-core`:
//! SQLite account storage, Argon2id credential hashing, the reqwest chat
//! backend client, and configuration loading.

pub mod chat;
pub mod config;
pub mod crypto;
pub mod sqlite;
