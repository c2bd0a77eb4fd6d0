//! Cryptographic operations.
//!
//! - `hash`: Argon2id password hashing for account credentials

pub mod hash;
