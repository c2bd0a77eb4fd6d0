//! CredentialHasher trait for one-way password hashing.
//!
//! Defined in orglead-core so the account service can hash and verify
//! passwords without coupling to a specific algorithm. The
//! `Argon2CredentialHasher` adapter lives in orglead-infra.

/// Abstraction over salted one-way password hashing.
pub trait CredentialHasher: Send + Sync {
    /// Hash a plain-text password into a self-describing string
    /// (algorithm, parameters and salt included).
    fn hash(&self, password: &str) -> Result<String, String>;

    /// Check a plain-text password against a stored hash.
    ///
    /// An unparseable stored hash counts as a mismatch.
    fn verify(&self, password: &str, stored_hash: &str) -> bool;
}
