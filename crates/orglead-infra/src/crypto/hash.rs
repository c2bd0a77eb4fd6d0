//! Argon2id password hashing for account credentials.
//!
//! Implements the `CredentialHasher` trait from `orglead-core` using the
//! `argon2` crate (RustCrypto ecosystem). Hashes are PHC strings with a
//! random per-password salt, so two accounts with the same password never
//! share a stored value.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use orglead_core::service::hash::CredentialHasher;

/// Argon2id implementation of `CredentialHasher`.
pub struct Argon2CredentialHasher {
    argon2: Argon2<'static>,
}

impl Argon2CredentialHasher {
    /// Hasher with the OWASP-recommended defaults (19 MiB, 2 passes, 1 lane).
    pub fn new() -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::DEFAULT),
        }
    }

    /// Hasher with explicit cost parameters.
    ///
    /// - `memory_kib`: memory cost in KiB (at least `8 * lanes`)
    /// - `passes`: number of iterations
    /// - `lanes`: degree of parallelism
    pub fn with_params(memory_kib: u32, passes: u32, lanes: u32) -> Result<Self, String> {
        let params = Params::new(memory_kib, passes, lanes, None).map_err(|e| e.to_string())?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl Default for Argon2CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, password: &str) -> Result<String, String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| format!("password hashing failed: {e}"))
    }

    fn verify(&self, password: &str, stored_hash: &str) -> bool {
        match PasswordHash::new(stored_hash) {
            Ok(parsed) => self
                .argon2
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!(error = %e, "stored credential is not a valid PHC string");
                false
            }
        }
    }
}
