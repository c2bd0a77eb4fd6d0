//! Account management service.
//!
//! Orchestrates create, login, update and delete against a
//! [`UserRepository`]. Passwords never touch the repository in plain text:
//! they are hashed on write and verified on login through a
//! [`CredentialHasher`].

use chrono::Utc;

use orglead_types::error::{AccountError, RepositoryError};
use orglead_types::user::{CreateAccountRequest, LoginRequest, NewUser, User, UserId};

use crate::repository::user::UserRepository;
use crate::service::hash::CredentialHasher;

/// Service orchestrating the account lifecycle.
///
/// Generic over repository and hasher traits to maintain clean
/// architecture -- orglead-core never depends on orglead-infra.
pub struct AccountService<R: UserRepository, H: CredentialHasher> {
    user_repo: R,
    hasher: H,
    /// Verified against when no account has the requested email, so an
    /// unknown email costs the same hashing work as a wrong password.
    decoy_hash: String,
}

impl<R: UserRepository, H: CredentialHasher> AccountService<R, H> {
    pub fn new(user_repo: R, hasher: H) -> Self {
        let decoy_hash = hasher.hash("orglead-decoy").unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to prepare decoy credential");
            String::new()
        });

        Self {
            user_repo,
            hasher,
            decoy_hash,
        }
    }

    /// Create a new account and return it with its assigned id.
    pub async fn create(&self, request: CreateAccountRequest) -> Result<User, AccountError> {
        let password_hash = self
            .hasher
            .hash(&request.password)
            .map_err(AccountError::Persistence)?;

        let new_user = NewUser {
            email: request.email,
            password_hash,
            first_name: request.first_name,
            last_name: request.last_name,
            created_at: Utc::now(),
        };

        let user = self
            .user_repo
            .create(&new_user)
            .await
            .map_err(|e| AccountError::Persistence(e.to_string()))?;

        tracing::info!(user_id = %user.id, "account created");
        Ok(user)
    }

    /// Return the first account (lowest id) whose email matches and whose
    /// stored credential verifies against the given password.
    pub async fn login(&self, request: LoginRequest) -> Result<User, AccountError> {
        let candidates = self
            .user_repo
            .find_by_email(&request.email)
            .await
            .map_err(|e| AccountError::Persistence(e.to_string()))?;

        if candidates.is_empty() {
            self.hasher.verify(&request.password, &self.decoy_hash);
            return Err(AccountError::InvalidCredentials);
        }

        let user = candidates
            .into_iter()
            .find(|u| self.hasher.verify(&request.password, &u.password_hash))
            .ok_or(AccountError::InvalidCredentials)?;

        tracing::debug!(user_id = %user.id, "login succeeded");
        Ok(user)
    }

    /// Get an account by id.
    pub async fn get(&self, id: UserId) -> Result<User, AccountError> {
        self.user_repo
            .get_by_id(id)
            .await
            .map_err(|e| AccountError::Persistence(e.to_string()))?
            .ok_or(AccountError::NotFound)
    }

    /// Overwrite all mutable fields of an existing account. Last writer wins.
    pub async fn update(
        &self,
        id: UserId,
        request: CreateAccountRequest,
    ) -> Result<User, AccountError> {
        let mut user = self.get(id).await?;

        user.email = request.email;
        user.password_hash = self
            .hasher
            .hash(&request.password)
            .map_err(AccountError::Persistence)?;
        user.first_name = request.first_name;
        user.last_name = request.last_name;
        user.updated_at = Utc::now();

        let user = self.user_repo.update(&user).await.map_err(|e| match e {
            // Deleted between lookup and write.
            RepositoryError::NotFound => AccountError::NotFound,
            other => AccountError::Persistence(other.to_string()),
        })?;

        tracing::info!(user_id = %user.id, "account updated");
        Ok(user)
    }

    /// Permanently delete an account.
    pub async fn delete(&self, id: UserId) -> Result<(), AccountError> {
        self.get(id).await?;

        self.user_repo.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => AccountError::NotFound,
            other => AccountError::Persistence(other.to_string()),
        })?;

        tracing::info!(user_id = %id, "account deleted");
        Ok(())
    }
}
