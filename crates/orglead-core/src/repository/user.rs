//! User repository trait definition.

use orglead_types::error::RepositoryError;
use orglead_types::user::{NewUser, User, UserId};

/// Repository trait for account persistence.
///
/// Implementations live in orglead-infra (e.g., SqliteUserRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait UserRepository: Send + Sync {
    /// Insert a new account. Returns the stored record with its assigned id.
    fn create(
        &self,
        user: &NewUser,
    ) -> impl std::future::Future<Output = Result<User, RepositoryError>> + Send;

    /// Get an account by id.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// All accounts registered under `email`, lowest id first.
    ///
    /// Email is not unique, so more than one record may come back.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Vec<User>, RepositoryError>> + Send;

    /// Overwrite every mutable field of an existing account.
    ///
    /// Returns `RepositoryError::NotFound` if no row has `user.id`.
    fn update(
        &self,
        user: &User,
    ) -> impl std::future::Future<Output = Result<User, RepositoryError>> + Send;

    /// Permanently delete an account by id.
    fn delete(
        &self,
        id: UserId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
