//! Repository trait for user identity records.

use crate::domain::entities::{NewUser, Role, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user accounts.
///
/// This is the identity store the authorization layer consults: the admin
/// gate resolves the caller's current role through [`find_by_email`] on every
/// request, and registration relies on the store-level unique constraint on
/// `email` rather than a read-then-insert check.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryUserRepository`] - volatile,
///   for development and tests
///
/// [`find_by_email`]: UserRepository::find_by_email
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Creates a user with role `user` and the next sequential id.
    ///
    /// The insert is atomic with respect to the unique email constraint:
    /// if a record for the email already exists (including one created by a
    /// concurrent request), no row is written and `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn create(&self, new_user: NewUser) -> Result<Option<User>, AppError>;

    /// Lists all users, oldest registration first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Deletes a user by store-native id.
    ///
    /// Returns `false` if no such user existed. The sequential id of a
    /// deleted user is never reassigned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Sets the role for the user with the given email.
    ///
    /// Used by the operator CLI; there is no HTTP route for role changes.
    /// Returns `false` if no such user exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn update_role(&self, email: &str, role: Role) -> Result<bool, AppError>;

    /// Checks store connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
