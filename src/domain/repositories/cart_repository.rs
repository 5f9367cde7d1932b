//! Repository trait for cart entries.

use crate::domain::entities::{CartEntry, NewCartEntry};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the cart collection.
///
/// All reads and deletes are owner-scoped: the owning email is part of the
/// query, so one identity's entries are never visible to another.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Persists a new cart entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn create(&self, entry: NewCartEntry) -> Result<CartEntry, AppError>;

    /// Lists entries owned by `owner_email`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list_by_owner(&self, owner_email: &str) -> Result<Vec<CartEntry>, AppError>;

    /// Deletes the entry with the given id if it belongs to `owner_email`.
    ///
    /// Returns `false` when the entry does not exist or is owned by someone
    /// else; callers cannot distinguish the two.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn delete(&self, id: i64, owner_email: &str) -> Result<bool, AppError>;
}
