//! Repository trait for menu items.

use crate::domain::entities::{MenuItem, NewMenuItem};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the menu collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMenuRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryMenuRepository`] - volatile
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Persists a new menu item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn create(&self, item: NewMenuItem) -> Result<MenuItem, AppError>;

    /// Lists all menu items, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list(&self) -> Result<Vec<MenuItem>, AppError>;

    /// Deletes a menu item by id. Returns `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
