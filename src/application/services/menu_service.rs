//! Menu collection operations.

use std::sync::Arc;

use crate::domain::entities::{MenuItem, NewMenuItem};
use crate::domain::repositories::MenuRepository;
use crate::error::AppError;

/// Service for the menu collection.
///
/// Reads are public; writes are restricted to admins by the route table, so
/// nothing here re-checks roles.
pub struct MenuService {
    menu: Arc<dyn MenuRepository>,
}

impl MenuService {
    /// Creates a new menu service.
    pub fn new(menu: Arc<dyn MenuRepository>) -> Self {
        Self { menu }
    }

    /// Adds a menu item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn add(&self, item: NewMenuItem) -> Result<MenuItem, AppError> {
        let item = self.menu.create(item).await?;
        tracing::info!(id = item.id, name = %item.name, "Menu item added");
        Ok(item)
    }

    /// Lists the full menu.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list(&self) -> Result<Vec<MenuItem>, AppError> {
        self.menu.list().await
    }

    /// Removes a menu item by id. Returns `false` on a miss.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn remove(&self, id: i64) -> Result<bool, AppError> {
        self.menu.delete(id).await
    }
}
