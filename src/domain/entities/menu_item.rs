//! Menu item entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A dish on the menu.
///
/// Menu items have no owner; only admins may create or delete them.
#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub recipe: String,
    pub image: String,
    pub category: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

/// Input data for adding a menu item.
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub name: String,
    pub recipe: String,
    pub image: String,
    pub category: String,
    pub price: f64,
}
