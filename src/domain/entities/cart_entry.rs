//! Cart entry entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A menu item placed in a user's cart.
///
/// Entries are scoped to `owner_email`: every list and delete operation
/// filters by the owning identity.
#[derive(Debug, Clone, Serialize)]
pub struct CartEntry {
    pub id: i64,
    pub owner_email: String,
    pub menu_item_id: Option<i64>,
    pub name: String,
    pub image: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

/// Input data for adding a cart entry.
///
/// `owner_email` is stamped from the authenticated claim, never taken from
/// the request body.
#[derive(Debug, Clone)]
pub struct NewCartEntry {
    pub owner_email: String,
    pub menu_item_id: Option<i64>,
    pub name: String,
    pub image: String,
    pub price: f64,
}
