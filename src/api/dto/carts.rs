//! DTOs for cart endpoints.

use serde::Deserialize;
use validator::Validate;

/// Request to add a cart entry.
///
/// No owner field: the entry is always written under the authenticated
/// identity.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCartEntryRequest {
    pub menu_item_id: Option<i64>,

    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1))]
    pub image: String,

    #[validate(range(min = 0.0))]
    pub price: f64,
}

/// Query parameters for listing cart entries.
///
/// The optional email is accepted for client compatibility but must match
/// the authenticated identity.
#[derive(Debug, Deserialize)]
pub struct CartListQuery {
    pub email: Option<String>,
}
