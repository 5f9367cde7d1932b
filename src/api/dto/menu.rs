//! DTOs for menu endpoints.

use serde::Deserialize;
use validator::Validate;

/// Request to add a menu item.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMenuItemRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1))]
    pub recipe: String,

    #[validate(length(min = 1))]
    pub image: String,

    #[validate(length(min = 1, max = 100))]
    pub category: String,

    #[validate(range(min = 0.0))]
    pub price: f64,
}
