//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.
//! Handlers stay thin: access decisions live in the middleware and the
//! services, and every gate has already passed by the time a handler runs.

pub mod carts;
pub mod health;
pub mod menu;
pub mod reviews;
pub mod tokens;
pub mod users;

pub use carts::{add_cart_entry_handler, list_cart_handler, remove_cart_entry_handler};
pub use health::{health_handler, root_handler};
pub use menu::{create_menu_item_handler, delete_menu_item_handler, list_menu_handler};
pub use reviews::{create_review_handler, list_reviews_handler};
pub use tokens::issue_token_handler;
pub use users::{
    admin_status_handler, delete_user_handler, list_users_handler, register_user_handler,
    user_lookup_handler,
};
