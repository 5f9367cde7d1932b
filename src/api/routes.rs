//! API route tables, grouped by required gate.
//!
//! Three tables: public, authenticated, and admin. The gates themselves are
//! layered on in [`crate::routes::app_router`]; keeping the tables separate
//! makes the access policy for every endpoint visible in one place.

use crate::api::handlers::{
    add_cart_entry_handler, admin_status_handler, create_menu_item_handler,
    create_review_handler, delete_menu_item_handler, delete_user_handler, health_handler,
    issue_token_handler, list_cart_handler, list_menu_handler, list_reviews_handler,
    list_users_handler, register_user_handler, remove_cart_entry_handler, root_handler,
    user_lookup_handler,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

/// Routes that require no credentials.
///
/// # Endpoints
///
/// - `GET  /`               - liveness greeting
/// - `GET  /health`         - component health checks
/// - `POST /jwt`            - issue a bearer token for an identity claim
/// - `POST /users`          - idempotent registration
/// - `GET  /users/{email}`  - single user lookup
/// - `GET  /menu`           - full menu listing
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/jwt", post(issue_token_handler))
        .route("/users", post(register_user_handler))
        .route("/users/{email}", get(user_lookup_handler))
        .route("/menu", get(list_menu_handler))
}

/// Routes that require a valid bearer token.
///
/// # Endpoints
///
/// - `GET    /users/admin/{email}` - self-service admin check
/// - `GET    /reviews`             - list reviews
/// - `POST   /reviews`             - post a review as the caller
/// - `GET    /carts`               - list the caller's cart
/// - `POST   /carts`               - add to the caller's cart
/// - `DELETE /carts/{id}`          - remove from the caller's cart
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/users/admin/{email}", get(admin_status_handler))
        .route(
            "/reviews",
            get(list_reviews_handler).post(create_review_handler),
        )
        .route("/carts", get(list_cart_handler).post(add_cart_entry_handler))
        .route("/carts/{id}", delete(remove_cart_entry_handler))
}

/// Routes that additionally require the admin role.
///
/// # Endpoints
///
/// - `GET    /users`         - list all user records
/// - `DELETE /users/{email}` - delete a user (the value is the numeric
///   store id; the segment name is shared with the public lookup because
///   both live at the same path position in the route tree)
/// - `POST   /menu`          - add a menu item
/// - `DELETE /menu/{id}`     - remove a menu item
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler))
        .route("/users/{email}", delete(delete_user_handler))
        .route("/menu", post(create_menu_item_handler))
        .route("/menu/{id}", delete(delete_menu_item_handler))
}
