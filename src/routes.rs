//! Top-level router configuration composing the gated route tables.
//!
//! # Route Structure
//!
//! - public routes: `/`, `/health`, `/jwt`, registration, lookups, menu reads
//! - authenticated routes: reviews, carts, self-service admin check
//! - admin routes: user administration, menu writes
//!
//! # Middleware
//!
//! Gates are attached with `route_layer`, so they run only on matched
//! routes and short-circuit before any handler. For admin routes the stack
//! is authentication first, then the role check; the role middleware
//! depends on the claims the auth middleware attaches.

use crate::api;
use crate::api::middleware::{admin, auth, tracing};
use crate::state::AppState;
use axum::{middleware, Router};

/// Constructs the application router with all routes and middleware.
///
/// `route_layer` ordering note: layers added later wrap the ones added
/// before, so the auth layer (added last) runs before the admin layer.
pub fn app_router(state: AppState) -> Router {
    let admin_router = api::routes::admin_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), admin::layer))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let protected_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let public_router = api::routes::public_routes();

    Router::new()
        .merge(public_router)
        .merge(protected_router)
        .merge(admin_router)
        .with_state(state)
        .layer(tracing::layer())
}
