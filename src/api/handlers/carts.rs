//! Handlers for cart endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::carts::{AddCartEntryRequest, CartListQuery};
use crate::application::services::Claims;
use crate::domain::entities::CartEntry;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the caller's cart entries.
///
/// # Endpoint
///
/// `GET /carts` (authenticated)
///
/// # Scoping
///
/// The result is always scoped to the authenticated identity. A `?email=`
/// query naming anyone else is rejected with 403 instead of being honored;
/// one identity can never read another's cart.
pub async fn list_cart_handler(
    State(state): State<AppState>,
    Query(query): Query<CartListQuery>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<CartEntry>>, AppError> {
    let entries = state
        .cart_service
        .list_for(&claims.sub, query.email.as_deref())
        .await?;

    Ok(Json(entries))
}

/// Adds an entry to the caller's cart.
///
/// # Endpoint
///
/// `POST /carts` (authenticated)
///
/// The owner is taken from the bearer token's claim, not the body.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn add_cart_entry_handler(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<AddCartEntryRequest>,
) -> Result<(StatusCode, Json<CartEntry>), AppError> {
    payload.validate()?;

    let entry = state
        .cart_service
        .add(
            &claims.sub,
            payload.menu_item_id,
            payload.name,
            payload.image,
            payload.price,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Removes an entry from the caller's cart.
///
/// # Endpoint
///
/// `DELETE /carts/{id}` (authenticated)
///
/// # Errors
///
/// Returns 404 Not Found when the entry does not exist or belongs to a
/// different identity; the two cases are indistinguishable on purpose.
pub async fn remove_cart_entry_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<StatusCode, AppError> {
    if !state.cart_service.remove(id, &claims.sub).await? {
        return Err(AppError::not_found(
            "Cart entry not found",
            json!({ "id": id }),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
