//! Handlers for menu endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::menu::CreateMenuItemRequest;
use crate::domain::entities::{MenuItem, NewMenuItem};
use crate::error::AppError;
use crate::state::AppState;

/// Adds a dish to the menu.
///
/// # Endpoint
///
/// `POST /menu` (admin)
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn create_menu_item_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateMenuItemRequest>,
) -> Result<(StatusCode, Json<MenuItem>), AppError> {
    payload.validate()?;

    let item = state
        .menu_service
        .add(NewMenuItem {
            name: payload.name,
            recipe: payload.recipe,
            image: payload.image,
            category: payload.category,
            price: payload.price,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Lists the full menu.
///
/// # Endpoint
///
/// `GET /menu` (public)
pub async fn list_menu_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuItem>>, AppError> {
    Ok(Json(state.menu_service.list().await?))
}

/// Removes a dish from the menu.
///
/// # Endpoint
///
/// `DELETE /menu/{id}` (admin)
///
/// # Errors
///
/// Returns 404 Not Found if the item does not exist.
pub async fn delete_menu_item_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if !state.menu_service.remove(id).await? {
        return Err(AppError::not_found(
            "Menu item not found",
            json!({ "id": id }),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
