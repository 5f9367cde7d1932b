//! Handlers for user registration, lookup, and administration.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::users::{AdminStatusResponse, RegisterRequest, RegisterResponse};
use crate::application::services::{Claims, RegisterOutcome};
use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a user account, idempotently.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Behavior
///
/// Registration is keyed on email. The first call creates the record with
/// role `user` and the next sequential id; any repeat (including one racing
/// a concurrent registration) changes nothing and responds with
/// `existing: true`. Repeats are **not** errors.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn register_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    payload.validate()?;

    let outcome = state
        .registration_service
        .register(NewUser {
            email: payload.email,
            name: payload.name,
            photo_url: payload.photo_url,
        })
        .await?;

    let response = match outcome {
        RegisterOutcome::Created(user) => RegisterResponse {
            existing: false,
            user: Some(user),
        },
        RegisterOutcome::AlreadyRegistered => RegisterResponse {
            existing: true,
            user: None,
        },
    };

    Ok(Json(response))
}

/// Lists all user records.
///
/// # Endpoint
///
/// `GET /users` (admin)
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(state.user_service.list().await?))
}

/// Looks up a single user by email.
///
/// # Endpoint
///
/// `GET /users/{email}` (public)
///
/// # Errors
///
/// Returns 404 Not Found for an unknown email.
pub async fn user_lookup_handler(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<User>, AppError> {
    state
        .user_service
        .find_by_email(&email)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("User not found", json!({ "email": email })))
}

/// Deletes a user by store-native id.
///
/// # Endpoint
///
/// `DELETE /users/{id}` (admin)
///
/// The deleted user's sequential id is never reassigned.
///
/// # Errors
///
/// Returns 404 Not Found if no such user exists.
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if !state.user_service.delete(id).await? {
        return Err(AppError::not_found("User not found", json!({ "id": id })));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Reports whether the caller's own account holds the admin role.
///
/// # Endpoint
///
/// `GET /users/admin/{email}` (authenticated)
///
/// # Behavior
///
/// Self-service only: the path email must equal the authenticated claim's
/// email, regardless of role. An account with no stored record reads as
/// `admin: false`.
///
/// # Errors
///
/// Returns 403 Forbidden when asking about any other identity.
pub async fn admin_status_handler(
    Path(email): Path<String>,
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<AdminStatusResponse>, AppError> {
    if email != claims.sub {
        return Err(AppError::forbidden(
            "Admin status is only visible to the account owner",
            json!({}),
        ));
    }

    let admin = state.user_service.is_admin(&email).await?;

    Ok(Json(AdminStatusResponse { admin }))
}
