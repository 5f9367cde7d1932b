//! Handlers for review endpoints.

use axum::{extract::State, http::StatusCode, Extension, Json};
use validator::Validate;

use crate::api::dto::reviews::CreateReviewRequest;
use crate::application::services::Claims;
use crate::domain::entities::Review;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all reviews, newest first.
///
/// # Endpoint
///
/// `GET /reviews` (authenticated)
pub async fn list_reviews_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Review>>, AppError> {
    Ok(Json(state.review_service.list().await?))
}

/// Posts a review as the authenticated identity.
///
/// # Endpoint
///
/// `POST /reviews` (authenticated)
///
/// The author is taken from the bearer token's claim, not the body.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn create_review_handler(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    payload.validate()?;

    let review = state
        .review_service
        .post(&claims.sub, payload.name, payload.details, payload.rating)
        .await?;

    Ok((StatusCode::CREATED, Json(review)))
}
