//! Handler for bearer token issuance.

use axum::{extract::State, Json};
use validator::Validate;

use crate::api::dto::token::{IssueTokenRequest, TokenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Issues a signed bearer token for an identity claim.
///
/// # Endpoint
///
/// `POST /jwt`
///
/// The route is public: holding a token proves only that this endpoint
/// issued a claim for the email, never what the identity may do. Roles are
/// re-checked against the store on every gated request.
///
/// # Errors
///
/// Returns 400 Bad Request if the email is malformed.
pub async fn issue_token_handler(
    State(state): State<AppState>,
    Json(payload): Json<IssueTokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    payload.validate()?;

    let token = state.token_service.issue(&payload.email)?;

    Ok(Json(TokenResponse { token }))
}
