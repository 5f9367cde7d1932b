//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using Bearer tokens from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract token from the `Authorization` header
/// 2. Verify signature and expiry via the token service
/// 3. Attach the decoded claims to request extensions
/// 4. Continue to the next middleware/handler
///
/// This certifies who the caller is, nothing more: role checks live in
/// [`super::admin`] and always go back to the store.
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - the Authorization header is missing or malformed
/// - the token is tampered with or expired
///
/// Both cases produce the same response body; only the logs differ.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let claims = st.token_service.verify(&token)?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
