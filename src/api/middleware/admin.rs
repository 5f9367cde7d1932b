//! Admin role enforcement middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::application::services::Claims;
use crate::{error::AppError, state::AppState};

/// Requires the authenticated identity to currently hold the admin role.
///
/// Must be layered after [`super::auth`]: it reads the claims that layer
/// attached. The role is looked up in the store on every request rather
/// than trusted from the token, so revoking admin takes effect on the
/// next call.
///
/// # Errors
///
/// Returns `403 Forbidden` when the identity is not an admin (including
/// identities with no user record at all). Returns `500` if no claims are
/// attached - that is a route-composition bug, not a request error.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = req.extensions().get::<Claims>().cloned().ok_or_else(|| {
        AppError::internal(
            "Role check ran without an authenticated identity",
            json!({}),
        )
    })?;

    if !st.user_service.is_admin(&claims.sub).await? {
        tracing::debug!(email = %claims.sub, "Admin route denied");
        return Err(AppError::forbidden("Admin privileges required", json!({})));
    }

    Ok(next.run(req).await)
}
