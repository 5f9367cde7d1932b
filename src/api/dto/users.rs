//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::User;

/// Request to register a user account.
///
/// Carries profile fields only. There is deliberately no role field: every
/// account starts as a regular user.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(max = 200))]
    pub name: Option<String>,

    pub photo_url: Option<String>,
}

/// Registration outcome.
///
/// `existing` distinguishes the idempotent repeat from a fresh creation;
/// both are successful responses.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub existing: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Response for the self-service admin check.
#[derive(Debug, Serialize)]
pub struct AdminStatusResponse {
    pub admin: bool,
}
