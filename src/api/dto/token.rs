//! DTOs for the token issuance endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for a signed bearer token.
///
/// The email is the identity claim that ends up in the token subject.
#[derive(Debug, Deserialize, Validate)]
pub struct IssueTokenRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

/// Response carrying the signed token.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
