//! Bearer token issuance and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

/// Token lifetime. Expiry is embedded in the claim and checked on every
/// verification, so a token cannot outlive this window.
pub const TOKEN_TTL_DAYS: i64 = 7;

/// Decoded bearer token payload.
///
/// `sub` is the identity's email. The claim only certifies who the caller
/// is; the current role is always resolved against the store afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Service for signing and verifying identity tokens (HS256).
///
/// The signing secret is deployment configuration; an empty secret is
/// rejected when the config is validated, so construction here cannot fail.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    /// Creates a token service from the configured signing secret.
    pub fn new(signing_secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(signing_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(signing_secret.as_bytes()),
        }
    }

    /// Issues a signed token for `email`, valid for [`TOKEN_TTL_DAYS`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails; with an HS256 key
    /// this does not happen for well-formed claims.
    pub fn issue(&self, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Token signing failed");
            AppError::internal("Token signing failed", json!({}))
        })
    }

    /// Verifies signature and expiry, returning the embedded claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for malformed, tampered, or
    /// expired tokens. The response body is identical to the missing-token
    /// case; the reason is only logged.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                AppError::unauthorized(
                    "Unauthorized",
                    json!({"reason": "Invalid or expired token"}),
                )
            })
    }
}
