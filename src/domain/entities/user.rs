//! User entity and role definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access role attached to a user record.
///
/// Stored as lowercase text; unknown values decode to [`Role::User`] so a
/// corrupted row can never grant elevated access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Parses a stored role value, defaulting to `User` for anything unknown.
    pub fn parse(value: &str) -> Self {
        match value {
            "admin" => Self::Admin,
            _ => Self::User,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user account.
///
/// `id` is the store-native identifier; `sequential_id` is the customer-facing
/// number assigned once at registration from a monotonic sequence and never
/// reused.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub photo_url: Option<String>,
    pub sequential_id: i64,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Input data for registering a new user.
///
/// Carries profile fields only; the role always starts as `user` and the
/// sequential id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
    pub photo_url: Option<String>,
}
