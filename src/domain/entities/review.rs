//! Customer review entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A customer review.
///
/// Reviews are append-only: the core defines create and read, no update or
/// delete. `author_email` always comes from the authenticated identity.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub id: i64,
    pub author_email: String,
    pub name: String,
    pub details: String,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

/// Input data for posting a review.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub author_email: String,
    pub name: String,
    pub details: String,
    pub rating: f64,
}
