//! DTOs for review endpoints.

use serde::Deserialize;
use validator::Validate;

/// Request to post a review.
///
/// There is no author field: authorship comes from the authenticated claim.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1))]
    pub details: String,

    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
}
