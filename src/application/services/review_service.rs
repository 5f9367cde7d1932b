//! Review collection operations.

use std::sync::Arc;

use crate::domain::entities::{NewReview, Review};
use crate::domain::repositories::ReviewRepository;
use crate::error::AppError;

/// Service for the review collection.
pub struct ReviewService {
    reviews: Arc<dyn ReviewRepository>,
}

impl ReviewService {
    /// Creates a new review service.
    pub fn new(reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { reviews }
    }

    /// Posts a review on behalf of the authenticated identity.
    ///
    /// The author is always the claim's email; clients cannot write reviews
    /// under someone else's identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn post(
        &self,
        author_email: &str,
        name: String,
        details: String,
        rating: f64,
    ) -> Result<Review, AppError> {
        self.reviews
            .create(NewReview {
                author_email: author_email.to_string(),
                name,
                details,
                rating,
            })
            .await
    }

    /// Lists all reviews.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list(&self) -> Result<Vec<Review>, AppError> {
        self.reviews.list().await
    }
}
