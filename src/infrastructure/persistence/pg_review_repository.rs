//! PostgreSQL implementation of the review repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewReview, Review};
use crate::domain::repositories::ReviewRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: i64,
    author_email: String,
    name: String,
    details: String,
    rating: f64,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review {
            id: row.id,
            author_email: row.author_email,
            name: row.name,
            details: row.details,
            rating: row.rating,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for reviews.
pub struct PgReviewRepository {
    pool: Arc<PgPool>,
}

impl PgReviewRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn create(&self, review: NewReview) -> Result<Review, AppError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            INSERT INTO reviews (author_email, name, details, rating)
            VALUES ($1, $2, $3, $4)
            RETURNING id, author_email, name, details, rating, created_at
            "#,
        )
        .bind(&review.author_email)
        .bind(&review.name)
        .bind(&review.details)
        .bind(review.rating)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Review>, AppError> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, author_email, name, details, rating, created_at
            FROM reviews
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Review::from).collect())
    }
}
