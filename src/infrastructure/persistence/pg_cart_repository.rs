//! PostgreSQL implementation of the cart repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{CartEntry, NewCartEntry};
use crate::domain::repositories::CartRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct CartEntryRow {
    id: i64,
    owner_email: String,
    menu_item_id: Option<i64>,
    name: String,
    image: String,
    price: f64,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<CartEntryRow> for CartEntry {
    fn from(row: CartEntryRow) -> Self {
        CartEntry {
            id: row.id,
            owner_email: row.owner_email,
            menu_item_id: row.menu_item_id,
            name: row.name,
            image: row.image,
            price: row.price,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for cart entries.
///
/// The owner email is part of every read and delete predicate; there is no
/// unscoped accessor.
pub struct PgCartRepository {
    pool: Arc<PgPool>,
}

impl PgCartRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for PgCartRepository {
    async fn create(&self, entry: NewCartEntry) -> Result<CartEntry, AppError> {
        let row = sqlx::query_as::<_, CartEntryRow>(
            r#"
            INSERT INTO cart_entries (owner_email, menu_item_id, name, image, price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, owner_email, menu_item_id, name, image, price, created_at
            "#,
        )
        .bind(&entry.owner_email)
        .bind(entry.menu_item_id)
        .bind(&entry.name)
        .bind(&entry.image)
        .bind(entry.price)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_by_owner(&self, owner_email: &str) -> Result<Vec<CartEntry>, AppError> {
        let rows = sqlx::query_as::<_, CartEntryRow>(
            r#"
            SELECT id, owner_email, menu_item_id, name, image, price, created_at
            FROM cart_entries
            WHERE owner_email = $1
            ORDER BY id
            "#,
        )
        .bind(owner_email)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(CartEntry::from).collect())
    }

    async fn delete(&self, id: i64, owner_email: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cart_entries WHERE id = $1 AND owner_email = $2")
            .bind(id)
            .bind(owner_email)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
