//! PostgreSQL implementation of the menu repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{MenuItem, NewMenuItem};
use crate::domain::repositories::MenuRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct MenuItemRow {
    id: i64,
    name: String,
    recipe: String,
    image: String,
    category: String,
    price: f64,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: row.id,
            name: row.name,
            recipe: row.recipe,
            image: row.image,
            category: row.category,
            price: row.price,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for menu items.
pub struct PgMenuRepository {
    pool: Arc<PgPool>,
}

impl PgMenuRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn create(&self, item: NewMenuItem) -> Result<MenuItem, AppError> {
        let row = sqlx::query_as::<_, MenuItemRow>(
            r#"
            INSERT INTO menu_items (name, recipe, image, category, price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, recipe, image, category, price, created_at
            "#,
        )
        .bind(&item.name)
        .bind(&item.recipe)
        .bind(&item.image)
        .bind(&item.category)
        .bind(item.price)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<MenuItem>, AppError> {
        let rows = sqlx::query_as::<_, MenuItemRow>(
            r#"
            SELECT id, name, recipe, image, category, price, created_at
            FROM menu_items
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
