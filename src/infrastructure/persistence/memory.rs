//! Volatile in-memory repository implementations.
//!
//! Used when no `DATABASE_URL` is configured (local development) and by the
//! integration tests, which drive the full router without a database. Every
//! record lives in process memory and is gone on restart.
//!
//! Each repository serializes access through a `tokio::sync::Mutex`, so the
//! existence check and insert in [`MemoryUserRepository::create`] are atomic
//! just like the Postgres `ON CONFLICT` insert.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::entities::{
    CartEntry, MenuItem, NewCartEntry, NewMenuItem, NewReview, NewUser, Review, Role, User,
};
use crate::domain::repositories::{
    CartRepository, MenuRepository, ReviewRepository, UserRepository,
};
use crate::error::AppError;

#[derive(Default)]
struct UserTable {
    rows: Vec<User>,
    next_id: i64,
    next_sequential_id: i64,
}

/// In-memory user store.
#[derive(Default)]
pub struct MemoryUserRepository {
    table: Mutex<UserTable>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let table = self.table.lock().await;
        Ok(table.rows.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<Option<User>, AppError> {
        let mut table = self.table.lock().await;

        if table.rows.iter().any(|u| u.email == new_user.email) {
            return Ok(None);
        }

        table.next_id += 1;
        table.next_sequential_id += 1;
        let user = User {
            id: table.next_id,
            email: new_user.email,
            name: new_user.name,
            photo_url: new_user.photo_url,
            sequential_id: table.next_sequential_id,
            role: Role::User,
            created_at: Utc::now(),
        };
        table.rows.push(user.clone());

        Ok(Some(user))
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let table = self.table.lock().await;
        Ok(table.rows.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut table = self.table.lock().await;
        let before = table.rows.len();
        // The sequential counter is untouched, so the id is never reused.
        table.rows.retain(|u| u.id != id);
        Ok(table.rows.len() < before)
    }

    async fn update_role(&self, email: &str, role: Role) -> Result<bool, AppError> {
        let mut table = self.table.lock().await;
        match table.rows.iter_mut().find(|u| u.email == email) {
            Some(user) => {
                user.role = role;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[derive(Default)]
struct MenuTable {
    rows: Vec<MenuItem>,
    next_id: i64,
}

/// In-memory menu store.
#[derive(Default)]
pub struct MemoryMenuRepository {
    table: Mutex<MenuTable>,
}

impl MemoryMenuRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MenuRepository for MemoryMenuRepository {
    async fn create(&self, item: NewMenuItem) -> Result<MenuItem, AppError> {
        let mut table = self.table.lock().await;
        table.next_id += 1;
        let item = MenuItem {
            id: table.next_id,
            name: item.name,
            recipe: item.recipe,
            image: item.image,
            category: item.category,
            price: item.price,
            created_at: Utc::now(),
        };
        table.rows.push(item.clone());
        Ok(item)
    }

    async fn list(&self) -> Result<Vec<MenuItem>, AppError> {
        let table = self.table.lock().await;
        Ok(table.rows.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut table = self.table.lock().await;
        let before = table.rows.len();
        table.rows.retain(|i| i.id != id);
        Ok(table.rows.len() < before)
    }
}

#[derive(Default)]
struct ReviewTable {
    rows: Vec<Review>,
    next_id: i64,
}

/// In-memory review store.
#[derive(Default)]
pub struct MemoryReviewRepository {
    table: Mutex<ReviewTable>,
}

impl MemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewRepository for MemoryReviewRepository {
    async fn create(&self, review: NewReview) -> Result<Review, AppError> {
        let mut table = self.table.lock().await;
        table.next_id += 1;
        let review = Review {
            id: table.next_id,
            author_email: review.author_email,
            name: review.name,
            details: review.details,
            rating: review.rating,
            created_at: Utc::now(),
        };
        table.rows.push(review.clone());
        Ok(review)
    }

    async fn list(&self) -> Result<Vec<Review>, AppError> {
        let table = self.table.lock().await;
        let mut rows = table.rows.clone();
        rows.reverse();
        Ok(rows)
    }
}

#[derive(Default)]
struct CartTable {
    rows: Vec<CartEntry>,
    next_id: i64,
}

/// In-memory cart store.
#[derive(Default)]
pub struct MemoryCartRepository {
    table: Mutex<CartTable>,
}

impl MemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for MemoryCartRepository {
    async fn create(&self, entry: NewCartEntry) -> Result<CartEntry, AppError> {
        let mut table = self.table.lock().await;
        table.next_id += 1;
        let entry = CartEntry {
            id: table.next_id,
            owner_email: entry.owner_email,
            menu_item_id: entry.menu_item_id,
            name: entry.name,
            image: entry.image,
            price: entry.price,
            created_at: Utc::now(),
        };
        table.rows.push(entry.clone());
        Ok(entry)
    }

    async fn list_by_owner(&self, owner_email: &str) -> Result<Vec<CartEntry>, AppError> {
        let table = self.table.lock().await;
        Ok(table
            .rows
            .iter()
            .filter(|e| e.owner_email == owner_email)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: i64, owner_email: &str) -> Result<bool, AppError> {
        let mut table = self.table.lock().await;
        let before = table.rows.len();
        table
            .rows
            .retain(|e| !(e.id == id && e.owner_email == owner_email));
        Ok(table.rows.len() < before)
    }
}
