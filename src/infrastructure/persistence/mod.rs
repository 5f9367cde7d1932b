//! Repository implementations.
//!
//! Concrete implementations of the domain repository traits: SQLx-backed
//! PostgreSQL repositories for deployments, and volatile in-memory
//! repositories for local development and tests.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] / [`MemoryUserRepository`] - user accounts and roles
//! - [`PgMenuRepository`] / [`MemoryMenuRepository`] - menu items
//! - [`PgReviewRepository`] / [`MemoryReviewRepository`] - reviews
//! - [`PgCartRepository`] / [`MemoryCartRepository`] - cart entries

pub mod memory;
pub mod pg_cart_repository;
pub mod pg_menu_repository;
pub mod pg_review_repository;
pub mod pg_user_repository;

pub use memory::{
    MemoryCartRepository, MemoryMenuRepository, MemoryReviewRepository, MemoryUserRepository,
};
pub use pg_cart_repository::PgCartRepository;
pub use pg_menu_repository::PgMenuRepository;
pub use pg_review_repository::PgReviewRepository;
pub use pg_user_repository::PgUserRepository;
