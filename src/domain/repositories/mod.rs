//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - user identity records and roles
//! - [`MenuRepository`] - menu item CRUD
//! - [`ReviewRepository`] - append-only reviews
//! - [`CartRepository`] - owner-scoped cart entries

pub mod cart_repository;
pub mod menu_repository;
pub mod review_repository;
pub mod user_repository;

pub use cart_repository::CartRepository;
pub use menu_repository::MenuRepository;
pub use review_repository::ReviewRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use cart_repository::MockCartRepository;
#[cfg(test)]
pub use menu_repository::MockMenuRepository;
#[cfg(test)]
pub use review_repository::MockReviewRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
