//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers and middleware.
//!
//! # Available Services
//!
//! - [`services::token_service::TokenService`] - bearer token issue/verify
//! - [`services::registration_service::RegistrationService`] - idempotent sign-up
//! - [`services::user_service::UserService`] - user lookups and role checks
//! - [`services::menu_service::MenuService`] - menu collection
//! - [`services::review_service::ReviewService`] - review collection
//! - [`services::cart_service::CartService`] - owner-scoped cart collection

pub mod services;
