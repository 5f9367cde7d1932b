//! HTTP middleware for request processing and protection.
//!
//! Provides authentication, role enforcement, and observability middleware.
//! The gates compose in a fixed order: [`auth`] first, then [`admin`] for
//! admin-only routes; a denied gate short-circuits before any resource
//! operation runs.

pub mod admin;
pub mod auth;
pub mod tracing;
