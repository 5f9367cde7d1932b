//! Business logic services for the application layer.

pub mod cart_service;
pub mod menu_service;
pub mod registration_service;
pub mod review_service;
pub mod token_service;
pub mod user_service;

pub use cart_service::CartService;
pub use menu_service::MenuService;
pub use registration_service::{RegisterOutcome, RegistrationService};
pub use review_service::ReviewService;
pub use token_service::{Claims, TokenService};
pub use user_service::UserService;
