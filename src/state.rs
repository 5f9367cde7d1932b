//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::{
    CartService, MenuService, RegistrationService, ReviewService, TokenService, UserService,
};
use crate::domain::repositories::{
    CartRepository, MenuRepository, ReviewRepository, UserRepository,
};

/// Application state: one service per concern, shared across all requests.
///
/// Repository handles are created once at startup and threaded through the
/// services here; nothing opens store connections per request.
#[derive(Clone)]
pub struct AppState {
    pub token_service: Arc<TokenService>,
    pub registration_service: Arc<RegistrationService>,
    pub user_service: Arc<UserService>,
    pub menu_service: Arc<MenuService>,
    pub review_service: Arc<ReviewService>,
    pub cart_service: Arc<CartService>,
}

impl AppState {
    /// Builds the full service graph over the given repository handles.
    pub fn new(
        token_service: TokenService,
        users: Arc<dyn UserRepository>,
        menu: Arc<dyn MenuRepository>,
        reviews: Arc<dyn ReviewRepository>,
        carts: Arc<dyn CartRepository>,
    ) -> Self {
        Self {
            token_service: Arc::new(token_service),
            registration_service: Arc::new(RegistrationService::new(users.clone())),
            user_service: Arc::new(UserService::new(users)),
            menu_service: Arc::new(MenuService::new(menu)),
            review_service: Arc::new(ReviewService::new(reviews)),
            cart_service: Arc::new(CartService::new(carts)),
        }
    }
}
