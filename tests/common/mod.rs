#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use bistro_gateway::application::services::{Claims, TokenService};
use bistro_gateway::domain::entities::{NewUser, Role, User};
use bistro_gateway::domain::repositories::UserRepository;
use bistro_gateway::infrastructure::persistence::{
    MemoryCartRepository, MemoryMenuRepository, MemoryReviewRepository, MemoryUserRepository,
};
use bistro_gateway::routes::app_router;
use bistro_gateway::state::AppState;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

pub const TEST_SECRET: &str = "test-signing-secret";

/// Full application stack over in-memory repositories.
///
/// The repository handles are kept alongside the server so tests can seed
/// records and inspect store state directly, the same way an operator would
/// act on the store out of band.
pub struct TestApp {
    pub server: TestServer,
    pub users: Arc<MemoryUserRepository>,
    pub menu: Arc<MemoryMenuRepository>,
    pub reviews: Arc<MemoryReviewRepository>,
    pub carts: Arc<MemoryCartRepository>,
}

pub fn create_test_app() -> TestApp {
    let users = Arc::new(MemoryUserRepository::new());
    let menu = Arc::new(MemoryMenuRepository::new());
    let reviews = Arc::new(MemoryReviewRepository::new());
    let carts = Arc::new(MemoryCartRepository::new());

    let state = AppState::new(
        TokenService::new(TEST_SECRET),
        users.clone(),
        menu.clone(),
        reviews.clone(),
        carts.clone(),
    );

    let server = TestServer::new(app_router(state)).unwrap();

    TestApp {
        server,
        users,
        menu,
        reviews,
        carts,
    }
}

/// Seeds a user record directly in the store (role `user`).
pub async fn seed_user(app: &TestApp, email: &str) -> User {
    app.users
        .create(NewUser {
            email: email.to_string(),
            name: Some("Test User".to_string()),
            photo_url: None,
        })
        .await
        .unwrap()
        .expect("user already seeded")
}

/// Grants the admin role directly in the store.
pub async fn promote_to_admin(app: &TestApp, email: &str) {
    assert!(app.users.update_role(email, Role::Admin).await.unwrap());
}

/// Issues a valid bearer token the way `POST /jwt` would.
pub fn token_for(email: &str) -> String {
    TokenService::new(TEST_SECRET)
        .issue(email)
        .expect("token issuance")
}

/// Issues a token signed with the right secret but already expired.
pub fn expired_token_for(email: &str) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: email.to_string(),
        iat: (now - Duration::days(9)).timestamp(),
        exp: (now - Duration::days(2)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}
