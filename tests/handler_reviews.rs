mod common;

use axum::http::StatusCode;
use bistro_gateway::domain::repositories::ReviewRepository;
use serde_json::json;

#[tokio::test]
async fn test_reviews_require_authentication() {
    let app = common::create_test_app();

    app.server
        .get("/reviews")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    app.server
        .post("/reviews")
        .json(&json!({ "name": "Alice", "details": "Lovely", "rating": 5.0 }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    assert!(app.reviews.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_post_review_stamps_author_from_token() {
    let app = common::create_test_app();
    let token = common::token_for("alice@example.com");

    let response = app
        .server
        .post("/reviews")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Alice", "details": "Great paella", "rating": 4.5 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<serde_json::Value>()["author_email"],
        "alice@example.com"
    );

    let listed = app.server.get("/reviews").authorization_bearer(&token).await;
    listed.assert_status_ok();
    let body = listed.json::<serde_json::Value>();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["author_email"], "alice@example.com");
}

#[tokio::test]
async fn test_review_rating_out_of_bounds() {
    let app = common::create_test_app();
    let token = common::token_for("alice@example.com");

    let response = app
        .server
        .post("/reviews")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Alice", "details": "!!", "rating": 6.0 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(app.reviews.list().await.unwrap().is_empty());
}
