mod common;

use axum::http::StatusCode;
use bistro_gateway::domain::repositories::MenuRepository;
use serde_json::json;

fn paella() -> serde_json::Value {
    json!({
        "name": "Paella",
        "recipe": "Rice, saffron, seafood",
        "image": "paella.png",
        "category": "mains",
        "price": 14.5
    })
}

#[tokio::test]
async fn test_menu_read_is_public() {
    let app = common::create_test_app();

    let response = app.server.get("/menu").await;

    response.assert_status_ok();
    assert!(response.json::<serde_json::Value>().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_menu_write_follows_current_role() {
    let app = common::create_test_app();
    common::seed_user(&app, "alice@example.com").await;
    let token = common::token_for("alice@example.com");

    // Regular user: denied, store untouched.
    let response = app
        .server
        .post("/menu")
        .authorization_bearer(&token)
        .json(&paella())
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
    assert!(app.menu.list().await.unwrap().is_empty());

    // Promote directly in the store. The token is unchanged and still
    // valid; only the stored role differs.
    common::promote_to_admin(&app, "alice@example.com").await;

    let response = app
        .server
        .post("/menu")
        .authorization_bearer(&token)
        .json(&paella())
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["name"], "Paella");
    assert_eq!(app.menu.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_menu_delete_is_admin_gated() {
    let app = common::create_test_app();
    common::seed_user(&app, "admin@example.com").await;
    common::promote_to_admin(&app, "admin@example.com").await;
    let admin = common::token_for("admin@example.com");

    let created = app
        .server
        .post("/menu")
        .authorization_bearer(&admin)
        .json(&paella())
        .await;
    created.assert_status(StatusCode::CREATED);
    let id = created.json::<serde_json::Value>()["id"].as_i64().unwrap();

    // Unauthenticated delete is refused outright.
    app.server
        .delete(&format!("/menu/{id}"))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    app.server
        .delete(&format!("/menu/{id}"))
        .authorization_bearer(&admin)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    assert!(app.menu.list().await.unwrap().is_empty());

    app.server
        .delete(&format!("/menu/{id}"))
        .authorization_bearer(&admin)
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_menu_create_validates_payload() {
    let app = common::create_test_app();
    common::seed_user(&app, "admin@example.com").await;
    common::promote_to_admin(&app, "admin@example.com").await;
    let admin = common::token_for("admin@example.com");

    let mut bad = paella();
    bad["price"] = json!(-1.0);

    let response = app
        .server
        .post("/menu")
        .authorization_bearer(&admin)
        .json(&bad)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(app.menu.list().await.unwrap().is_empty());
}
