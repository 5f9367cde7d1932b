mod common;

use axum::http::StatusCode;
use bistro_gateway::domain::repositories::CartRepository;
use serde_json::json;

fn cart_entry(name: &str) -> serde_json::Value {
    json!({
        "menu_item_id": 1,
        "name": name,
        "image": "dish.png",
        "price": 9.0
    })
}

#[tokio::test]
async fn test_carts_require_authentication() {
    let app = common::create_test_app();

    app.server
        .get("/carts")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    app.server
        .post("/carts")
        .json(&cart_entry("Paella"))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_cart_entries_are_owner_stamped() {
    let app = common::create_test_app();
    let alice = common::token_for("alice@example.com");

    let response = app
        .server
        .post("/carts")
        .authorization_bearer(&alice)
        .json(&cart_entry("Paella"))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<serde_json::Value>()["owner_email"],
        "alice@example.com"
    );
}

#[tokio::test]
async fn test_cart_list_never_crosses_owners() {
    let app = common::create_test_app();
    let alice = common::token_for("alice@example.com");
    let bob = common::token_for("bob@example.com");

    app.server
        .post("/carts")
        .authorization_bearer(&alice)
        .json(&cart_entry("Paella"))
        .await
        .assert_status(StatusCode::CREATED);
    app.server
        .post("/carts")
        .authorization_bearer(&bob)
        .json(&cart_entry("Gazpacho"))
        .await
        .assert_status(StatusCode::CREATED);

    // Plain list: own entries only.
    let listed = app.server.get("/carts").authorization_bearer(&alice).await;
    listed.assert_status_ok();
    let body = listed.json::<serde_json::Value>();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Paella");

    // Echoing one's own email is accepted.
    let listed = app
        .server
        .get("/carts")
        .add_query_param("email", "alice@example.com")
        .authorization_bearer(&alice)
        .await;
    listed.assert_status_ok();
    assert_eq!(listed.json::<serde_json::Value>().as_array().unwrap().len(), 1);

    // Asking for someone else's cart is refused, not silently rebound.
    let listed = app
        .server
        .get("/carts")
        .add_query_param("email", "bob@example.com")
        .authorization_bearer(&alice)
        .await;
    listed.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_cart_delete_is_owner_scoped() {
    let app = common::create_test_app();
    let alice = common::token_for("alice@example.com");
    let bob = common::token_for("bob@example.com");

    let created = app
        .server
        .post("/carts")
        .authorization_bearer(&alice)
        .json(&cart_entry("Paella"))
        .await;
    let id = created.json::<serde_json::Value>()["id"].as_i64().unwrap();

    // Bob cannot remove Alice's entry; to him it does not exist.
    app.server
        .delete(&format!("/carts/{id}"))
        .authorization_bearer(&bob)
        .await
        .assert_status_not_found();
    assert_eq!(
        app.carts.list_by_owner("alice@example.com").await.unwrap().len(),
        1
    );

    app.server
        .delete(&format!("/carts/{id}"))
        .authorization_bearer(&alice)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    assert!(app
        .carts
        .list_by_owner("alice@example.com")
        .await
        .unwrap()
        .is_empty());
}
