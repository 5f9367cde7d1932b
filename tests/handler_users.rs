mod common;

use axum::http::StatusCode;
use bistro_gateway::domain::repositories::UserRepository;
use serde_json::json;

#[tokio::test]
async fn test_registration_is_idempotent() {
    let app = common::create_test_app();

    let first = app
        .server
        .post("/users")
        .json(&json!({ "email": "alice@example.com", "name": "Alice" }))
        .await;

    first.assert_status_ok();
    let body = first.json::<serde_json::Value>();
    assert_eq!(body["existing"], false);
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert_eq!(body["user"]["role"], "user");
    let first_sequential_id = body["user"]["sequential_id"].as_i64().unwrap();

    let second = app
        .server
        .post("/users")
        .json(&json!({ "email": "alice@example.com", "name": "Alice Again" }))
        .await;

    second.assert_status_ok();
    let body = second.json::<serde_json::Value>();
    assert_eq!(body["existing"], true);
    assert!(body.get("user").is_none());

    // One record, unchanged sequential id.
    let users = app.users.list().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].sequential_id, first_sequential_id);
}

#[tokio::test]
async fn test_sequential_ids_strictly_increase() {
    let app = common::create_test_app();

    let mut previous = 0;
    for i in 0..5 {
        let response = app
            .server
            .post("/users")
            .json(&json!({ "email": format!("user{i}@example.com") }))
            .await;

        response.assert_status_ok();
        let id = response.json::<serde_json::Value>()["user"]["sequential_id"]
            .as_i64()
            .unwrap();
        assert!(id > previous, "expected {id} > {previous}");
        previous = id;
    }
}

#[tokio::test]
async fn test_registration_ignores_client_supplied_role() {
    let app = common::create_test_app();

    let response = app
        .server
        .post("/users")
        .json(&json!({ "email": "mallory@example.com", "role": "admin" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["user"]["role"], "user");
}

#[tokio::test]
async fn test_list_users_is_admin_gated() {
    let app = common::create_test_app();
    common::seed_user(&app, "alice@example.com").await;
    common::seed_user(&app, "bob@example.com").await;

    // No token at all.
    app.server
        .get("/users")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    // Authenticated, but not an admin.
    let alice = common::token_for("alice@example.com");
    let response = app.server.get("/users").authorization_bearer(&alice).await;
    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "forbidden"
    );

    // Same token after promotion: role is read from the store per request.
    common::promote_to_admin(&app, "alice@example.com").await;
    let response = app.server.get("/users").authorization_bearer(&alice).await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>().as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_lookup_user_is_public() {
    let app = common::create_test_app();
    common::seed_user(&app, "alice@example.com").await;

    let response = app.server.get("/users/alice@example.com").await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["email"],
        "alice@example.com"
    );

    app.server
        .get("/users/ghost@example.com")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_admin_status_requires_self_match() {
    let app = common::create_test_app();
    common::seed_user(&app, "alice@example.com").await;
    let alice = common::token_for("alice@example.com");

    // Own status, initially not an admin.
    let response = app
        .server
        .get("/users/admin/alice@example.com")
        .authorization_bearer(&alice)
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["admin"], false);

    // Someone else's status is off limits regardless of role.
    let response = app
        .server
        .get("/users/admin/bob@example.com")
        .authorization_bearer(&alice)
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    // Promotion shows up on the next self-check with the same token.
    common::promote_to_admin(&app, "alice@example.com").await;
    let response = app
        .server
        .get("/users/admin/alice@example.com")
        .authorization_bearer(&alice)
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["admin"], true);
}

#[tokio::test]
async fn test_delete_user_is_admin_gated() {
    let app = common::create_test_app();
    let alice = common::seed_user(&app, "alice@example.com").await;
    common::seed_user(&app, "admin@example.com").await;
    common::promote_to_admin(&app, "admin@example.com").await;

    let alice_token = common::token_for("alice@example.com");
    let admin_token = common::token_for("admin@example.com");

    // Non-admin cannot delete, and nothing changes.
    app.server
        .delete(&format!("/users/{}", alice.id))
        .authorization_bearer(&alice_token)
        .await
        .assert_status(StatusCode::FORBIDDEN);
    assert_eq!(app.users.list().await.unwrap().len(), 2);

    // Admin can.
    app.server
        .delete(&format!("/users/{}", alice.id))
        .authorization_bearer(&admin_token)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    assert_eq!(app.users.list().await.unwrap().len(), 1);

    // Deleting the same id again is a miss.
    app.server
        .delete(&format!("/users/{}", alice.id))
        .authorization_bearer(&admin_token)
        .await
        .assert_status_not_found();
}
