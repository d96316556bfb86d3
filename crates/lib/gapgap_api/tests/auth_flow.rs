//! Register/login against a real database. Run with `TEST_DATABASE_URL=... cargo test -- --ignored`.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{app, call, db_state, unique_email};

#[tokio::test]
#[ignore = "needs TEST_DATABASE_URL"]
async fn register_twice_conflicts_on_normalized_email() {
    let state = db_state().await;
    let app = app(state);
    let email = unique_email();

    let resp = call(
        &app,
        Method::POST,
        "/auth",
        Some(json!({ "action": "register", "email": email, "password": "p", "name": " Bo " })),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.body["user"]["email"], email.to_lowercase());
    assert_eq!(resp.body["user"]["name"], "Bo");
    assert_eq!(resp.body["user"]["subscription_plan"], "free");
    assert!(resp.body["user"].get("password_hash").is_none());
    assert_eq!(resp.body["token"].as_str().map(str::len), Some(43));

    let resp = call(
        &app,
        Method::POST,
        "/auth",
        Some(json!({ "action": "register", "email": email.to_uppercase(), "password": "q", "name": "Al" })),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CONFLICT);
    assert_eq!(resp.body, json!({ "error": "Email already exists" }));
}

#[tokio::test]
#[ignore = "needs TEST_DATABASE_URL"]
async fn login_is_case_insensitive_on_email_only() {
    let state = db_state().await;
    let app = app(state);
    let email = unique_email();

    let resp = call(
        &app,
        Method::POST,
        "/auth",
        Some(json!({ "action": "register", "email": email, "password": "Secret", "name": "Bo" })),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED);
    let user_id = resp.body["user"]["id"].clone();
    let first_token = resp.body["token"].clone();

    let resp = call(
        &app,
        Method::POST,
        "/auth",
        Some(json!({ "action": "login", "email": email.to_lowercase(), "password": "secret" })),
    )
    .await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.body["error"], "Invalid email or password");

    let resp = call(
        &app,
        Method::POST,
        "/auth",
        Some(json!({ "action": "login", "email": format!("  {} ", email.to_uppercase()), "password": "Secret" })),
    )
    .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["user"]["id"], user_id);
    assert_ne!(resp.body["token"], first_token);
}

#[tokio::test]
#[ignore = "needs TEST_DATABASE_URL"]
async fn login_unknown_email_is_unauthorized() {
    let state = db_state().await;
    let resp = call(
        &app(state),
        Method::POST,
        "/auth",
        Some(json!({ "action": "login", "email": unique_email(), "password": "p" })),
    )
    .await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
}
