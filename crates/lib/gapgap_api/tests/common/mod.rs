//! Shared helpers for router-level tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use gapgap_api::config::ApiConfig;
use gapgap_api::{AppState, router};
use gapgap_core::completion::config::CompletionConfig;
use gapgap_core::completion::{CompletionError, CompletionProvider, CompletionRequest};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

/// Provider that replays a fixed outcome and records every request.
pub struct StubProvider {
    reply: Result<String, String>,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl StubProvider {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(error: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone().map_err(CompletionError::Provider)
    }
}

fn test_config() -> ApiConfig {
    ApiConfig {
        bind_addr: "127.0.0.1:0".into(),
        completion: CompletionConfig::new(None, None),
    }
}

/// State over a pool that never connects. Only for requests rejected before
/// any database access.
pub fn offline_state() -> AppState {
    let url = "postgres://localhost:1/gapgap_offline";
    let pool = PgPoolOptions::new()
        .connect_lazy(url)
        .expect("lazy pool");
    AppState::new(pool, test_config())
}

/// Env var naming the PostgreSQL database used by `#[ignore]`d tests.
pub const TEST_DATABASE_URL: &str = "TEST_DATABASE_URL";

/// Connected, migrated state from `TEST_DATABASE_URL`.
///
/// Database tests are `#[ignore]`d; run them with
/// `TEST_DATABASE_URL=... cargo test -- --ignored`.
pub async fn db_state() -> AppState {
    let url = std::env::var(TEST_DATABASE_URL)
        .unwrap_or_else(|_| panic!("{TEST_DATABASE_URL} must be set for database tests"));
    let pool = PgPool::connect(&url).await.expect("connect to test database");
    gapgap_api::migrate(&pool).await.expect("migrations");
    AppState::new(pool, test_config())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

/// Send one request through the router. Empty bodies come back as `Null`.
pub async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> TestResponse {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("origin", "http://localhost:5173");
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .expect("request");

    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("parse JSON")
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn app(state: AppState) -> Router {
    router(state)
}

/// Unique, mixed-case email for one test run.
pub fn unique_email() -> String {
    format!("User.{}@Example.com", uuid::Uuid::new_v4().simple())
}

pub async fn count_messages(pool: &PgPool, chat_id: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE chat_id = $1::uuid")
        .bind(chat_id)
        .fetch_one(pool)
        .await
        .expect("count messages")
}

pub async fn chat_updated_at(pool: &PgPool, chat_id: &str) -> chrono::DateTime<chrono::Utc> {
    sqlx::query_scalar("SELECT updated_at FROM chats WHERE id = $1::uuid")
        .bind(chat_id)
        .fetch_one(pool)
        .await
        .expect("chat updated_at")
}
