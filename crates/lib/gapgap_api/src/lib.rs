//! # gapgap_api
//!
//! HTTP API library for GapGap: the `/auth` and `/chat` endpoints.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method};
use axum::routing::{get, post};
use gapgap_core::completion::CompletionProvider;
use gapgap_core::completion::openai::OpenAiProvider;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};
use crate::handlers::{auth, chat};

/// Route paths.
pub mod routes {
    pub const AUTH: &str = "/auth";
    pub const CHAT: &str = "/chat";
}

/// How long browsers may cache a preflight response.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(86400);

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// API configuration.
    pub config: ApiConfig,
    /// Completion provider; `None` when no API key is configured.
    pub completion: Option<Arc<dyn CompletionProvider>>,
}

impl AppState {
    /// Build state, wiring an OpenAI provider when the config carries a key.
    pub fn new(pool: PgPool, config: ApiConfig) -> Self {
        let completion = OpenAiProvider::from_config(&config.completion)
            .ok()
            .map(|p| Arc::new(p) as Arc<dyn CompletionProvider>);
        Self {
            pool,
            config,
            completion,
        }
    }

    /// Replace the completion provider.
    pub fn with_completion(mut self, provider: Arc<dyn CompletionProvider>) -> Self {
        self.completion = Some(provider);
        self
    }

    /// The configured completion provider, or a config error.
    pub fn completion(&self) -> AppResult<Arc<dyn CompletionProvider>> {
        self.completion
            .clone()
            .ok_or_else(|| AppError::Config("OpenAI API key not configured".into()))
    }
}

/// Run embedded database migrations.
///
/// Delegates to `gapgap_core::migrate::migrate()` which owns the migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    gapgap_core::migrate::migrate(pool).await
}

/// CORS policy for one endpoint. Also answers every `OPTIONS` preflight.
fn cors(methods: Vec<Method>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(methods)
        .allow_headers([CONTENT_TYPE, HeaderName::from_static("x-auth-token")])
        .max_age(PREFLIGHT_MAX_AGE)
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route(
            routes::AUTH,
            post(auth::auth_handler).fallback(auth::method_not_allowed),
        )
        .layer(cors(vec![Method::POST, Method::OPTIONS]));

    let chat_routes = Router::new()
        .route(
            routes::CHAT,
            get(chat::list_handler)
                .post(chat::post_handler)
                .fallback(chat::method_not_allowed),
        )
        .layer(cors(vec![Method::GET, Method::POST, Method::OPTIONS]));

    Router::new()
        .merge(auth_routes)
        .merge(chat_routes)
        .with_state(state)
}
