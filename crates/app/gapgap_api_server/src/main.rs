//! GapGap API server binary.
//!
//! Serves the `/auth` and `/chat` endpoints over HTTP.

use clap::Parser;
use gapgap_core::completion::config::CompletionConfig;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "gapgap_api_server", about = "GapGap API server")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3100")]
    bind_addr: String,

    /// PostgreSQL connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/gapgap"
    )]
    database_url: String,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,

    /// API key for the completion provider.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: Option<String>,

    /// Base URL of an OpenAI-compatible API.
    #[arg(long, env = "OPENAI_BASE_URL")]
    openai_base_url: Option<String>,

    /// Skip running embedded migrations on startup.
    #[arg(long, default_value_t = false)]
    skip_migrations: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| {
                    tracing_subscriber::EnvFilter::try_new(
                        "info,gapgap_api=debug,gapgap_core=debug",
                    )
                })?,
        )
        .init();

    let args = Args::parse();

    info!(bind_addr = %args.bind_addr, "starting gapgap_api_server");
    info!(max_connections = args.max_connections, "configuring connection pool");

    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&args.database_url)
        .await?;

    if args.skip_migrations {
        info!("skipping database migrations");
    } else {
        info!("running database migrations");
        gapgap_api::migrate(&pool).await?;
    }

    let config = gapgap_api::config::ApiConfig {
        bind_addr: args.bind_addr,
        completion: CompletionConfig::new(args.openai_api_key, args.openai_base_url),
    };

    if config.completion.api_key.is_none() {
        warn!("OPENAI_API_KEY not set, /chat will answer 500");
    }

    let state = gapgap_api::AppState::new(pool, config.clone());
    let app = gapgap_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
