//! API Server Entry Point
//!
//! Wires configuration, database, and the accounts router together and
//! serves. Startup failures use `anyhow`; request-level errors are
//! `kernel::error::AppError` all the way out.

use accounts::{AccountsConfig, PgAccountRepository, accounts_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let pool = connect_database().await?;
    let repo = PgAccountRepository::new(pool);
    let config = accounts_config()?;

    let app = Router::new()
        .merge(accounts_router(repo, config))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,accounts=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn connect_database() -> anyhow::Result<PgPool> {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;
    tracing::info!("Migrations completed");

    Ok(pool)
}

/// Debug builds run with a random per-process token secret; release builds
/// require `TOKEN_SECRET` (base64, 32 bytes) from the environment.
fn accounts_config() -> anyhow::Result<AccountsConfig> {
    if cfg!(debug_assertions) {
        return Ok(AccountsConfig::development());
    }

    let secret_b64 = env::var("TOKEN_SECRET").expect("TOKEN_SECRET must be set in production");
    let decoded = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
    anyhow::ensure!(decoded.len() == 32, "TOKEN_SECRET must decode to 32 bytes");

    let mut token_secret = [0u8; 32];
    token_secret.copy_from_slice(&decoded);

    Ok(AccountsConfig {
        token_secret,
        ..AccountsConfig::default()
    })
}

fn cors_layer() -> CorsLayer {
    let origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed: Vec<http::HeaderValue> = origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(AllowMethods::list([Method::GET, Method::POST, Method::OPTIONS]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}
