use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use chrono::Duration;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};
use models::Store;
use service::auth::TokenService;

const TOKEN_TTL_HOURS: i64 = 10;

fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn load_bind_addr(cfg: &configs::ServerConfig) -> anyhow::Result<SocketAddr> {
    format!("{}:{}", cfg.host, cfg.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", cfg.host, cfg.port))
}

/// Read the token-signing secret. Refusing to start without it beats
/// silently issuing tokens nothing can verify.
fn load_token_secret() -> anyhow::Result<String> {
    std::env::var("ACCESS_TOKEN_SECRET")
        .context("ACCESS_TOKEN_SECRET must be set")
}

/// Public entry: load configuration, connect the store, build the app and
/// run the HTTP server until shutdown.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = configs::AppConfig::load_and_validate()?;
    let secret = load_token_secret()?;
    let tokens = Arc::new(TokenService::new(&secret, Duration::hours(TOKEN_TTL_HOURS)));

    // The store must be reachable before the listener binds.
    let store = Store::connect(&cfg.database).await?;

    let state = ServerState { store, tokens };
    let app: Router = routes::build_router(build_cors(), state);

    let addr = load_bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "carryou backend listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("carryou backend stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
