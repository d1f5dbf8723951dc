use std::sync::Arc;

use anyhow::Context;
use axum::serve;
use railway_api::{app, config::Config, state::AppState};
use tracing::{Level, info};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::from_config(&config)?);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    info!("railway api listening on {}", config.bind_addr);

    serve(listener, app(state)).await?;

    Ok(())
}
