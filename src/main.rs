//! album-manager - album collection web manager
//!
//! Serves a small HTML UI for listing, creating, updating and deleting
//! albums, backed by a single SQLite table.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use album_manager::config::{Args, Config};
use album_manager::repository::AlbumRepository;
use album_manager::storage::SqliteAlbumStorage;
use album_manager::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Build identification first, before any database delays
    info!(
        "Starting album-manager v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let config = Config::resolve(&args).context("Failed to resolve configuration")?;
    info!("Database path: {}", config.database.display());

    let pool = album_manager::db::init_database(&config.database).await?;

    // Composition happens here, once: storage behind the repository,
    // repository behind the handlers
    let storage = Arc::new(SqliteAlbumStorage::new(pool));
    let state = AppState::new(AlbumRepository::new(storage));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    info!(
        "album-manager listening on http://127.0.0.1:{}",
        config.port
    );
    info!("Album list: http://127.0.0.1:{}/album", config.port);
    info!("Health check: http://127.0.0.1:{}/health", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
