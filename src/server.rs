//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, migrations, router assembly, and the Axum server
//! lifecycle. Store handles and the signing key are created exactly once
//! here and shared read-only for the life of the process.

use crate::application::services::TokenService;
use crate::config::Config;
use crate::infrastructure::persistence::{
    MemoryCartRepository, MemoryMenuRepository, MemoryReviewRepository, MemoryUserRepository,
    PgCartRepository, PgMenuRepository, PgReviewRepository, PgUserRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::ServiceExt;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations, or the in-memory store when
///   no database is configured
/// - the token service from the signing secret
/// - the Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let token_service = TokenService::new(&config.token_signing_secret);

    let state = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            let pool = Arc::new(pool);
            AppState::new(
                token_service,
                Arc::new(PgUserRepository::new(pool.clone())),
                Arc::new(PgMenuRepository::new(pool.clone())),
                Arc::new(PgReviewRepository::new(pool.clone())),
                Arc::new(PgCartRepository::new(pool)),
            )
        }
        None => {
            tracing::warn!("No database configured; records will not survive a restart");
            AppState::new(
                token_service,
                Arc::new(MemoryUserRepository::new()),
                Arc::new(MemoryMenuRepository::new()),
                Arc::new(MemoryReviewRepository::new()),
                Arc::new(MemoryCartRepository::new()),
            )
        }
    };

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
