//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, the session purge task and the
//! Axum server lifecycle.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::{AppState, SqliteAuthService};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// How often expired sessions are removed.
const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Opens the SQLite pool described by `config` and applies migrations.
///
/// The database file is created when missing and foreign keys are enforced
/// on every connection.
///
/// # Errors
///
/// Returns an error if the URL is invalid, the database cannot be opened,
/// or a migration fails.
pub async fn connect(config: &Config) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_with(options)
        .await
        .context("Failed to open database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    Ok(pool)
}

fn spawn_session_purge(auth_service: Arc<SqliteAuthService>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            if let Err(e) = auth_service.purge_expired_sessions().await {
                tracing::warn!(error = %e, "session purge failed");
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutting down");
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool and migrations
/// - Hourly purge of expired sessions
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect(&config).await?;

    let state = AppState::new(
        Arc::new(pool),
        config.session_secret.clone(),
        chrono::Duration::hours(config.session_ttl_hours),
        config.cookie_secure,
    );

    spawn_session_purge(state.auth_service.clone());

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}
