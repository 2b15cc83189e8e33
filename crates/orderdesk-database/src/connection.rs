//! PostgreSQL pool construction for the `orders` store.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::info;

use orderdesk_core::config::DatabaseConfig;
use orderdesk_core::error::{AppError, ErrorKind};
use orderdesk_core::result::AppResult;

/// Parse `database.url` without touching the network.
///
/// A malformed URL is a configuration problem, not a database outage.
pub fn connect_options(config: &DatabaseConfig) -> AppResult<PgConnectOptions> {
    config
        .url
        .parse::<PgConnectOptions>()
        .map_err(|e| AppError::configuration(format!("Invalid database.url: {e}")))
}

/// Open a pool sized and timed by the `[database]` section.
pub async fn connect(config: &DatabaseConfig) -> AppResult<PgPool> {
    let options = connect_options(config)?;

    // Logged from the parsed options so the password never reaches the logs.
    info!(
        host = options.get_host(),
        port = options.get_port(),
        database = options.get_database().unwrap_or("<default>"),
        max_connections = config.max_connections,
        "Connecting to PostgreSQL"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .connect_with(options)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to connect to database: {e}"),
                e,
            )
        })?;

    info!("Connected to PostgreSQL");
    Ok(pool)
}
