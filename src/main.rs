//! OrderDesk Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use orderdesk_core::AppError;
use orderdesk_core::config::{AppConfig, ConfigSource, DatabaseBackend};
use orderdesk_core::events::EventBus;
use orderdesk_database::{MemoryOrderRepository, OrderRepository, PgOrderRepository};
use sqlx::PgPool;
use orderdesk_service::{FeatureFlagService, OrderLoggingListener, OrderService};

#[tokio::main]
async fn main() {
    let source = ConfigSource::from_env();

    let config = match AppConfig::load(&source) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config, source).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig, source: ConfigSource) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        env = %source.env,
        config_dir = %source.dir.display(),
        "Starting OrderDesk"
    );

    // ── Step 1: Order storage ────────────────────────────────────
    let (order_repo, db_pool) = open_order_store(&config).await?;

    // ── Step 2: Event bus + listeners ────────────────────────────
    let event_bus = Arc::new(EventBus::from_config(&config.events));
    event_bus
        .register(Arc::new(OrderLoggingListener::new()))
        .await;

    // ── Step 3: Services ─────────────────────────────────────────
    let order_service = Arc::new(OrderService::new(
        Arc::clone(&order_repo),
        Arc::clone(&event_bus),
    ));
    let feature_flags = Arc::new(FeatureFlagService::new(
        config.features.clone(),
        source.clone(),
    ));

    // ── Step 4: Shutdown channel + flag refresher ────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let refresher_handle = match config.features.refresh_interval_seconds {
        0 => {
            tracing::info!("Feature flag refresher disabled");
            None
        }
        secs => Some(feature_flags.spawn_refresher(Duration::from_secs(secs), shutdown_rx)),
    };

    // ── Step 5: Build and start HTTP server ──────────────────────
    let addr = config.server.bind_addr();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let app_state = orderdesk_api::AppState::new(
        Arc::new(config),
        order_repo,
        order_service,
        feature_flags,
    );
    let app = orderdesk_api::build_app(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(addr = %addr, "OrderDesk server listening");

    // ── Step 6: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Step 7: Wait for background tasks ────────────────────────
    if let Some(handle) = refresher_handle {
        let _ = tokio::time::timeout(grace, handle).await;
    }
    if let Some(pool) = db_pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }

    tracing::info!("OrderDesk server shut down gracefully");
    Ok(())
}

/// Open the configured order store, running migrations for PostgreSQL.
async fn open_order_store(
    config: &AppConfig,
) -> Result<(Arc<dyn OrderRepository>, Option<PgPool>), AppError> {
    match config.database.backend {
        DatabaseBackend::Memory => {
            tracing::warn!("Using in-memory order store; orders are lost on restart");
            Ok((Arc::new(MemoryOrderRepository::new()), None))
        }
        DatabaseBackend::Postgres => {
            let pool = orderdesk_database::connection::connect(&config.database).await?;

            if config.database.run_migrations {
                orderdesk_database::migration::run_migrations(&pool).await?;
            } else {
                tracing::info!("Skipping database migrations");
            }

            let repo = Arc::new(PgOrderRepository::new(pool.clone()));
            Ok((repo, Some(pool)))
        }
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
