//! Embedded schema migrations for the `orders` table.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use orderdesk_core::error::{AppError, ErrorKind};
use orderdesk_core::result::AppResult;

/// Migrations compiled in from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Bring the schema up to date. Already-applied migrations are skipped.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    info!(available = MIGRATOR.iter().count(), "Applying order schema migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Order schema is up to date");
    Ok(())
}
