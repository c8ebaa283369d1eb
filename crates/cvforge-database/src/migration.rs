//! Embedded schema migrations.

use sqlx::PgPool;
use tracing::info;

use cvforge_core::error::{AppError, ErrorKind};

/// Apply any migrations not yet recorded in `_sqlx_migrations`.
///
/// The SQL files under `migrations/` are compiled into the binary, so
/// deployment needs no separate migration artifact.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to run migrations", e))?;

    info!("Schema is up to date");
    Ok(())
}
