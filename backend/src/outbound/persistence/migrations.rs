//! Embedded schema migrations.
//!
//! `diesel_migrations` only drives synchronous connections, so the runner
//! opens a dedicated `PgConnection` on the blocking thread pool.

use diesel::pg::PgConnection;
use diesel::Connection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failures raised while applying migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("failed to connect for migrations: {0}")]
    Connect(String),
    #[error("failed to apply migrations: {0}")]
    Apply(String),
    #[error("migration task did not complete: {0}")]
    Join(String),
}

/// Apply pending migrations, returning how many ran.
pub async fn run_pending_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || {
        let mut conn =
            PgConnection::establish(&url).map_err(|err| MigrationError::Connect(err.to_string()))?;
        conn.run_pending_migrations(MIGRATIONS)
            .map(|versions| versions.len())
            .map_err(|err| MigrationError::Apply(err.to_string()))
    })
    .await
    .map_err(|err| MigrationError::Join(err.to_string()))??;
    info!(applied, "database migrations applied");
    Ok(applied)
}
