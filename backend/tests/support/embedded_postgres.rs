//! Embedded PostgreSQL helpers for the Diesel adapter suites.
//!
//! Each test gets its own database cloned from a template that already has
//! the embedded migrations applied. The template name carries a hash of the
//! migrations directory, so a schema change provisions a fresh template.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use diesel::pg::PgConnection;
use diesel::{Connection, RunQueryDsl};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pg_embedded_setup_unpriv::test_support::hash_directory;
use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use uuid::Uuid;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

static TEMPLATE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const TEMPLATE_NAME_PREFIX: &str = "towntalk_template";
const PROVISION_RETRIES: usize = 5;
const PROVISION_RETRY_DELAY: Duration = Duration::from_millis(500);

fn migrations_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations")
}

fn template_database_name() -> Result<String, String> {
    let hash = hash_directory(migrations_dir()).map_err(|err| format!("hash migrations: {err}"))?;
    let short_hash = hash.get(..8).unwrap_or(&hash);
    Ok(format!("{TEMPLATE_NAME_PREFIX}_{short_hash}"))
}

/// Process-wide embedded cluster, started on first use.
pub fn shared_cluster() -> Result<&'static ClusterHandle, String> {
    pg_embedded_setup_unpriv::test_support::shared_cluster_handle()
        .map_err(|err| format!("start embedded cluster: {err:?}"))
}

/// Creates the migrated template once per schema version.
fn ensure_template_database(cluster: &ClusterHandle) -> Result<String, String> {
    let template_name = template_database_name()?;
    let _lock = TEMPLATE_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let exists = cluster
        .database_exists(template_name.as_str())
        .map_err(|err| format!("template check: {err:?}"))?;
    if !exists {
        cluster
            .create_database(template_name.as_str())
            .map_err(|err| format!("create template: {err:?}"))?;
        migrate_schema(&cluster.connection().database_url(&template_name))?;
    }
    Ok(template_name)
}

/// Provisions a temporary database cloned from the migration template.
pub fn provision_template_database(cluster: &ClusterHandle) -> Result<TemporaryDatabase, String> {
    let mut last_error = String::from("create database from template: no attempt made");
    for attempt in 1..=PROVISION_RETRIES {
        let result = ensure_template_database(cluster).and_then(|template| {
            let name = format!("test_{}", Uuid::new_v4());
            cluster
                .temporary_database_from_template(name.as_str(), template.as_str())
                .map_err(|err| format!("create database from template: {err:?}"))
        });
        match result {
            Ok(database) => return Ok(database),
            Err(err) => last_error = format!("attempt {attempt}/{PROVISION_RETRIES}: {err}"),
        }
        if attempt < PROVISION_RETRIES {
            std::thread::sleep(PROVISION_RETRY_DELAY);
        }
    }
    Err(last_error)
}

/// Runs all pending Diesel migrations against `url`.
pub fn migrate_schema(url: &str) -> Result<(), String> {
    let mut conn = PgConnection::establish(url).map_err(|err| format!("connect: {err}"))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| format!("migration: {err:?}"))?;
    Ok(())
}

/// Drops `table` (with dependants) to simulate schema loss.
pub fn drop_table(url: &str, table: &str) -> Result<(), String> {
    let mut conn = PgConnection::establish(url).map_err(|err| format!("connect: {err}"))?;
    diesel::sql_query(format!("DROP TABLE IF EXISTS {table} CASCADE"))
        .execute(&mut conn)
        .map_err(|err| format!("drop {table}: {err}"))?;
    Ok(())
}
