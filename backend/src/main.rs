//! Backend entry-point: loads settings, wires adapters and serves HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use towntalk::inbound::http::health::HealthState;
use towntalk::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use towntalk::settings::AppSettings;

use server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|err| {
        std::io::Error::other(format!("failed to load settings: {err}"))
    })?;

    let mut config = ServerConfig::new(settings.bind_addr(), settings.traversal_limits())
        .with_seed_file(settings.seed_file());
    match settings.database_url() {
        Some(url) => {
            if settings.run_migrations {
                run_pending_migrations(url)
                    .await
                    .map_err(std::io::Error::other)?;
            }
            let pool_config = PoolConfig::new(url).with_max_size(settings.db_max_connections());
            let pool = DbPool::new(pool_config)
                .await
                .map_err(std::io::Error::other)?;
            config = config.with_db_pool(pool);
        }
        None if settings.seed_enabled => {
            info!("no database configured; using seeded in-memory adapters");
        }
        None => warn!(
            "no database configured and seeding disabled; the in-memory graph starts empty \
             (set TOWNTALK_SEED_ENABLED=true to load the demo graph)"
        ),
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config).await?;
    info!(bind_addr = %settings.bind_addr(), "server listening");
    let result = server.await;
    health_state.mark_draining();
    result
}
