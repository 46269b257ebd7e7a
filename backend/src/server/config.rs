//! HTTP server configuration object.

use std::net::SocketAddr;
use std::path::PathBuf;

use towntalk::domain::TraversalLimits;
use towntalk::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) limits: TraversalLimits,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) seed_file: Option<PathBuf>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, limits: TraversalLimits) -> Self {
        Self {
            bind_addr,
            limits,
            db_pool: None,
            seed_file: None,
        }
    }

    /// Attach a database pool; without one the in-memory adapters are used.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Seed document applied to the chosen adapters before binding.
    #[must_use]
    pub fn with_seed_file(mut self, seed_file: Option<PathBuf>) -> Self {
        self.seed_file = seed_file;
        self
    }
}
