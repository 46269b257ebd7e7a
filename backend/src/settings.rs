//! Application settings loaded via OrthoConfig.
//!
//! Values come from `TOWNTALK_*` environment variables, an optional
//! configuration file and command-line flags, in OrthoConfig's usual
//! precedence order.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{DEFAULT_MAX_VISITED, TraversalLimits};
use crate::seeding::default_seed_file;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Server, persistence and traversal settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TOWNTALK")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL URL. Without one the server runs on in-memory adapters.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
    /// Optional BFS depth horizon; unset means unbounded.
    pub max_traversal_depth: Option<usize>,
    /// Maximum users a single search may visit.
    pub max_traversal_visited: Option<usize>,
    /// Load a seed graph into the configured store before serving.
    #[ortho_config(default = false)]
    pub seed_enabled: bool,
    /// Seed document override; defaults to the bundled demo graph.
    pub seed_file: Option<PathBuf>,
}

impl AppSettings {
    /// Bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or_else(|| {
            DEFAULT_BIND_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8080)))
        })
    }

    /// Database URL with surrounding whitespace removed; blank counts as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Seed document to apply at startup, when seeding is enabled.
    pub fn seed_file(&self) -> Option<PathBuf> {
        self.seed_enabled
            .then(|| self.seed_file.clone().unwrap_or_else(default_seed_file))
    }

    /// Traversal limits handed to the connection finder.
    pub fn traversal_limits(&self) -> TraversalLimits {
        TraversalLimits::new(
            self.max_traversal_depth,
            self.max_traversal_visited.unwrap_or(DEFAULT_MAX_VISITED),
        )
    }
}
