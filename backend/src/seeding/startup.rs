//! Startup seeding orchestration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{FollowRepository, UserRepository};
use crate::domain::{GraphSeedError, GraphSeedOutcome, GraphSeeder, SeedGraph};

/// Bundled demo graph, used when seeding is enabled without a file override.
pub fn default_seed_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("seed-graph.json")
}

/// Errors returned while seeding at startup.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Seed file could not be read.
    #[error("failed to read seed file at {path}: {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Seed parsing, validation or persistence failed.
    #[error("graph seeding error: {0}")]
    Seeding(#[from] GraphSeedError),
}

/// Load the seed file at `path` and apply it through the given repositories.
///
/// Returns `Ok(None)` when no path is given.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use towntalk::outbound::memory::InMemorySocialGraph;
/// use towntalk::seeding::{default_seed_file, seed_graph_on_startup};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let graph = Arc::new(InMemorySocialGraph::new());
/// let seed_file = default_seed_file();
/// let outcome = seed_graph_on_startup(Some(&seed_file), graph.clone(), graph).await?;
/// assert!(outcome.is_some());
/// # Ok(())
/// # }
/// ```
pub async fn seed_graph_on_startup<F, U>(
    path: Option<&Path>,
    follows: Arc<F>,
    users: Arc<U>,
) -> Result<Option<GraphSeedOutcome>, StartupSeedingError>
where
    F: FollowRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    let Some(path) = path else {
        info!(reason = "disabled", "graph seeding skipped");
        return Ok(None);
    };

    let seed = load_seed(path)?;
    let outcome = GraphSeeder::new(follows, users).apply(&seed).await?;
    info!(
        seed_file = %path.display(),
        users = outcome.users,
        follows = outcome.follows,
        "graph seed applied"
    );
    Ok(Some(outcome))
}

fn load_seed(path: &Path) -> Result<SeedGraph, StartupSeedingError> {
    let read_error = |source| StartupSeedingError::SeedRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "seed path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir
        .read_to_string(Path::new(file_name))
        .map_err(read_error)?;
    Ok(SeedGraph::from_json(&contents)?)
}
