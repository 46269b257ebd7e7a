//! Startup wiring for graph seeding.

mod startup;

pub use startup::{StartupSeedingError, default_seed_file, seed_graph_on_startup};
