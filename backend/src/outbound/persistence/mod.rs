//! PostgreSQL persistence adapters using Diesel.
//!
//! Adapters only translate between row structs and domain types; rows and
//! the schema never leave this module. Every Diesel or pool failure is
//! mapped onto the port error of the trait being served.
//!
//! ```ignore
//! use towntalk::outbound::persistence::{DbPool, DieselFollowRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/towntalk")).await?;
//! let follows = DieselFollowRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_follow_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_follow_repository::DieselFollowRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{run_pending_migrations, MigrationError};
pub use pool::{DbPool, PoolConfig, PoolError};
