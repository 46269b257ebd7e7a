//! Outbound adapters implementing the driven ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel.
//! - **memory**: map-backed adapter for running without a database.

pub mod memory;
pub mod persistence;
