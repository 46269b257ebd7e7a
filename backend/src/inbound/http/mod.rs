//! HTTP inbound adapter exposing REST endpoints.
//!
//! Handlers translate requests into driving-port calls and map
//! [`crate::domain::Error`] onto responses through [`ApiResult`].

use actix_web::{web, Scope};

pub mod charts;
pub mod connections;
pub mod error;
pub mod follows;
pub mod health;
pub mod network;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

/// Versioned API scope with every REST handler registered.
///
/// Health probes live outside this scope at the application root.
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .service(connections::get_connections)
        .service(follows::toggle_follow)
        .service(charts::followers_growth)
        .service(charts::following_growth)
        .service(charts::follow_stats)
        .service(network::list_network)
}
