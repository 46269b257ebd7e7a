//! Choose driven adapters for the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::info;

use towntalk::domain::TraversalLimits;
use towntalk::domain::ports::{FollowGraphStore, FollowRepository, UserRepository};
use towntalk::inbound::http::state::HttpState;
use towntalk::outbound::memory::InMemorySocialGraph;
use towntalk::outbound::persistence::{DieselFollowRepository, DieselUserRepository};

use super::ServerConfig;

/// Driven adapters shared by every worker.
#[derive(Clone)]
pub(super) struct Adapters {
    pub(super) graph: Arc<dyn FollowGraphStore>,
    pub(super) follows: Arc<dyn FollowRepository>,
    pub(super) users: Arc<dyn UserRepository>,
}

/// Diesel adapters when a pool is configured, otherwise one shared in-memory
/// graph serving every port.
pub(super) fn build_adapters(config: &ServerConfig) -> Adapters {
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL adapters");
            let follows = Arc::new(DieselFollowRepository::new(pool.clone()));
            Adapters {
                graph: follows.clone(),
                follows,
                users: Arc::new(DieselUserRepository::new(pool.clone())),
            }
        }
        None => {
            info!("using in-memory adapters");
            let graph = Arc::new(InMemorySocialGraph::new());
            Adapters {
                graph: graph.clone(),
                follows: graph.clone(),
                users: graph,
            }
        }
    }
}

pub(super) fn build_http_state(adapters: &Adapters, limits: TraversalLimits) -> web::Data<HttpState> {
    web::Data::new(HttpState::from_adapters(
        adapters.graph.clone(),
        adapters.follows.clone(),
        adapters.users.clone(),
        Arc::new(DefaultClock),
        limits,
    ))
}
