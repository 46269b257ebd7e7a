//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod connections_query;
mod follow_command;
mod follow_graph_store;
mod follow_repository;
mod follow_stats_query;
mod network_query;
mod user_repository;

pub use connections_query::{ConnectionsQuery, ConnectionsReport};
#[cfg(test)]
pub use connections_query::MockConnectionsQuery;
pub use follow_command::FollowCommand;
#[cfg(test)]
pub use follow_command::MockFollowCommand;
pub use follow_graph_store::{FixtureFollowGraphStore, FollowGraphError, FollowGraphStore};
#[cfg(test)]
pub use follow_graph_store::MockFollowGraphStore;
pub use follow_repository::{FollowRepository, FollowRepositoryError};
#[cfg(test)]
pub use follow_repository::MockFollowRepository;
pub use follow_stats_query::FollowStatsQuery;
#[cfg(test)]
pub use follow_stats_query::MockFollowStatsQuery;
pub use network_query::NetworkQuery;
#[cfg(test)]
pub use network_query::MockNetworkQuery;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
