//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    ConnectionsQuery, FollowCommand, FollowGraphStore, FollowRepository, FollowStatsQuery,
    NetworkQuery, UserRepository,
};
use crate::domain::{ConnectionsReportService, FollowService, TraversalLimits};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub connections: Arc<dyn ConnectionsQuery>,
    pub follows: Arc<dyn FollowCommand>,
    pub follow_stats: Arc<dyn FollowStatsQuery>,
    pub network: Arc<dyn NetworkQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use towntalk::domain::{ConnectionsReportService, FollowService, TraversalLimits};
    /// use towntalk::inbound::http::state::HttpState;
    /// use towntalk::outbound::memory::InMemorySocialGraph;
    ///
    /// let graph = Arc::new(InMemorySocialGraph::new());
    /// let follows = Arc::new(FollowService::new(
    ///     graph.clone(),
    ///     graph.clone(),
    ///     graph.clone(),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::new(
    ///     Arc::new(ConnectionsReportService::new(
    ///         graph.clone(),
    ///         graph,
    ///         TraversalLimits::default(),
    ///     )),
    ///     follows.clone(),
    ///     follows.clone(),
    ///     follows,
    /// );
    /// let _ = state.connections.clone();
    /// ```
    pub fn new(
        connections: Arc<dyn ConnectionsQuery>,
        follows: Arc<dyn FollowCommand>,
        follow_stats: Arc<dyn FollowStatsQuery>,
        network: Arc<dyn NetworkQuery>,
    ) -> Self {
        Self {
            connections,
            follows,
            follow_stats,
            network,
        }
    }

    /// Wire the domain services over a set of driven adapters.
    ///
    /// The follow service backs the command, stats and network ports.
    pub fn from_adapters<G, F, U>(
        graph: Arc<G>,
        follows: Arc<F>,
        users: Arc<U>,
        clock: Arc<dyn Clock>,
        limits: TraversalLimits,
    ) -> Self
    where
        G: FollowGraphStore + ?Sized + 'static,
        F: FollowRepository + ?Sized + 'static,
        U: UserRepository + ?Sized + 'static,
    {
        let connections = Arc::new(ConnectionsReportService::new(
            graph.clone(),
            users.clone(),
            limits,
        ));
        let follow_service = Arc::new(FollowService::new(graph, follows, users, clock));
        Self::new(
            connections,
            follow_service.clone(),
            follow_service.clone(),
            follow_service,
        )
    }
}
