//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::ports::{
    MockConnectionsQuery, MockFollowCommand, MockFollowStatsQuery, MockNetworkQuery,
};
use crate::inbound::http::state::HttpState;

/// Mock ports for handler tests. Mocks without expectations panic when
/// called, so each test only primes the port its handler uses.
#[derive(Default)]
pub struct TestPorts {
    pub connections: MockConnectionsQuery,
    pub follows: MockFollowCommand,
    pub follow_stats: MockFollowStatsQuery,
    pub network: MockNetworkQuery,
}

impl TestPorts {
    pub fn into_state(self) -> HttpState {
        HttpState::new(
            Arc::new(self.connections),
            Arc::new(self.follows),
            Arc::new(self.follow_stats),
            Arc::new(self.network),
        )
    }
}
