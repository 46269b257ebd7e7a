//! Read-only view of the directed follow graph.
//!
//! The connection finder consumes nothing else: two neighbour lookups per
//! user, each returning a complete snapshot of that user's edges at call
//! time. Unknown users have no edges, so both lookups yield empty sets.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by follow graph adapters.
    pub enum FollowGraphError {
        /// The backing store could not be reached.
        Connection { message: String } => "follow graph connection failed: {message}",
        /// A neighbour lookup failed during execution.
        Query { message: String } => "follow graph query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowGraphStore: Send + Sync {
    /// Users who follow `user`.
    async fn followers(&self, user: &UserId) -> Result<HashSet<UserId>, FollowGraphError>;

    /// Users `user` follows.
    async fn following(&self, user: &UserId) -> Result<HashSet<UserId>, FollowGraphError>;
}

/// Graph with no edges at all; every user is isolated.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFollowGraphStore;

#[async_trait]
impl FollowGraphStore for FixtureFollowGraphStore {
    async fn followers(&self, _user: &UserId) -> Result<HashSet<UserId>, FollowGraphError> {
        Ok(HashSet::new())
    }

    async fn following(&self, _user: &UserId) -> Result<HashSet<UserId>, FollowGraphError> {
        Ok(HashSet::new())
    }
}
