//! Port for mutating follow edges and reading their timestamps.
//!
//! The traversal only needs neighbour sets (see [`super::FollowGraphStore`]);
//! follow toggling and the growth charts need the edges themselves.

use async_trait::async_trait;

use crate::domain::{FollowEdge, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by follow repository adapters.
    pub enum FollowRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "follow repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "follow repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Whether `follower` currently follows `followed`.
    async fn exists(
        &self,
        follower: &UserId,
        followed: &UserId,
    ) -> Result<bool, FollowRepositoryError>;

    /// Store an edge. Inserting an edge that already exists is a no-op.
    async fn insert(&self, edge: &FollowEdge) -> Result<(), FollowRepositoryError>;

    /// Remove an edge, returning whether one was present.
    async fn delete(
        &self,
        follower: &UserId,
        followed: &UserId,
    ) -> Result<bool, FollowRepositoryError>;

    /// Edges whose followed user is `user`.
    async fn edges_to(&self, user: &UserId) -> Result<Vec<FollowEdge>, FollowRepositoryError>;

    /// Edges whose follower is `user`.
    async fn edges_from(&self, user: &UserId) -> Result<Vec<FollowEdge>, FollowRepositoryError>;
}
