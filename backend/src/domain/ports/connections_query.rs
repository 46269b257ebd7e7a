//! Driving port for the admin "degree of connections" report.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DisplayName, Error, User, UserId};

/// Everything the admin report shows about how two users are connected.
///
/// Listings other than `path` are sorted by display name, then id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionsReport {
    #[schema(value_type = String, example = "Ada Lovelace")]
    pub user1_name: DisplayName,
    #[schema(value_type = String, example = "Grace Hopper")]
    pub user2_name: DisplayName,
    /// Followers of the first user.
    pub all_connections_user1: Vec<User>,
    /// Followers of the second user.
    pub all_connections_user2: Vec<User>,
    /// Users following both.
    pub mutual_connections: Vec<User>,
    /// Edges on the path; `0` when the users are equal or unconnected.
    pub degree_of_separation: usize,
    /// Shortest chain from the first user to the second, empty when none.
    pub path: Vec<User>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionsQuery: Send + Sync {
    /// Build the report for two existing users.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when either user is
    /// unknown.
    async fn connections_report(
        &self,
        user1: &UserId,
        user2: &UserId,
    ) -> Result<ConnectionsReport, Error>;
}
