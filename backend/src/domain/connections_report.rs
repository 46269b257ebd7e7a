//! Admin connections report service.
//!
//! Combines the connection finder with plain follower lookups: the path and
//! its length come from the traversal, the "all connections" listings are each
//! user's followers, and the mutual listing is their intersection.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{
    ConnectionsQuery, ConnectionsReport, FollowGraphStore, UserRepository,
};
use crate::domain::service_support::{
    map_connection_error, map_graph_error, map_user_error, placeholder_user, sort_users,
};
use crate::domain::{
    ConnectionGraphService, Error, TraversalLimits, User, UserId, intersect_followers,
};

/// Message returned when either side of the report does not exist.
pub const USERS_NOT_FOUND_MESSAGE: &str = "One or both users not found.";

/// Implements [`ConnectionsQuery`] over a follow graph and a user directory.
pub struct ConnectionsReportService<G: ?Sized, U: ?Sized> {
    graph: ConnectionGraphService<G>,
    store: Arc<G>,
    users: Arc<U>,
}

impl<G: ?Sized, U: ?Sized> ConnectionsReportService<G, U> {
    pub fn new(store: Arc<G>, users: Arc<U>, limits: TraversalLimits) -> Self {
        Self {
            graph: ConnectionGraphService::with_limits(Arc::clone(&store), limits),
            store,
            users,
        }
    }
}

impl<G, U> ConnectionsReportService<G, U>
where
    G: FollowGraphStore + ?Sized,
    U: UserRepository + ?Sized,
{
    async fn require_user(&self, id: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found(USERS_NOT_FOUND_MESSAGE))
    }

    /// Resolve every id in one directory round trip.
    async fn directory(&self, ids: &HashSet<UserId>) -> Result<HashMap<UserId, User>, Error> {
        let wanted: Vec<UserId> = ids.iter().cloned().collect();
        let found = self
            .users
            .find_many(&wanted)
            .await
            .map_err(map_user_error)?;
        let mut directory: HashMap<UserId, User> = found
            .into_iter()
            .map(|user| (user.id().clone(), user))
            .collect();
        for id in ids {
            if !directory.contains_key(id) {
                warn!(user_id = %id, "follow edge references a user missing from the directory");
                directory.insert(id.clone(), placeholder_user(id)?);
            }
        }
        Ok(directory)
    }
}

fn sorted_users(ids: &HashSet<UserId>, directory: &HashMap<UserId, User>) -> Vec<User> {
    let mut users: Vec<User> = ids
        .iter()
        .filter_map(|id| directory.get(id).cloned())
        .collect();
    sort_users(&mut users);
    users
}

#[async_trait]
impl<G, U> ConnectionsQuery for ConnectionsReportService<G, U>
where
    G: FollowGraphStore + ?Sized,
    U: UserRepository + ?Sized,
{
    async fn connections_report(
        &self,
        user1: &UserId,
        user2: &UserId,
    ) -> Result<ConnectionsReport, Error> {
        let first = self.require_user(user1).await?;
        let second = self.require_user(user2).await?;

        let path = self
            .graph
            .find_connection_path(user1, user2)
            .await
            .map_err(map_connection_error)?;
        let followers1 = self.store.followers(user1).await.map_err(map_graph_error)?;
        let followers2 = self.store.followers(user2).await.map_err(map_graph_error)?;
        let mutual = intersect_followers(&followers1, &followers2);

        let mut referenced: HashSet<UserId> = followers1.union(&followers2).cloned().collect();
        referenced.extend(path.users().iter().cloned());
        let directory = self.directory(&referenced).await?;

        let degree_of_separation = path.degree().unwrap_or(0);
        let path_users = path
            .users()
            .iter()
            .filter_map(|id| directory.get(id).cloned())
            .collect();

        debug!(
            user1 = %user1,
            user2 = %user2,
            degree = degree_of_separation,
            mutual = mutual.len(),
            "connections report built"
        );

        Ok(ConnectionsReport {
            user1_name: first.display_name().clone(),
            user2_name: second.display_name().clone(),
            all_connections_user1: sorted_users(&followers1, &directory),
            all_connections_user2: sorted_users(&followers2, &directory),
            mutual_connections: sorted_users(&mutual, &directory),
            degree_of_separation,
            path: path_users,
        })
    }
}
