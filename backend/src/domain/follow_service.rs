//! Follow relationship services: toggling edges, counts, growth charts and
//! network listings.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::ports::{
    FollowCommand, FollowGraphStore, FollowRepository, FollowStatsQuery, NetworkQuery,
    UserRepository,
};
use crate::domain::service_support::{
    map_follow_repository_error, map_graph_error, map_user_error, placeholder_user,
    saturating_count, sort_users,
};
use crate::domain::{
    Error, FollowEdge, FollowStats, FollowToggleOutcome, MonthlyCount, NetworkEntry, NetworkTab,
    User, UserId, group_by_month, intersect_followers,
};

/// How many followed users seed the recommendation list.
pub const RECOMMENDATION_SEEDS: usize = 5;

/// Service implementing [`FollowCommand`], [`FollowStatsQuery`] and
/// [`NetworkQuery`].
pub struct FollowService<G: ?Sized, F: ?Sized, U: ?Sized> {
    graph: Arc<G>,
    follows: Arc<F>,
    users: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<G: ?Sized, F: ?Sized, U: ?Sized> FollowService<G, F, U> {
    pub fn new(graph: Arc<G>, follows: Arc<F>, users: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self {
            graph,
            follows,
            users,
            clock,
        }
    }
}

impl<G, F, U> FollowService<G, F, U>
where
    G: FollowGraphStore + ?Sized,
    F: FollowRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    async fn require_user(&self, id: &UserId, missing: &str) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found(missing))
    }

    async fn followers(&self, user: &UserId) -> Result<HashSet<UserId>, Error> {
        self.graph.followers(user).await.map_err(map_graph_error)
    }

    async fn following(&self, user: &UserId) -> Result<HashSet<UserId>, Error> {
        self.graph.following(user).await.map_err(map_graph_error)
    }

    /// Resolve ids to users, keeping the input order.
    async fn resolve(&self, ids: &[UserId]) -> Result<Vec<User>, Error> {
        let found = self.users.find_many(ids).await.map_err(map_user_error)?;
        let mut by_id: HashMap<UserId, User> = found
            .into_iter()
            .map(|user| (user.id().clone(), user))
            .collect();
        ids.iter()
            .map(|id| match by_id.remove(id) {
                Some(user) => Ok(user),
                None => {
                    warn!(user_id = %id, "follow edge references a user missing from the directory");
                    placeholder_user(id)
                }
            })
            .collect()
    }

    async fn entries(
        &self,
        ids: HashSet<UserId>,
        mutual_with: &HashSet<UserId>,
    ) -> Result<Vec<NetworkEntry>, Error> {
        let ids: Vec<UserId> = ids.into_iter().collect();
        let mut users = self.resolve(&ids).await?;
        sort_users(&mut users);
        Ok(users
            .into_iter()
            .map(|user| {
                let is_mutual = mutual_with.contains(user.id());
                NetworkEntry::new(user, is_mutual)
            })
            .collect())
    }

    /// For each of the first followed users (by id), the first user they
    /// follow that `user` does not.
    async fn recommendations(&self, user: &UserId) -> Result<Vec<UserId>, Error> {
        let following = self.following(user).await?;
        let mut seeds: Vec<&UserId> = following.iter().collect();
        seeds.sort();

        let mut picked: Vec<UserId> = Vec::new();
        for seed in seeds.into_iter().take(RECOMMENDATION_SEEDS) {
            let mut candidates: Vec<UserId> = self.following(seed).await?.into_iter().collect();
            candidates.sort();
            let choice = candidates.into_iter().find(|candidate| {
                candidate != user && !following.contains(candidate) && !picked.contains(candidate)
            });
            if let Some(candidate) = choice {
                picked.push(candidate);
            }
        }
        Ok(picked)
    }
}

#[async_trait]
impl<G, F, U> FollowCommand for FollowService<G, F, U>
where
    G: FollowGraphStore + ?Sized,
    F: FollowRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    async fn toggle_follow(
        &self,
        follower: &UserId,
        followed: &UserId,
    ) -> Result<FollowToggleOutcome, Error> {
        self.require_user(follower, "current user not found").await?;
        self.require_user(followed, "user to follow/unfollow not found")
            .await?;
        if follower == followed {
            return Err(Error::invalid_request("users cannot follow themselves")
                .with_details(json!({ "code": "self_follow" })));
        }

        let was_following = self
            .follows
            .exists(follower, followed)
            .await
            .map_err(map_follow_repository_error)?;
        if was_following {
            self.follows
                .delete(follower, followed)
                .await
                .map_err(map_follow_repository_error)?;
        } else {
            let edge = FollowEdge::new(follower.clone(), followed.clone(), self.clock.utc());
            self.follows
                .insert(&edge)
                .await
                .map_err(map_follow_repository_error)?;
        }

        let followers_of_followed = self.followers(followed).await?;
        let following_of_followed = self.following(followed).await?;
        let followers_of_follower = self.followers(follower).await?;
        let mutual = intersect_followers(&followers_of_follower, &followers_of_followed);

        debug!(
            follower = %follower,
            followed = %followed,
            is_following = !was_following,
            "follow toggled"
        );

        Ok(FollowToggleOutcome {
            is_following: !was_following,
            followers_count: saturating_count(followers_of_followed.len()),
            following_count: saturating_count(following_of_followed.len()),
            mutual_followers_count: saturating_count(mutual.len()),
        })
    }
}

#[async_trait]
impl<G, F, U> FollowStatsQuery for FollowService<G, F, U>
where
    G: FollowGraphStore + ?Sized,
    F: FollowRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    async fn follow_stats(&self, user: &UserId) -> Result<FollowStats, Error> {
        self.require_user(user, "user not found").await?;
        Ok(FollowStats {
            followers_count: saturating_count(self.followers(user).await?.len()),
            following_count: saturating_count(self.following(user).await?.len()),
        })
    }

    async fn followers_growth(&self, user: &UserId) -> Result<Vec<MonthlyCount>, Error> {
        self.require_user(user, "user not found").await?;
        let edges = self
            .follows
            .edges_to(user)
            .await
            .map_err(map_follow_repository_error)?;
        Ok(group_by_month(edges.iter().map(FollowEdge::followed_at)))
    }

    async fn following_growth(&self, user: &UserId) -> Result<Vec<MonthlyCount>, Error> {
        self.require_user(user, "user not found").await?;
        let edges = self
            .follows
            .edges_from(user)
            .await
            .map_err(map_follow_repository_error)?;
        Ok(group_by_month(edges.iter().map(FollowEdge::followed_at)))
    }
}

#[async_trait]
impl<G, F, U> NetworkQuery for FollowService<G, F, U>
where
    G: FollowGraphStore + ?Sized,
    F: FollowRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    async fn network(&self, user: &UserId, tab: NetworkTab) -> Result<Vec<NetworkEntry>, Error> {
        self.require_user(user, "user not found").await?;
        match tab {
            NetworkTab::Following => {
                let following = self.following(user).await?;
                let followers = self.followers(user).await?;
                self.entries(following, &followers).await
            }
            NetworkTab::Followers => {
                let followers = self.followers(user).await?;
                let following = self.following(user).await?;
                self.entries(followers, &following).await
            }
            NetworkTab::Recommended => {
                let picked = self.recommendations(user).await?;
                let users = self.resolve(&picked).await?;
                Ok(users
                    .into_iter()
                    .map(|user| NetworkEntry::new(user, false))
                    .collect())
            }
        }
    }
}

#[cfg(test)]
#[path = "follow_service_tests.rs"]
mod tests;
