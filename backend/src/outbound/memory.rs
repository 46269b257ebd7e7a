//! In-process social graph used when no database is configured.
//!
//! A single [`InMemorySocialGraph`] serves every driven port, so the HTTP
//! surface and integration tests run without PostgreSQL. State is lost on
//! restart.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{
    FollowGraphError, FollowGraphStore, FollowRepository, FollowRepositoryError,
    UserPersistenceError, UserRepository,
};
use crate::domain::{FollowEdge, User, UserId};

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<UserId, User>,
    edges: HashMap<(UserId, UserId), DateTime<Utc>>,
}

impl Inner {
    fn neighbours(&self, user: &UserId, outgoing: bool) -> HashSet<UserId> {
        self.edges
            .keys()
            .filter_map(|(follower, followed)| match outgoing {
                true if follower == user => Some(followed.clone()),
                false if followed == user => Some(follower.clone()),
                _ => None,
            })
            .collect()
    }

    fn edges_matching(&self, keep: impl Fn(&UserId, &UserId) -> bool) -> Vec<FollowEdge> {
        let mut edges: Vec<FollowEdge> = self
            .edges
            .iter()
            .filter(|((follower, followed), _)| keep(follower, followed))
            .map(|((follower, followed), at)| {
                FollowEdge::new(follower.clone(), followed.clone(), *at)
            })
            .collect();
        edges.sort_by_key(FollowEdge::followed_at);
        edges
    }
}

/// Thread-safe map-backed graph and user directory.
///
/// # Examples
/// ```
/// use towntalk::domain::ports::{FollowGraphStore, UserRepository};
/// use towntalk::domain::{User, UserId};
/// use towntalk::outbound::memory::InMemorySocialGraph;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let graph = InMemorySocialGraph::new();
/// let ada = User::try_from_strings("ada", "Ada").expect("valid user");
/// graph.upsert(&ada).await.expect("stored");
/// let followers = graph.followers(ada.id()).await.expect("lookup");
/// assert!(followers.is_empty());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemorySocialGraph {
    inner: Mutex<Inner>,
}

impl InMemorySocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from users and `(follower, followed, at)` edges.
    pub fn seeded(
        users: impl IntoIterator<Item = User>,
        edges: impl IntoIterator<Item = FollowEdge>,
    ) -> Self {
        let inner = Inner {
            users: users
                .into_iter()
                .map(|user| (user.id().clone(), user))
                .collect(),
            edges: edges
                .into_iter()
                .map(|edge| {
                    let at = edge.followed_at();
                    ((edge.follower().clone(), edge.followed().clone()), at)
                })
                .collect(),
        };
        Self {
            inner: Mutex::new(inner),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, String> {
        self.inner
            .lock()
            .map_err(|_| "in-memory graph lock poisoned".to_owned())
    }
}

#[async_trait]
impl FollowGraphStore for InMemorySocialGraph {
    async fn followers(&self, user: &UserId) -> Result<HashSet<UserId>, FollowGraphError> {
        let inner = self.lock().map_err(FollowGraphError::query)?;
        Ok(inner.neighbours(user, false))
    }

    async fn following(&self, user: &UserId) -> Result<HashSet<UserId>, FollowGraphError> {
        let inner = self.lock().map_err(FollowGraphError::query)?;
        Ok(inner.neighbours(user, true))
    }
}

#[async_trait]
impl FollowRepository for InMemorySocialGraph {
    async fn exists(
        &self,
        follower: &UserId,
        followed: &UserId,
    ) -> Result<bool, FollowRepositoryError> {
        let inner = self.lock().map_err(FollowRepositoryError::query)?;
        Ok(inner
            .edges
            .contains_key(&(follower.clone(), followed.clone())))
    }

    async fn insert(&self, edge: &FollowEdge) -> Result<(), FollowRepositoryError> {
        let mut inner = self.lock().map_err(FollowRepositoryError::query)?;
        inner
            .edges
            .entry((edge.follower().clone(), edge.followed().clone()))
            .or_insert(edge.followed_at());
        Ok(())
    }

    async fn delete(
        &self,
        follower: &UserId,
        followed: &UserId,
    ) -> Result<bool, FollowRepositoryError> {
        let mut inner = self.lock().map_err(FollowRepositoryError::query)?;
        Ok(inner
            .edges
            .remove(&(follower.clone(), followed.clone()))
            .is_some())
    }

    async fn edges_to(&self, user: &UserId) -> Result<Vec<FollowEdge>, FollowRepositoryError> {
        let inner = self.lock().map_err(FollowRepositoryError::query)?;
        Ok(inner.edges_matching(|_, followed| followed == user))
    }

    async fn edges_from(&self, user: &UserId) -> Result<Vec<FollowEdge>, FollowRepositoryError> {
        let inner = self.lock().map_err(FollowRepositoryError::query)?;
        Ok(inner.edges_matching(|follower, _| follower == user))
    }
}

#[async_trait]
impl UserRepository for InMemorySocialGraph {
    async fn upsert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut inner = self.lock().map_err(UserPersistenceError::query)?;
        inner.users.insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let inner = self.lock().map_err(UserPersistenceError::query)?;
        Ok(inner.users.get(id).cloned())
    }

    async fn find_many(&self, ids: &[UserId]) -> Result<Vec<User>, UserPersistenceError> {
        let inner = self.lock().map_err(UserPersistenceError::query)?;
        Ok(ids
            .iter()
            .filter_map(|id| inner.users.get(id).cloned())
            .collect())
    }
}
