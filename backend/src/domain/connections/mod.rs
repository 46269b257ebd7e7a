//! Connection finder over the follow graph.
//!
//! The graph is traversed as if undirected: a user's neighbours are everyone
//! who follows them plus everyone they follow. Both searches are plain
//! breadth-first traversals that fetch neighbour sets lazily from a
//! [`FollowGraphStore`], one frontier user at a time. Nothing is cached
//! between calls; each traversal owns its queue and visited set.

mod limits;
mod path;

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::UserId;
use crate::domain::ports::{FollowGraphError, FollowGraphStore};

pub use limits::{DEFAULT_MAX_VISITED, TraversalLimits};
pub use path::{ConnectionPath, Separation};

/// Failures of a connection search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionGraphError {
    /// A neighbour lookup failed; the traversal is abandoned without a
    /// partial result.
    #[error(transparent)]
    Store(#[from] FollowGraphError),
    /// The traversal would have visited more users than allowed.
    #[error("traversal reached {visited} users, exceeding the limit of {limit}")]
    TraversalLimitExceeded { visited: usize, limit: usize },
}

/// Users who follow both `a` and `b`.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use towntalk::domain::{UserId, intersect_followers};
///
/// let id = |raw: &str| UserId::new(raw).expect("valid id");
/// let a: HashSet<_> = [id("x"), id("y")].into();
/// let b: HashSet<_> = [id("y"), id("z")].into();
/// assert_eq!(intersect_followers(&a, &b), [id("y")].into());
/// ```
pub fn intersect_followers(a: &HashSet<UserId>, b: &HashSet<UserId>) -> HashSet<UserId> {
    a.intersection(b).cloned().collect()
}

/// BFS frontier: a FIFO of `(user, depth)` plus the set of users already
/// discovered. Users are marked visited when queued so each is expanded at
/// most once.
struct Frontier {
    queue: VecDeque<(UserId, usize)>,
    visited: HashSet<UserId>,
    limit: usize,
}

impl Frontier {
    fn new(start: &UserId, limit: usize) -> Self {
        Self {
            queue: VecDeque::from([(start.clone(), 0)]),
            visited: HashSet::from([start.clone()]),
            limit,
        }
    }

    fn pop(&mut self) -> Option<(UserId, usize)> {
        self.queue.pop_front()
    }

    fn has_seen(&self, user: &UserId) -> bool {
        self.visited.contains(user)
    }

    fn visited(&self) -> usize {
        self.visited.len()
    }

    /// Queue an unseen user. Fails once the visit budget is exhausted.
    fn push(&mut self, user: UserId, depth: usize) -> Result<(), ConnectionGraphError> {
        if self.visited.len() >= self.limit {
            return Err(ConnectionGraphError::TraversalLimitExceeded {
                visited: self.visited.len() + 1,
                limit: self.limit,
            });
        }
        self.visited.insert(user.clone());
        self.queue.push_back((user, depth));
        Ok(())
    }
}

/// Computes shortest connections between users.
pub struct ConnectionGraphService<G: ?Sized> {
    store: Arc<G>,
    limits: TraversalLimits,
}

impl<G: ?Sized> Clone for ConnectionGraphService<G> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            limits: self.limits,
        }
    }
}

impl<G: ?Sized> ConnectionGraphService<G> {
    /// Create a service with [`TraversalLimits::default`].
    pub fn new(store: Arc<G>) -> Self {
        Self::with_limits(store, TraversalLimits::default())
    }

    pub fn with_limits(store: Arc<G>, limits: TraversalLimits) -> Self {
        Self { store, limits }
    }

    pub fn limits(&self) -> TraversalLimits {
        self.limits
    }
}

impl<G> ConnectionGraphService<G>
where
    G: FollowGraphStore + ?Sized,
{
    /// Undirected neighbours of `user`, excluding `user` itself so a stored
    /// self-edge is never taken as a step.
    async fn neighbours(&self, user: &UserId) -> Result<HashSet<UserId>, FollowGraphError> {
        let mut neighbours = self.store.followers(user).await?;
        neighbours.extend(self.store.following(user).await?);
        neighbours.remove(user);
        Ok(neighbours)
    }

    /// Shortest path from `start` to `target`, both inclusive.
    ///
    /// Returns `[start]` when both ids are equal and an empty path when the
    /// target is unreachable (or lies beyond the depth horizon). Which of
    /// several equally short paths is returned is unspecified.
    pub async fn find_connection_path(
        &self,
        start: &UserId,
        target: &UserId,
    ) -> Result<ConnectionPath, ConnectionGraphError> {
        if start == target {
            return Ok(ConnectionPath::new(vec![start.clone()]));
        }

        let mut frontier = Frontier::new(start, self.limits.max_visited());
        // One predecessor per discovered user keeps memory linear in the
        // number of visited users.
        let mut predecessors: HashMap<UserId, UserId> = HashMap::new();

        while let Some((user, depth)) = frontier.pop() {
            if !self.limits.can_expand(depth) {
                continue;
            }
            let neighbours = self.neighbours(&user).await?;
            // The target is checked before any neighbour is queued so an
            // adjacent target never depends on set iteration order.
            if neighbours.contains(target) {
                predecessors.insert(target.clone(), user);
                let path = rebuild_path(start, target, &predecessors);
                debug!(
                    start = %start,
                    target = %target,
                    degree = depth + 1,
                    visited = frontier.visited(),
                    "connection path found"
                );
                return Ok(path);
            }
            for neighbour in neighbours {
                if frontier.has_seen(&neighbour) {
                    continue;
                }
                self.guard(frontier.push(neighbour.clone(), depth + 1), start, target)?;
                predecessors.insert(neighbour, user.clone());
            }
        }

        debug!(
            start = %start,
            target = %target,
            visited = frontier.visited(),
            "no connection path"
        );
        Ok(ConnectionPath::disconnected())
    }

    /// Number of edges on the shortest path between the two users.
    ///
    /// Equal ids are [`Separation::Connected(0)`] without touching the store.
    pub async fn degree_of_separation(
        &self,
        start: &UserId,
        target: &UserId,
    ) -> Result<Separation, ConnectionGraphError> {
        if start == target {
            return Ok(Separation::Connected(0));
        }

        let mut frontier = Frontier::new(start, self.limits.max_visited());
        while let Some((user, depth)) = frontier.pop() {
            if !self.limits.can_expand(depth) {
                continue;
            }
            let neighbours = self.neighbours(&user).await?;
            if neighbours.contains(target) {
                return Ok(Separation::Connected(depth + 1));
            }
            for neighbour in neighbours {
                if !frontier.has_seen(&neighbour) {
                    self.guard(frontier.push(neighbour, depth + 1), start, target)?;
                }
            }
        }

        debug!(
            start = %start,
            target = %target,
            visited = frontier.visited(),
            "users are disconnected"
        );
        Ok(Separation::Disconnected)
    }

    /// Users following both `a` and `b`.
    pub async fn mutual_connections(
        &self,
        a: &UserId,
        b: &UserId,
    ) -> Result<HashSet<UserId>, FollowGraphError> {
        let followers_a = self.store.followers(a).await?;
        let followers_b = self.store.followers(b).await?;
        Ok(intersect_followers(&followers_a, &followers_b))
    }

    fn guard(
        &self,
        result: Result<(), ConnectionGraphError>,
        start: &UserId,
        target: &UserId,
    ) -> Result<(), ConnectionGraphError> {
        if let Err(ConnectionGraphError::TraversalLimitExceeded { visited, limit }) = &result {
            warn!(
                start = %start,
                target = %target,
                visited,
                limit,
                "connection traversal aborted at visit limit"
            );
        }
        result
    }
}

fn rebuild_path(
    start: &UserId,
    target: &UserId,
    predecessors: &HashMap<UserId, UserId>,
) -> ConnectionPath {
    let mut users = vec![target.clone()];
    let mut current = target;
    while current != start {
        let Some(previous) = predecessors.get(current) else {
            break;
        };
        users.push(previous.clone());
        current = previous;
    }
    users.reverse();
    ConnectionPath::new(users)
}
