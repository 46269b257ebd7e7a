//! Bulk loading of users and follow edges from a JSON document.
//!
//! Used to populate a fresh store at startup. The document is validated as a
//! whole before anything is written, then applied through the
//! [`UserRepository`] and [`FollowRepository`] ports, so the same seed works
//! against the in-memory graph and PostgreSQL. Applying a seed twice is
//! harmless: users are upserted and existing edges keep their timestamp.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::ports::{
    FollowRepository, FollowRepositoryError, UserPersistenceError, UserRepository,
};
use crate::domain::{FollowEdge, User, UserId, UserValidationError};

/// A user entry in a seed document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeedUser {
    pub id: String,
    pub display_name: String,
}

/// A follow edge in a seed document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeedFollow {
    pub follower_id: String,
    pub followed_id: String,
    pub followed_at: DateTime<Utc>,
}

/// Users and follow edges to load into an empty store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeedGraph {
    pub users: Vec<SeedUser>,
    #[serde(default)]
    pub follows: Vec<SeedFollow>,
}

impl SeedGraph {
    /// Parse a seed document.
    ///
    /// # Examples
    /// ```
    /// use towntalk::domain::SeedGraph;
    ///
    /// let seed = SeedGraph::from_json(r#"{"users": [{"id": "ann", "displayName": "Ann"}]}"#)
    ///     .expect("valid seed");
    /// assert_eq!(seed.users.len(), 1);
    /// assert!(seed.follows.is_empty());
    /// ```
    pub fn from_json(contents: &str) -> Result<Self, GraphSeedError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Convert to domain values, checking every edge joins two seeded users
    /// and that no user follows themself.
    fn validate(&self) -> Result<(Vec<User>, Vec<FollowEdge>), GraphSeedError> {
        let users = self
            .users
            .iter()
            .map(|seed| {
                User::try_from_strings(seed.id.as_str(), seed.display_name.as_str()).map_err(
                    |source| GraphSeedError::InvalidUser {
                        id: seed.id.clone(),
                        source,
                    },
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        let known: HashSet<&UserId> = users.iter().map(User::id).collect();

        let known_id = |raw: &str| -> Result<UserId, GraphSeedError> {
            let id = UserId::new(raw).map_err(|source| GraphSeedError::InvalidUser {
                id: raw.to_owned(),
                source,
            })?;
            if known.contains(&id) {
                Ok(id)
            } else {
                Err(GraphSeedError::UnknownUser { id: raw.to_owned() })
            }
        };

        let edges = self
            .follows
            .iter()
            .map(|seed| {
                let edge = FollowEdge::new(
                    known_id(&seed.follower_id)?,
                    known_id(&seed.followed_id)?,
                    seed.followed_at,
                );
                if edge.is_self_edge() {
                    return Err(GraphSeedError::SelfFollow {
                        id: seed.follower_id.clone(),
                    });
                }
                Ok(edge)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok((users, edges))
    }
}

/// Counts of what a seed run wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphSeedOutcome {
    pub users: usize,
    pub follows: usize,
}

/// Failures while parsing, validating or applying a seed.
#[derive(Debug, Error)]
pub enum GraphSeedError {
    #[error("seed document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed user {id:?} is invalid: {source}")]
    InvalidUser {
        id: String,
        #[source]
        source: UserValidationError,
    },
    #[error("seed follow references unknown user {id:?}")]
    UnknownUser { id: String },
    #[error("seed user {id:?} follows themself")]
    SelfFollow { id: String },
    #[error("failed to store seed users: {0}")]
    Users(#[from] UserPersistenceError),
    #[error("failed to store seed follows: {0}")]
    Follows(#[from] FollowRepositoryError),
}

/// Applies a [`SeedGraph`] through the repository ports.
pub struct GraphSeeder<F: ?Sized, U: ?Sized> {
    follows: Arc<F>,
    users: Arc<U>,
}

impl<F: ?Sized, U: ?Sized> GraphSeeder<F, U> {
    pub fn new(follows: Arc<F>, users: Arc<U>) -> Self {
        Self { follows, users }
    }
}

impl<F, U> GraphSeeder<F, U>
where
    F: FollowRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    /// Validate the whole seed, then upsert its users before inserting its
    /// edges.
    ///
    /// # Errors
    /// Returns [`GraphSeedError`] when validation fails (nothing is written)
    /// or when a repository call fails part way through.
    pub async fn apply(&self, seed: &SeedGraph) -> Result<GraphSeedOutcome, GraphSeedError> {
        let (users, edges) = seed.validate()?;
        for user in &users {
            self.users.upsert(user).await?;
        }
        for edge in &edges {
            self.follows.insert(edge).await?;
        }
        debug!(users = users.len(), follows = edges.len(), "seed graph applied");
        Ok(GraphSeedOutcome {
            users: users.len(),
            follows: edges.len(),
        })
    }
}

#[cfg(test)]
#[path = "graph_seed_tests.rs"]
mod tests;
