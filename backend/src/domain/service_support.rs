//! Shared port-error to domain-error mapping for the social graph services.

use serde_json::json;

use crate::domain::ports::{FollowGraphError, FollowRepositoryError, UserPersistenceError};
use crate::domain::{ConnectionGraphError, DISPLAY_NAME_MAX, DisplayName, Error, User, UserId};

pub(crate) fn map_graph_error(error: FollowGraphError) -> Error {
    match error {
        FollowGraphError::Connection { message } => {
            Error::service_unavailable(format!("follow graph unavailable: {message}"))
        }
        FollowGraphError::Query { message } => {
            Error::internal(format!("follow graph error: {message}"))
        }
    }
}

pub(crate) fn map_connection_error(error: ConnectionGraphError) -> Error {
    match error {
        ConnectionGraphError::Store(inner) => map_graph_error(inner),
        ConnectionGraphError::TraversalLimitExceeded { visited, limit } => {
            Error::service_unavailable("connection search exceeded its traversal budget")
                .with_details(json!({
                    "code": "traversal_limit_exceeded",
                    "visited": visited,
                    "limit": limit,
                }))
        }
    }
}

pub(crate) fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

pub(crate) fn map_follow_repository_error(error: FollowRepositoryError) -> Error {
    match error {
        FollowRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("follow repository unavailable: {message}"))
        }
        FollowRepositoryError::Query { message } => {
            Error::internal(format!("follow repository error: {message}"))
        }
    }
}

/// Stand-in for a user referenced by an edge but absent from the directory:
/// the id doubles as the display name, clipped to the display name limit.
pub(crate) fn placeholder_user(id: &UserId) -> Result<User, Error> {
    let name: String = id.as_ref().chars().take(DISPLAY_NAME_MAX).collect();
    let display_name = DisplayName::new(name)
        .map_err(|err| Error::internal(format!("invalid placeholder display name: {err}")))?;
    Ok(User::new(id.clone(), display_name))
}

/// Set size as a wire count, saturating on targets where `usize` is wider.
pub(crate) fn saturating_count(len: usize) -> u64 {
    u64::try_from(len).unwrap_or(u64::MAX)
}

/// Order users by display name, then id, so listings are stable.
pub(crate) fn sort_users(users: &mut [User]) {
    users.sort_by(|a, b| {
        a.display_name()
            .cmp(b.display_name())
            .then_with(|| a.id().cmp(b.id()))
    });
}
