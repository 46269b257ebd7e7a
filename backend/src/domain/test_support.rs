//! Mock builders shared by the domain service tests.

use std::collections::{HashMap, HashSet};

use crate::domain::ports::{MockFollowGraphStore, MockUserRepository};
use crate::domain::{User, UserId};

pub(crate) fn id(raw: &str) -> UserId {
    UserId::new(raw).expect("valid user id")
}

/// Graph store answering neighbour lookups from a directed edge list.
pub(crate) fn graph_from(edges: &[(&str, &str)]) -> MockFollowGraphStore {
    let mut followers: HashMap<UserId, HashSet<UserId>> = HashMap::new();
    let mut following: HashMap<UserId, HashSet<UserId>> = HashMap::new();
    for (follower, followed) in edges {
        followers.entry(id(followed)).or_default().insert(id(follower));
        following.entry(id(follower)).or_default().insert(id(followed));
    }

    let mut store = MockFollowGraphStore::new();
    store
        .expect_followers()
        .returning(move |user| Ok(followers.get(user).cloned().unwrap_or_default()));
    store
        .expect_following()
        .returning(move |user| Ok(following.get(user).cloned().unwrap_or_default()));
    store
}

/// User directory holding `(id, display name)` pairs.
pub(crate) fn directory_of(users: &[(&str, &str)]) -> MockUserRepository {
    let directory: HashMap<UserId, User> = users
        .iter()
        .map(|(raw, name)| {
            let user = User::try_from_strings(*raw, *name).expect("valid user");
            (user.id().clone(), user)
        })
        .collect();
    let lookup = directory.clone();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .returning(move |user| Ok(lookup.get(user).cloned()));
    repo.expect_find_many().returning(move |ids| {
        Ok(ids
            .iter()
            .filter_map(|user| directory.get(user).cloned())
            .collect())
    });
    repo
}
