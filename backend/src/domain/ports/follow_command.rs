//! Driving port for follow and unfollow actions.

use async_trait::async_trait;

use crate::domain::{Error, FollowToggleOutcome, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowCommand: Send + Sync {
    /// Follow `followed` if `follower` does not follow them yet, otherwise
    /// unfollow.
    async fn toggle_follow(
        &self,
        follower: &UserId,
        followed: &UserId,
    ) -> Result<FollowToggleOutcome, Error>;
}
