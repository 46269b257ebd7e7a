//! Driving port for follower counts and growth charts.

use async_trait::async_trait;

use crate::domain::{Error, FollowStats, MonthlyCount, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowStatsQuery: Send + Sync {
    async fn follow_stats(&self, user: &UserId) -> Result<FollowStats, Error>;

    /// New followers per month, oldest first.
    async fn followers_growth(&self, user: &UserId) -> Result<Vec<MonthlyCount>, Error>;

    /// Users newly followed per month, oldest first.
    async fn following_growth(&self, user: &UserId) -> Result<Vec<MonthlyCount>, Error>;
}
