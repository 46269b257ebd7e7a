//! Follow edges and the read models derived from them.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{DisplayName, User, UserId};

/// A directed edge: `follower` follows `followed` since `followed_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowEdge {
    follower: UserId,
    followed: UserId,
    followed_at: DateTime<Utc>,
}

impl FollowEdge {
    pub fn new(follower: UserId, followed: UserId, followed_at: DateTime<Utc>) -> Self {
        Self {
            follower,
            followed,
            followed_at,
        }
    }

    pub fn follower(&self) -> &UserId {
        &self.follower
    }

    pub fn followed(&self) -> &UserId {
        &self.followed
    }

    pub fn followed_at(&self) -> DateTime<Utc> {
        self.followed_at
    }

    /// Self-edges may exist in storage but never count as a traversal step.
    pub fn is_self_edge(&self) -> bool {
        self.follower == self.followed
    }
}

/// Number of follow events in one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    pub year: i32,
    /// Calendar month, `1..=12`.
    pub month: u32,
    pub count: u64,
}

/// Bucket timestamps by `(year, month)` in UTC, oldest month first.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use towntalk::domain::{group_by_month, MonthlyCount};
///
/// let stamps = [
///     Utc.with_ymd_and_hms(2024, 2, 3, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2024, 1, 9, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2024, 2, 28, 0, 0, 0).unwrap(),
/// ];
/// assert_eq!(
///     group_by_month(stamps),
///     vec![
///         MonthlyCount { year: 2024, month: 1, count: 1 },
///         MonthlyCount { year: 2024, month: 2, count: 2 },
///     ]
/// );
/// ```
pub fn group_by_month<I>(timestamps: I) -> Vec<MonthlyCount>
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    let mut buckets: BTreeMap<(i32, u32), u64> = BTreeMap::new();
    for stamp in timestamps {
        *buckets.entry((stamp.year(), stamp.month())).or_default() += 1;
    }
    buckets
        .into_iter()
        .map(|((year, month), count)| MonthlyCount { year, month, count })
        .collect()
}

/// Follower and following totals for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowStats {
    pub followers_count: u64,
    pub following_count: u64,
}

/// Result of toggling a follow edge.
///
/// Counts describe the followed user after the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowToggleOutcome {
    pub is_following: bool,
    pub followers_count: u64,
    pub following_count: u64,
    /// Users who follow both the acting user and the followed user.
    pub mutual_followers_count: u64,
}

/// Which slice of a user's network to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NetworkTab {
    Following,
    Followers,
    #[default]
    Recommended,
}

impl NetworkTab {
    /// Parse a tab name case-insensitively; anything unrecognised lists
    /// recommendations.
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
            Some("following") => Self::Following,
            Some("followers") => Self::Followers,
            _ => Self::Recommended,
        }
    }
}

/// One row of a network listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NetworkEntry {
    #[schema(value_type = String)]
    pub id: UserId,
    #[schema(value_type = String)]
    pub display_name: DisplayName,
    pub is_mutual: bool,
}

impl NetworkEntry {
    pub fn new(user: User, is_mutual: bool) -> Self {
        Self {
            id: user.id().clone(),
            display_name: user.display_name().clone(),
            is_mutual,
        }
    }
}
