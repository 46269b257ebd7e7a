//! Results of a connection search.

use std::fmt;

use crate::domain::UserId;

/// Ordered chain of users from the start to the target, both inclusive.
///
/// An empty path means the two users are not connected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectionPath(Vec<UserId>);

impl ConnectionPath {
    pub(crate) fn new(users: Vec<UserId>) -> Self {
        Self(users)
    }

    /// The "no connection" result.
    pub fn disconnected() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges along the path, or `None` for the empty path.
    pub fn degree(&self) -> Option<usize> {
        self.0.len().checked_sub(1)
    }

    pub fn users(&self) -> &[UserId] {
        &self.0
    }

    pub fn into_users(self) -> Vec<UserId> {
        self.0
    }
}

/// Distance between two users in the undirected follow graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separation {
    Connected(usize),
    Disconnected,
}

impl Separation {
    /// Integer form used on the wire: the distance, or `-1` when disconnected.
    ///
    /// # Examples
    /// ```
    /// use towntalk::domain::Separation;
    ///
    /// assert_eq!(Separation::Connected(3).as_signed(), 3);
    /// assert_eq!(Separation::Disconnected.as_signed(), -1);
    /// ```
    pub fn as_signed(self) -> i64 {
        match self {
            Self::Connected(distance) => i64::try_from(distance).unwrap_or(i64::MAX),
            Self::Disconnected => -1,
        }
    }

    pub fn is_connected(self) -> bool {
        matches!(self, Self::Connected(_))
    }
}

impl From<&ConnectionPath> for Separation {
    fn from(path: &ConnectionPath) -> Self {
        path.degree().map_or(Self::Disconnected, Self::Connected)
    }
}

impl fmt::Display for Separation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connected(distance) => write!(f, "{distance}"),
            Self::Disconnected => f.write_str("disconnected"),
        }
    }
}
