//! Driving port for the followers, following and recommendation listings.

use async_trait::async_trait;

use crate::domain::{Error, NetworkEntry, NetworkTab, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NetworkQuery: Send + Sync {
    async fn network(&self, user: &UserId, tab: NetworkTab) -> Result<Vec<NetworkEntry>, Error>;
}
