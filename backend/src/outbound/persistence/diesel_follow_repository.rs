//! PostgreSQL-backed follow graph and follow repository.
//!
//! One adapter serves both ports: the traversal reads neighbour sets through
//! [`FollowGraphStore`], while toggling and charts use [`FollowRepository`].

use std::collections::HashSet;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{
    FollowGraphError, FollowGraphStore, FollowRepository, FollowRepositoryError,
};
use crate::domain::{FollowEdge, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::FollowRow;
use super::pool::{DbPool, PoolError};
use super::schema::user_follows;

/// Diesel adapter over the `user_follows` table.
#[derive(Clone)]
pub struct DieselFollowRepository {
    pool: DbPool,
}

impl DieselFollowRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn graph_pool_error(error: PoolError) -> FollowGraphError {
    map_pool_error(error, FollowGraphError::connection)
}

fn graph_diesel_error(error: diesel::result::Error) -> FollowGraphError {
    map_diesel_error(error, FollowGraphError::query, FollowGraphError::connection)
}

fn repo_pool_error(error: PoolError) -> FollowRepositoryError {
    map_pool_error(error, FollowRepositoryError::connection)
}

fn repo_diesel_error(error: diesel::result::Error) -> FollowRepositoryError {
    map_diesel_error(
        error,
        FollowRepositoryError::query,
        FollowRepositoryError::connection,
    )
}

/// Stored ids were validated on the way in; a failure here means the table
/// was written by something else.
fn parse_stored_id(raw: String) -> Result<UserId, String> {
    UserId::new(raw).map_err(|err| format!("stored user id is invalid: {err}"))
}

fn row_to_edge(row: FollowRow) -> Result<FollowEdge, FollowRepositoryError> {
    let follower = parse_stored_id(row.follower_id).map_err(FollowRepositoryError::query)?;
    let followed = parse_stored_id(row.followed_id).map_err(FollowRepositoryError::query)?;
    Ok(FollowEdge::new(follower, followed, row.followed_at))
}

fn ids_to_set(ids: Vec<String>) -> Result<HashSet<UserId>, FollowGraphError> {
    ids.into_iter()
        .map(|raw| parse_stored_id(raw).map_err(FollowGraphError::query))
        .collect()
}

#[async_trait]
impl FollowGraphStore for DieselFollowRepository {
    async fn followers(&self, user: &UserId) -> Result<HashSet<UserId>, FollowGraphError> {
        let mut conn = self.pool.get().await.map_err(graph_pool_error)?;
        let ids: Vec<String> = user_follows::table
            .filter(user_follows::followed_id.eq(user.as_ref()))
            .select(user_follows::follower_id)
            .load(&mut conn)
            .await
            .map_err(graph_diesel_error)?;
        ids_to_set(ids)
    }

    async fn following(&self, user: &UserId) -> Result<HashSet<UserId>, FollowGraphError> {
        let mut conn = self.pool.get().await.map_err(graph_pool_error)?;
        let ids: Vec<String> = user_follows::table
            .filter(user_follows::follower_id.eq(user.as_ref()))
            .select(user_follows::followed_id)
            .load(&mut conn)
            .await
            .map_err(graph_diesel_error)?;
        ids_to_set(ids)
    }
}

#[async_trait]
impl FollowRepository for DieselFollowRepository {
    async fn exists(
        &self,
        follower: &UserId,
        followed: &UserId,
    ) -> Result<bool, FollowRepositoryError> {
        let mut conn = self.pool.get().await.map_err(repo_pool_error)?;
        diesel::select(diesel::dsl::exists(
            user_follows::table
                .filter(user_follows::follower_id.eq(follower.as_ref()))
                .filter(user_follows::followed_id.eq(followed.as_ref())),
        ))
        .get_result::<bool>(&mut conn)
        .await
        .map_err(repo_diesel_error)
    }

    async fn insert(&self, edge: &FollowEdge) -> Result<(), FollowRepositoryError> {
        let mut conn = self.pool.get().await.map_err(repo_pool_error)?;
        let row = FollowRow {
            follower_id: edge.follower().to_string(),
            followed_id: edge.followed().to_string(),
            followed_at: edge.followed_at(),
        };
        diesel::insert_into(user_follows::table)
            .values(&row)
            .on_conflict_do_nothing()
            .execute(&mut conn)
            .await
            .map_err(repo_diesel_error)?;
        Ok(())
    }

    async fn delete(
        &self,
        follower: &UserId,
        followed: &UserId,
    ) -> Result<bool, FollowRepositoryError> {
        let mut conn = self.pool.get().await.map_err(repo_pool_error)?;
        let removed = diesel::delete(
            user_follows::table
                .filter(user_follows::follower_id.eq(follower.as_ref()))
                .filter(user_follows::followed_id.eq(followed.as_ref())),
        )
        .execute(&mut conn)
        .await
        .map_err(repo_diesel_error)?;
        Ok(removed > 0)
    }

    async fn edges_to(&self, user: &UserId) -> Result<Vec<FollowEdge>, FollowRepositoryError> {
        let mut conn = self.pool.get().await.map_err(repo_pool_error)?;
        let rows: Vec<FollowRow> = user_follows::table
            .filter(user_follows::followed_id.eq(user.as_ref()))
            .order(user_follows::followed_at.asc())
            .select(FollowRow::as_select())
            .load(&mut conn)
            .await
            .map_err(repo_diesel_error)?;
        rows.into_iter().map(row_to_edge).collect()
    }

    async fn edges_from(&self, user: &UserId) -> Result<Vec<FollowEdge>, FollowRepositoryError> {
        let mut conn = self.pool.get().await.map_err(repo_pool_error)?;
        let rows: Vec<FollowRow> = user_follows::table
            .filter(user_follows::follower_id.eq(user.as_ref()))
            .order(user_follows::followed_at.asc())
            .select(FollowRow::as_select())
            .load(&mut conn)
            .await
            .map_err(repo_diesel_error)?;
        rows.into_iter().map(row_to_edge).collect()
    }
}
