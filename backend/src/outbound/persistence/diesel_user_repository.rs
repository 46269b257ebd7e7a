//! PostgreSQL-backed user directory.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel adapter over the `users` table.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> UserPersistenceError {
    map_pool_error(error, UserPersistenceError::connection)
}

fn diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    User::try_from_strings(row.id, row.display_name)
        .map_err(|err| UserPersistenceError::query(format!("stored user is invalid: {err}")))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn upsert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = NewUserRow {
            id: user.id().as_ref(),
            display_name: user.display_name().as_ref(),
        };
        diesel::insert_into(users::table)
            .values(&row)
            .on_conflict(users::id)
            .do_update()
            .set(users::display_name.eq(excluded(users::display_name)))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        row.map(row_to_user).transpose()
    }

    async fn find_many(&self, ids: &[UserId]) -> Result<Vec<User>, UserPersistenceError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let keys: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();
        let rows: Vec<UserRow> = users::table
            .filter(users::id.eq_any(keys))
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        rows.into_iter().map(row_to_user).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn rows_convert_to_users() {
        let user = row_to_user(UserRow {
            id: "u-1".into(),
            display_name: "Ada".into(),
        })
        .expect("valid row");
        assert_eq!(user.id().as_ref(), "u-1");
        assert_eq!(user.display_name().as_ref(), "Ada");
    }

    #[rstest]
    fn blank_display_names_are_rejected() {
        let err = row_to_user(UserRow {
            id: "u-1".into(),
            display_name: "  ".into(),
        })
        .expect_err("blank name");
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }
}
