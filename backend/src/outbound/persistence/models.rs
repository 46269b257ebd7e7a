//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{user_follows, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: String,
    pub display_name: String,
}

/// Insertable struct for creating user records; `date_joined` defaults in SQL.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: &'a str,
    pub display_name: &'a str,
}

/// Row struct for reading and writing follow edges.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = user_follows)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FollowRow {
    pub follower_id: String,
    pub followed_id: String,
    pub followed_at: DateTime<Utc>,
}
