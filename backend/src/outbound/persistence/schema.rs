//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Users known to the social graph.
    users (id) {
        /// Opaque identifier issued by the identity provider.
        id -> Text,
        display_name -> Varchar,
        date_joined -> Timestamptz,
    }
}

diesel::table! {
    /// Directed follow edges; `follower_id` follows `followed_id`.
    user_follows (follower_id, followed_id) {
        follower_id -> Text,
        followed_id -> Text,
        followed_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, user_follows);
