//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations under `migrations/` exactly;
//! regenerate with `diesel print-schema` when the schema changes.

diesel::table! {
    /// Registered user accounts.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Record creation timestamp, defaulted by the database.
        created_at -> Timestamptz,
        /// Last modification timestamp, defaulted by the database.
        updated_at -> Timestamptz,
        /// Registration address; no uniqueness constraint is assumed here.
        email -> Text,
    }
}

diesel::table! {
    /// Published chirps.
    chirps (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Record creation timestamp, defaulted by the database.
        created_at -> Timestamptz,
        /// Last modification timestamp, defaulted by the database.
        updated_at -> Timestamptz,
        /// Moderated post text (max 140 characters).
        body -> Varchar,
        /// Author reference; cascades on user deletion.
        user_id -> Uuid,
    }
}

diesel::joinable!(chirps -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(chirps, users);
