//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and are
//! never exposed to the domain; they exist to satisfy Diesel's type
//! requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{chirps, users};
use crate::domain::{Chirp, User};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            email: row.email,
        }
    }
}

/// Insertable struct for creating new user records. Timestamps are left to
/// the database defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
}

/// Row struct for reading from the chirps table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = chirps)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ChirpRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

impl From<ChirpRow> for Chirp {
    fn from(row: ChirpRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            body: row.body,
            user_id: row.user_id,
        }
    }
}

/// Insertable struct for creating new chirp records. Timestamps are left to
/// the database defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = chirps)]
pub(crate) struct NewChirpRow<'a> {
    pub id: Uuid,
    pub body: &'a str,
    pub user_id: Uuid,
}
