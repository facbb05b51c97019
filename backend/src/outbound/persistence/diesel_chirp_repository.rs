//! PostgreSQL-backed `ChirpRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ChirpRow, NewChirpRow};
use super::pool::DbPool;
use super::schema::chirps;
use crate::domain::Chirp;
use crate::domain::ports::{ChirpRepository, StoreError};

/// Diesel-backed implementation of the `ChirpRepository` port.
///
/// The body arrives already validated and moderated; this adapter only
/// maps rows. Author existence is enforced by the `chirps.user_id` foreign
/// key, surfacing as a query-level [`StoreError`] on violation.
#[derive(Clone)]
pub struct DieselChirpRepository {
    pool: DbPool,
}

impl DieselChirpRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChirpRepository for DieselChirpRepository {
    async fn create(&self, body: &str, user_id: Uuid) -> Result<Chirp, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: ChirpRow = diesel::insert_into(chirps::table)
            .values(NewChirpRow {
                id: Uuid::new_v4(),
                body,
                user_id,
            })
            .returning(ChirpRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Chirp>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // No ORDER BY: the listing order is store-defined.
        let rows: Vec<ChirpRow> = chirps::table
            .select(ChirpRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Chirp::from).collect())
    }
}
