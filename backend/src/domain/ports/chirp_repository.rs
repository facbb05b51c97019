//! Driven port for chirp persistence.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::Chirp;
use crate::domain::ports::StoreError;

/// Persistence operations for chirps.
///
/// `create` receives the already-validated, already-moderated body; this
/// layer never inspects the text. Whether `user_id` refers to an existing
/// user is left to the store's foreign-key enforcement, and a rejection
/// surfaces as a generic [`StoreError`].
#[async_trait]
pub trait ChirpRepository: Send + Sync {
    /// Insert a new chirp and return the stored row.
    async fn create(&self, body: &str, user_id: Uuid) -> Result<Chirp, StoreError>;

    /// Return all chirps. Ordering is store-defined: no explicit sort is
    /// applied, so callers must not rely on any particular order.
    async fn list(&self) -> Result<Vec<Chirp>, StoreError>;
}

/// In-memory `ChirpRepository` used by handler and integration tests.
///
/// Unlike the PostgreSQL adapter it enforces no foreign key, accepting any
/// `user_id`.
#[derive(Debug, Default)]
pub struct InMemoryChirpRepository {
    rows: Mutex<Vec<Chirp>>,
}

impl InMemoryChirpRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the stored chirps, in insertion order.
    pub fn all(&self) -> Vec<Chirp> {
        self.rows
            .lock()
            .map(|rows| rows.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChirpRepository for InMemoryChirpRepository {
    async fn create(&self, body: &str, user_id: Uuid) -> Result<Chirp, StoreError> {
        let now = Utc::now();
        let chirp = Chirp {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            body: body.to_owned(),
            user_id,
        };
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| StoreError::query("repository lock poisoned"))?;
        rows.push(chirp.clone());
        Ok(chirp)
    }

    async fn list(&self) -> Result<Vec<Chirp>, StoreError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| StoreError::query("repository lock poisoned"))?;
        Ok(rows.clone())
    }
}
