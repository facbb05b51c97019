//! Driven port for user persistence.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::User;
use crate::domain::ports::StoreError;

/// Persistence operations for users.
///
/// Implementations are thin passthroughs to the backing store: no email
/// format or uniqueness checks happen here, and a store-level rejection
/// surfaces as a [`StoreError`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user with the given email and return the stored row.
    async fn create(&self, email: &str) -> Result<User, StoreError>;

    /// Remove every user row (cascading to their chirps where the store
    /// enforces it). Destructive; callers gate this behind operator mode.
    async fn delete_all(&self) -> Result<(), StoreError>;
}

/// In-memory `UserRepository` used by handler and integration tests.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the stored users, in insertion order.
    pub fn all(&self) -> Vec<User> {
        self.rows
            .lock()
            .map(|rows| rows.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, email: &str) -> Result<User, StoreError> {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            email: email.to_owned(),
        };
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| StoreError::query("repository lock poisoned"))?;
        rows.push(user.clone());
        Ok(user)
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| StoreError::query("repository lock poisoned"))?;
        rows.clear();
        Ok(())
    }
}
