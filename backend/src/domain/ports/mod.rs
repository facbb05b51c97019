//! Driven ports for persistence.
//!
//! Handlers depend on these traits only; production wires the Diesel
//! adapters from `outbound::persistence`, while tests use the in-memory
//! implementations that live alongside each port.

pub mod chirp_repository;
pub mod user_repository;

pub use chirp_repository::{ChirpRepository, InMemoryChirpRepository};
pub use user_repository::{InMemoryUserRepository, UserRepository};

/// Failure surfaced by a persistence port.
///
/// Operations are single autocommit statements with no retries; any
/// backing-store failure is reported through one of these variants and
/// mapped to an error response at the handler boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or a connection could not be
    /// checked out.
    #[error("store connection failed: {message}")]
    Connection { message: String },

    /// The store rejected the operation (constraint violation, bad
    /// statement, or any other query-level failure).
    #[error("store operation failed: {message}")]
    Query { message: String },
}

impl StoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}
