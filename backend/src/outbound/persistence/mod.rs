//! PostgreSQL persistence adapters using Diesel.
//!
//! Concrete implementations of the domain repository ports backed by
//! PostgreSQL via Diesel with async support through `diesel-async` and
//! `bb8` connection pooling.
//!
//! The adapters are thin: they translate between Diesel row structs and
//! domain types, map database failures to [`StoreError`], and hold no
//! business logic. Row structs (`models`) and table definitions (`schema`)
//! are internal implementation details, never exposed to the domain.
//!
//! [`StoreError`]: crate::domain::ports::StoreError

mod diesel_chirp_repository;
mod diesel_user_repository;
mod error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_chirp_repository::DieselChirpRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
