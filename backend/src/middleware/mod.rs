//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns,
//! currently the static-route hit counter.

pub mod hits;

pub use hits::{HitCounter, RecordHit};
