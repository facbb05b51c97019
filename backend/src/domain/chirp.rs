//! Chirp entity and body validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Maximum accepted chirp body length in bytes.
pub const MAX_CHIRP_LENGTH: usize = 140;

/// A published chirp as stored and returned over the wire.
///
/// `body` is always the validated, post-moderation text: it never exceeds
/// [`MAX_CHIRP_LENGTH`] bytes and never contains a denylisted token in its
/// original form. Timestamps are set by the store at insert time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Chirp {
    /// Stable chirp identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: Uuid,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// Moderated post text.
    #[schema(example = "I had something to say")]
    pub body: String,
    /// Author reference. Existence is enforced by the store's foreign key,
    /// not checked before insert.
    pub user_id: Uuid,
}

/// Validation failures for submitted chirp bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChirpValidationError {
    /// The body exceeds [`MAX_CHIRP_LENGTH`] bytes.
    #[error("Chirp is too long")]
    TooLong,
}

/// A length-validated chirp body.
///
/// Construction enforces the length limit only; the text is carried
/// through unchanged. Moderation is a separate step applied by the caller
/// after validation, so an oversized body is rejected before any
/// replacement text could mask the violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChirpBody(String);

impl ChirpBody {
    /// Validate `body`, failing with [`ChirpValidationError::TooLong`] when
    /// it exceeds [`MAX_CHIRP_LENGTH`] bytes.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::chirp::ChirpBody;
    ///
    /// let body = ChirpBody::new("hello").expect("short body is valid");
    /// assert_eq!(body.as_str(), "hello");
    /// ```
    pub fn new(body: impl Into<String>) -> Result<Self, ChirpValidationError> {
        let body = body.into();
        if body.len() > MAX_CHIRP_LENGTH {
            return Err(ChirpValidationError::TooLong);
        }
        Ok(Self(body))
    }

    /// Borrow the validated text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper, returning the validated text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ChirpBody {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
