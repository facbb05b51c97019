//! Domain primitives and core logic.
//!
//! Purpose: Define the transport-agnostic heart of the service: entities,
//! chirp body validation, content moderation, the operator-mode flag, and
//! the persistence ports. Nothing here knows about HTTP or SQL.

pub mod chirp;
pub mod moderation;
pub mod platform;
pub mod ports;
pub mod user;

pub use self::chirp::{Chirp, ChirpBody, ChirpValidationError, MAX_CHIRP_LENGTH};
pub use self::moderation::censor;
pub use self::platform::Platform;
pub use self::user::User;
