//! Shared HTTP adapter state.
//!
//! Handlers accept this bundle via `actix_web::web::Data` so they depend
//! only on domain ports and the operator-mode flag, staying testable
//! without a live store.

use std::sync::Arc;

use crate::domain::Platform;
use crate::domain::ports::{ChirpRepository, UserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User persistence port.
    pub users: Arc<dyn UserRepository>,
    /// Chirp persistence port.
    pub chirps: Arc<dyn ChirpRepository>,
    /// Gate for destructive operator endpoints.
    pub platform: Platform,
}

impl HttpState {
    /// Bundle the ports and operator-mode flag for the router.
    pub fn new(
        users: Arc<dyn UserRepository>,
        chirps: Arc<dyn ChirpRepository>,
        platform: Platform,
    ) -> Self {
        Self {
            users,
            chirps,
            platform,
        }
    }
}
