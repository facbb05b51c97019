//! Environment configuration consumed at startup.
//!
//! Two variables drive the service: `DB_URL` (required PostgreSQL
//! connection string) and `PLATFORM` (`"dev"` enables the destructive
//! reset endpoint; anything else, including absence, means production).
//! `ASSETS_DIR` optionally overrides the static tree served under `/app`.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::Platform;

/// Default directory for the `/app` static tree.
const DEFAULT_ASSETS_DIR: &str = "./static";

/// Startup configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable {name}")]
    MissingVar {
        /// Name of the missing variable.
        name: &'static str,
    },
}

/// Runtime configuration read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Operator-mode flag.
    pub platform: Platform,
    /// Listen address.
    pub bind_addr: SocketAddr,
    /// Directory served under `/app`.
    pub assets_dir: PathBuf,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read configuration through `lookup`, keeping the parsing testable
    /// without touching the process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DB_URL").ok_or(ConfigError::MissingVar { name: "DB_URL" })?;
        let platform = lookup("PLATFORM")
            .map(|value| Platform::from_env_value(&value))
            .unwrap_or_default();
        let assets_dir = lookup("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR));

        Ok(Self {
            database_url,
            platform,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            assets_dir,
        })
    }
}
